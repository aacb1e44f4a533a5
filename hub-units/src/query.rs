//! Free-text conversion queries like "5 km to mi" or "100F -> C"

use serde::{Deserialize, Serialize};
use hub_core::{parse_number, NumberError};
use crate::convert::{ConversionResult, Converter, UnitPair};
use crate::unit::ConversionError;

/// Separators between source and target, tried in order
const ARROWS: [&str; 3] = ["->", "→", "=>"];
const WORDS: [&str; 3] = [" to ", " into ", " in "];

/// A parsed quick query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Parse a query of the form `<number> <unit> (to|in|into|->|→|=>) <unit>`
pub fn parse_query(input: &str) -> Result<Query, ConversionError> {
    let invalid = || ConversionError::InvalidQuery(input.to_string());
    let s = input.trim();

    let (lhs, rhs) = split_target(s).ok_or_else(invalid)?;
    let (value, from) = parse_quantity(lhs)?;
    let to = rhs.trim();

    if from.is_empty() || to.is_empty() {
        return Err(invalid());
    }

    Ok(Query {
        value,
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Split a quantity like "5 km", "100kg" or "-3.5e2 ft" into value and unit text
pub fn parse_quantity(s: &str) -> Result<(f64, &str), ConversionError> {
    let s = s.trim();

    // Longest run of characters that can appear in a number
    let candidate_end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    // "100eur" puts an 'e' in the run, so back off until it parses.
    // An overflowing number is an error; shortening it would change its value.
    for end in (1..=candidate_end).rev() {
        match parse_number(&s[..end]) {
            Ok(value) => return Ok((value, s[end..].trim())),
            Err(NumberError::NonFinite(v)) => return Err(ConversionError::NonFiniteInput(v)),
            Err(NumberError::ParseError(_)) => {}
        }
    }

    let token = s.split_whitespace().next().unwrap_or(s);
    Err(ConversionError::Parse(token.to_string()))
}

fn split_target(s: &str) -> Option<(&str, &str)> {
    for arrow in ARROWS {
        if let Some(parts) = s.split_once(arrow) {
            return Some(parts);
        }
    }

    let lower = s.to_lowercase();
    // Byte offsets only line up if lowercasing kept the length
    if lower.len() != s.len() {
        return None;
    }
    for word in WORDS {
        if let Some(pos) = lower.rfind(word) {
            return Some((&s[..pos], &s[pos + word.len()..]));
        }
    }
    None
}

impl Converter<'_> {
    /// Answer a free-text query.
    ///
    /// With `category` the units are looked up there; without it the one
    /// category that knows both units is used.
    pub fn quick(
        &self,
        input: &str,
        category: Option<&str>,
    ) -> Result<ConversionResult, ConversionError> {
        let query = parse_query(input)?;
        let cat = match category {
            Some(id) => self.registry().category(id)?,
            None => self.registry().locate_pair(&query.from, &query.to)?,
        };

        let pair = UnitPair::within(cat, &query.from, &query.to)?;
        let output_value = pair.apply(query.value)?;

        Ok(ConversionResult {
            category: pair.category,
            input_value: query.value,
            output_value,
            from_unit: pair.from.id,
            to_unit: pair.to.id,
        })
    }
}
