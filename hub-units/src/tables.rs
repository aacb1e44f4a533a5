//! Built-in conversion tables
//!
//! Factors are relative to each category's base unit (factor 1).
//! Currency rates are static reference rates against USD, not live quotes.

use crate::category::Category;
use crate::registry::RegistryBuilder;
use crate::unit::Unit;
use crate::TemperatureScale;

/// Builder preloaded with every built-in category
pub fn standard_builder() -> RegistryBuilder {
    RegistryBuilder::default()
        .with_category(length())
        .with_category(weight())
        .with_category(temperature())
        .with_category(volume())
        .with_category(area())
        .with_category(speed())
        .with_category(time())
        .with_category(data())
        .with_category(pressure())
        .with_category(energy())
        .with_category(currency())
}

fn length() -> Category {
    Category::new("length", "Length", "m", "ft")
        // Metric
        .unit(Unit::linear("m", "Meter", 1.0).with_aliases(&["meter", "meters", "metre", "metres"]))
        .unit(Unit::linear("km", "Kilometer", 1000.0).with_aliases(&["kilometer", "kilometers", "kilometre"]))
        .unit(Unit::linear("cm", "Centimeter", 0.01).with_aliases(&["centimeter", "centimeters"]))
        .unit(Unit::linear("mm", "Millimeter", 0.001).with_aliases(&["millimeter", "millimeters"]))
        .unit(Unit::linear("um", "Micrometer", 1e-6).with_aliases(&["μm", "micron", "microns"]))
        .unit(Unit::linear("nm", "Nanometer", 1e-9).with_aliases(&["nanometer", "nanometers"]))
        // Imperial/US
        .unit(Unit::linear("in", "Inch", 0.0254).with_aliases(&["inch", "inches"]))
        .unit(Unit::linear("ft", "Foot", 0.3048).with_aliases(&["foot", "feet"]))
        .unit(Unit::linear("yd", "Yard", 0.9144).with_aliases(&["yard", "yards"]))
        .unit(Unit::linear("mi", "Mile", 1609.344).with_aliases(&["mile", "miles"]))
        .unit(Unit::linear("nmi", "Nautical Mile", 1852.0).with_aliases(&["nautical mile", "nautical miles"]))
}

fn weight() -> Category {
    Category::new("weight", "Weight", "kg", "lb")
        .unit(Unit::linear("kg", "Kilogram", 1.0).with_aliases(&["kilogram", "kilograms", "kilo", "kilos"]))
        .unit(Unit::linear("g", "Gram", 0.001).with_aliases(&["gram", "grams"]))
        .unit(Unit::linear("mg", "Milligram", 1e-6).with_aliases(&["milligram", "milligrams"]))
        .unit(Unit::linear("t", "Metric Ton", 1000.0).with_aliases(&["tonne", "tonnes"]))
        .unit(Unit::linear("lb", "Pound", 0.45359237).with_aliases(&["pound", "pounds", "lbs"]))
        .unit(Unit::linear("oz", "Ounce", 0.028349523125).with_aliases(&["ounce", "ounces"]))
        .unit(Unit::linear("st", "Stone", 6.35029318).with_aliases(&["stone", "stones"]))
        .unit(Unit::linear("ton", "US Ton", 907.18474).with_aliases(&["short ton", "tons"]))
        .unit(Unit::linear("ct", "Carat", 0.0002).with_aliases(&["carat", "carats"]))
}

fn temperature() -> Category {
    Category::new("temperature", "Temperature", "c", "f")
        .unit(Unit::temperature("c", "Celsius", TemperatureScale::Celsius).with_aliases(&["celsius", "°c", "centigrade"]))
        .unit(Unit::temperature("f", "Fahrenheit", TemperatureScale::Fahrenheit).with_aliases(&["fahrenheit", "°f"]))
        .unit(Unit::temperature("k", "Kelvin", TemperatureScale::Kelvin).with_aliases(&["kelvin"]))
        .unit(Unit::temperature("r", "Rankine", TemperatureScale::Rankine).with_aliases(&["rankine", "°r"]))
}

fn volume() -> Category {
    Category::new("volume", "Volume", "l", "gal")
        .unit(Unit::linear("l", "Liter", 1.0).with_aliases(&["liter", "liters", "litre", "litres"]))
        .unit(Unit::linear("ml", "Milliliter", 0.001).with_aliases(&["milliliter", "milliliters"]))
        .unit(Unit::linear("m3", "Cubic Meter", 1000.0).with_aliases(&["m³", "cubic meter"]))
        .unit(Unit::linear("gal", "US Gallon", 3.785411784).with_aliases(&["gallon", "gallons"]))
        .unit(Unit::linear("qt", "US Quart", 0.946352946).with_aliases(&["quart", "quarts"]))
        .unit(Unit::linear("pt", "US Pint", 0.473176473).with_aliases(&["pint", "pints"]))
        .unit(Unit::linear("cup", "US Cup", 0.2365882365).with_aliases(&["cups"]))
        .unit(Unit::linear("floz", "US Fluid Ounce", 0.0295735295625).with_aliases(&["fl oz", "fluid ounce"]))
        .unit(Unit::linear("tbsp", "Tablespoon", 0.01478676478125).with_aliases(&["tablespoon"]))
        .unit(Unit::linear("tsp", "Teaspoon", 0.00492892159375).with_aliases(&["teaspoon"]))
}

fn area() -> Category {
    Category::new("area", "Area", "m2", "ft2")
        .unit(Unit::linear("m2", "Square Meter", 1.0).with_aliases(&["m²", "square meter", "sqm"]))
        .unit(Unit::linear("km2", "Square Kilometer", 1e6).with_aliases(&["km²", "square kilometer"]))
        .unit(Unit::linear("cm2", "Square Centimeter", 1e-4).with_aliases(&["cm²"]))
        .unit(Unit::linear("ha", "Hectare", 1e4).with_aliases(&["hectare", "hectares"]))
        .unit(Unit::linear("ft2", "Square Foot", 0.09290304).with_aliases(&["ft²", "sqft", "square foot", "square feet"]))
        .unit(Unit::linear("in2", "Square Inch", 0.00064516).with_aliases(&["in²", "square inch"]))
        .unit(Unit::linear("yd2", "Square Yard", 0.83612736).with_aliases(&["yd²", "square yard"]))
        .unit(Unit::linear("ac", "Acre", 4046.8564224).with_aliases(&["acre", "acres"]))
        .unit(Unit::linear("mi2", "Square Mile", 2589988.110336).with_aliases(&["mi²", "square mile"]))
}

fn speed() -> Category {
    Category::new("speed", "Speed", "kmh", "mph")
        .unit(Unit::linear("mps", "Meter per Second", 1.0).with_aliases(&["m/s"]))
        .unit(Unit::linear("kmh", "Kilometer per Hour", 1.0 / 3.6).with_aliases(&["km/h", "kph"]))
        .unit(Unit::linear("mph", "Mile per Hour", 0.44704).with_aliases(&["mi/h"]))
        .unit(Unit::linear("fps", "Foot per Second", 0.3048).with_aliases(&["ft/s"]))
        .unit(Unit::linear("kn", "Knot", 1852.0 / 3600.0).with_aliases(&["knot", "knots", "kt"]))
}

fn time() -> Category {
    Category::new("time", "Time", "h", "min")
        .unit(Unit::linear("s", "Second", 1.0).with_aliases(&["sec", "second", "seconds"]))
        .unit(Unit::linear("ms", "Millisecond", 0.001).with_aliases(&["millisecond", "milliseconds"]))
        .unit(Unit::linear("min", "Minute", 60.0).with_aliases(&["minute", "minutes"]))
        .unit(Unit::linear("h", "Hour", 3600.0).with_aliases(&["hr", "hour", "hours"]))
        .unit(Unit::linear("d", "Day", 86400.0).with_aliases(&["day", "days"]))
        .unit(Unit::linear("wk", "Week", 604800.0).with_aliases(&["week", "weeks"]))
        .unit(Unit::linear("yr", "Year", 31557600.0).with_aliases(&["year", "years"]))
}

fn data() -> Category {
    Category::new("data", "Data Storage", "mb", "gb")
        .unit(Unit::linear("b", "Byte", 1.0).with_aliases(&["byte", "bytes"]))
        .unit(Unit::linear("bit", "Bit", 0.125).with_aliases(&["bits"]))
        .unit(Unit::linear("kb", "Kilobyte", 1e3).with_aliases(&["kilobyte", "kilobytes"]))
        .unit(Unit::linear("mb", "Megabyte", 1e6).with_aliases(&["megabyte", "megabytes"]))
        .unit(Unit::linear("gb", "Gigabyte", 1e9).with_aliases(&["gigabyte", "gigabytes"]))
        .unit(Unit::linear("tb", "Terabyte", 1e12).with_aliases(&["terabyte", "terabytes"]))
        .unit(Unit::linear("kib", "Kibibyte", 1024.0))
        .unit(Unit::linear("mib", "Mebibyte", 1048576.0))
        .unit(Unit::linear("gib", "Gibibyte", 1073741824.0))
}

fn pressure() -> Category {
    Category::new("pressure", "Pressure", "bar", "psi")
        .unit(Unit::linear("pa", "Pascal", 1.0).with_aliases(&["pascal", "pascals"]))
        .unit(Unit::linear("kpa", "Kilopascal", 1e3).with_aliases(&["kilopascal"]))
        .unit(Unit::linear("bar", "Bar", 1e5).with_aliases(&["bars"]))
        .unit(Unit::linear("psi", "Pound per Square Inch", 6894.757293168))
        .unit(Unit::linear("atm", "Atmosphere", 101325.0).with_aliases(&["atmosphere", "atmospheres"]))
        .unit(Unit::linear("mmhg", "Millimeter of Mercury", 133.322387415).with_aliases(&["torr"]))
}

fn energy() -> Category {
    Category::new("energy", "Energy", "kj", "kcal")
        .unit(Unit::linear("j", "Joule", 1.0).with_aliases(&["joule", "joules"]))
        .unit(Unit::linear("kj", "Kilojoule", 1e3).with_aliases(&["kilojoule", "kilojoules"]))
        .unit(Unit::linear("cal", "Calorie", 4.184).with_aliases(&["calorie", "calories"]))
        .unit(Unit::linear("kcal", "Kilocalorie", 4184.0).with_aliases(&["kilocalorie", "kilocalories"]))
        .unit(Unit::linear("wh", "Watt Hour", 3600.0).with_aliases(&["watt hour"]))
        .unit(Unit::linear("kwh", "Kilowatt Hour", 3.6e6).with_aliases(&["kilowatt hour"]))
        .unit(Unit::linear("btu", "British Thermal Unit", 1055.05585262))
        .unit(Unit::linear("ev", "Electronvolt", 1.602176634e-19).with_aliases(&["electronvolt"]))
}

fn currency() -> Category {
    // USD value of one unit of each currency
    Category::new("currency", "Currency", "usd", "eur")
        .unit(Unit::linear("usd", "US Dollar", 1.0).with_aliases(&["$", "dollar", "dollars"]))
        .unit(Unit::linear("eur", "Euro", 1.08).with_aliases(&["€", "euro", "euros"]))
        .unit(Unit::linear("gbp", "British Pound", 1.27).with_aliases(&["£"]))
        .unit(Unit::linear("jpy", "Japanese Yen", 0.0067).with_aliases(&["¥", "yen"]))
        .unit(Unit::linear("cad", "Canadian Dollar", 0.74))
        .unit(Unit::linear("aud", "Australian Dollar", 0.66))
        .unit(Unit::linear("chf", "Swiss Franc", 1.13))
        .unit(Unit::linear("cny", "Chinese Yuan", 0.14).with_aliases(&["yuan", "rmb"]))
        .unit(Unit::linear("inr", "Indian Rupee", 0.012).with_aliases(&["rupee", "rupees"]))
}
