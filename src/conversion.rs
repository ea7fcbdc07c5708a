use crate::category::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 해당 카테고리가 모르는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 `meter`, `square_mile`, `fluid_ounce` 같은 긴 식별자와
/// `m`, `mi2`, `floz` 같은 약어를 모두 받는다. 카테고리에 속하지 않는
/// 단위는 파싱 단계에서 `UnknownUnit`으로 거부되므로 서로 다른 차원의
/// 단위가 변환 함수까지 내려오는 일은 없다.
pub fn convert(
    category: Category,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match category {
        Category::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        Category::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        Category::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        Category::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        Category::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            Ok(convert_weight(value, from, to))
        }
        Category::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
    }
}

/// 변환 결과를 소수점 여섯 자리로 렌더링한다.
pub fn format_result(value: f64) -> String {
    format!("{value:.6}")
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "meter" | "metre" | "m" => Ok(LengthUnit::Meter),
        "kilometer" | "kilometre" | "km" => Ok(LengthUnit::Kilometer),
        "centimeter" | "centimetre" | "cm" => Ok(LengthUnit::Centimeter),
        "millimeter" | "millimetre" | "mm" => Ok(LengthUnit::Millimeter),
        "micrometer" | "micrometre" | "um" | "µm" => Ok(LengthUnit::Micrometer),
        "nanometer" | "nanometre" | "nm" => Ok(LengthUnit::Nanometer),
        "mile" | "mi" => Ok(LengthUnit::Mile),
        "yard" | "yd" => Ok(LengthUnit::Yard),
        "foot" | "feet" | "ft" => Ok(LengthUnit::Foot),
        "inch" | "in" => Ok(LengthUnit::Inch),
        "light_year" | "lightyear" | "ly" => Ok(LengthUnit::LightYear),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "square_meter" | "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "square_kilometer" | "km2" | "km^2" => Ok(AreaUnit::SquareKilometer),
        "square_centimeter" | "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "square_millimeter" | "mm2" | "mm^2" => Ok(AreaUnit::SquareMillimeter),
        "square_mile" | "mi2" | "mi^2" => Ok(AreaUnit::SquareMile),
        "square_yard" | "yd2" | "yd^2" => Ok(AreaUnit::SquareYard),
        "square_foot" | "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        "square_inch" | "in2" | "in^2" => Ok(AreaUnit::SquareInch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "liter" | "litre" | "l" => Ok(VolumeUnit::Liter),
        "milliliter" | "millilitre" | "ml" => Ok(VolumeUnit::Milliliter),
        "cubic_meter" | "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "cubic_centimeter" | "cm3" | "cm^3" | "cc" => Ok(VolumeUnit::CubicCentimeter),
        "cubic_millimeter" | "mm3" | "mm^3" => Ok(VolumeUnit::CubicMillimeter),
        "gallon" | "gal" => Ok(VolumeUnit::Gallon),
        "quart" | "qt" => Ok(VolumeUnit::Quart),
        "pint" | "pt" => Ok(VolumeUnit::Pint),
        "cup" => Ok(VolumeUnit::Cup),
        "fluid_ounce" | "floz" | "fl_oz" => Ok(VolumeUnit::FluidOunce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "gram" | "g" => Ok(WeightUnit::Gram),
        "kilogram" | "kg" => Ok(WeightUnit::Kilogram),
        "milligram" | "mg" => Ok(WeightUnit::Milligram),
        "microgram" | "ug" | "µg" => Ok(WeightUnit::Microgram),
        "ton" | "tonne" | "t" => Ok(WeightUnit::Ton),
        "pound" | "lb" | "lbs" => Ok(WeightUnit::Pound),
        "ounce" | "oz" => Ok(WeightUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "second" | "sec" | "s" => Ok(TimeUnit::Second),
        "minute" | "min" => Ok(TimeUnit::Minute),
        "hour" | "hr" | "h" => Ok(TimeUnit::Hour),
        "day" | "d" => Ok(TimeUnit::Day),
        "week" | "wk" => Ok(TimeUnit::Week),
        "month" | "mo" => Ok(TimeUnit::Month),
        "year" | "yr" => Ok(TimeUnit::Year),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
