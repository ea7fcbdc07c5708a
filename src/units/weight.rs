use serde::{Deserialize, Serialize};

/// 무게 단위. 내부 기준은 그램이며 톤은 미터톤이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Milligram,
    Microgram,
    Ton,
    Pound,
    Ounce,
}

fn to_gram(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Gram => value,
        WeightUnit::Kilogram => value * 1000.0,
        WeightUnit::Milligram => value / 1000.0,
        WeightUnit::Microgram => value / 1_000_000.0,
        WeightUnit::Ton => value * 1_000_000.0,
        WeightUnit::Pound => value * 453.592_37,
        WeightUnit::Ounce => value * 28.349_523_125,
    }
}

fn from_gram(value_g: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Gram => value_g,
        WeightUnit::Kilogram => value_g / 1000.0,
        WeightUnit::Milligram => value_g * 1000.0,
        WeightUnit::Microgram => value_g * 1_000_000.0,
        WeightUnit::Ton => value_g / 1_000_000.0,
        WeightUnit::Pound => value_g / 453.592_37,
        WeightUnit::Ounce => value_g / 28.349_523_125,
    }
}

/// 무게를 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    let g = to_gram(value, from);
    from_gram(g, to)
}
