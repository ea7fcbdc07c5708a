use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다. 갤런 계열은 미국 액량 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    CubicCentimeter,
    CubicMillimeter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::CubicCentimeter => value / 1000.0,
        VolumeUnit::CubicMillimeter => value / 1_000_000.0,
        VolumeUnit::Gallon => value * 3.785_411_784,
        VolumeUnit::Quart => value * 0.946_352_946,
        VolumeUnit::Pint => value * 0.473_176_473,
        VolumeUnit::Cup => value * 0.236_588_236_5,
        VolumeUnit::FluidOunce => value * 0.029_573_529_562_5,
    }
}

fn from_liter(value_l: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value_l,
        VolumeUnit::Milliliter => value_l * 1000.0,
        VolumeUnit::CubicMeter => value_l / 1000.0,
        VolumeUnit::CubicCentimeter => value_l * 1000.0,
        VolumeUnit::CubicMillimeter => value_l * 1_000_000.0,
        VolumeUnit::Gallon => value_l / 3.785_411_784,
        VolumeUnit::Quart => value_l / 0.946_352_946,
        VolumeUnit::Pint => value_l / 0.473_176_473,
        VolumeUnit::Cup => value_l / 0.236_588_236_5,
        VolumeUnit::FluidOunce => value_l / 0.029_573_529_562_5,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}
