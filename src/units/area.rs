use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    SquareMillimeter,
    SquareMile,
    SquareYard,
    SquareFoot,
    SquareInch,
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareKilometer => value * 1e6,
        AreaUnit::SquareCentimeter => value * 1e-4,
        AreaUnit::SquareMillimeter => value * 1e-6,
        AreaUnit::SquareMile => value * 2_589_988.110_336,
        AreaUnit::SquareYard => value * 0.836_127_36,
        AreaUnit::SquareFoot => value * 0.092_903_04,
        AreaUnit::SquareInch => value * 0.000_645_16,
    }
}

fn from_square_meter(value_m2: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value_m2,
        AreaUnit::SquareKilometer => value_m2 / 1e6,
        AreaUnit::SquareCentimeter => value_m2 / 1e-4,
        AreaUnit::SquareMillimeter => value_m2 / 1e-6,
        AreaUnit::SquareMile => value_m2 / 2_589_988.110_336,
        AreaUnit::SquareYard => value_m2 / 0.836_127_36,
        AreaUnit::SquareFoot => value_m2 / 0.092_903_04,
        AreaUnit::SquareInch => value_m2 / 0.000_645_16,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
