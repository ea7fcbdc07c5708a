use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초이다.
/// 연은 율리우스년(365.25일), 월은 연/12로 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
        TimeUnit::Day => value * 86_400.0,
        TimeUnit::Week => value * 604_800.0,
        TimeUnit::Month => value * 2_629_800.0,
        TimeUnit::Year => value * 31_557_600.0,
    }
}

fn from_second(value_s: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value_s,
        TimeUnit::Minute => value_s / 60.0,
        TimeUnit::Hour => value_s / 3600.0,
        TimeUnit::Day => value_s / 86_400.0,
        TimeUnit::Week => value_s / 604_800.0,
        TimeUnit::Month => value_s / 2_629_800.0,
        TimeUnit::Year => value_s / 31_557_600.0,
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_second(value, from);
    from_second(s, to)
}
