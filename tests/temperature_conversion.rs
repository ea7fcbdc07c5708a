//! 온도 공식표 회귀 테스트.
use unit_converter_workbench::units::{convert_temperature, TemperatureUnit};

#[test]
fn celsius_to_fahrenheit_fixed_points() {
    // 0°C => 32°F, 100°C => 212°F
    let f0 = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f0 - 32.0).abs() < 1e-12);
    let f100 = convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f100 - 212.0).abs() < 1e-12);
}

#[test]
fn fahrenheit_to_kelvin_freezing_point() {
    // 32°F => 273.15 K
    let k = convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
    assert!((k - 273.15).abs() < 1e-12);
}

#[test]
fn kelvin_to_celsius_absolute_zero() {
    let c = convert_temperature(0.0, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    assert!((c + 273.15).abs() < 1e-12);
}

#[test]
fn same_unit_is_identity() {
    for unit in [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ] {
        let v = convert_temperature(-40.5, unit, unit);
        assert_eq!(v, -40.5);
    }
}

#[test]
fn cross_pair_roundtrips() {
    let pairs = [
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        (TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin),
    ];
    for (a, b) in pairs {
        let out = convert_temperature(100.0, a, b);
        let back = convert_temperature(out, b, a);
        assert!((back - 100.0).abs() < 1e-9, "{a:?} <-> {b:?}: {back}");
    }
}

#[test]
fn celsius_fahrenheit_crossing_point() {
    // -40은 두 눈금이 만나는 점
    let f = convert_temperature(-40.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f + 40.0).abs() < 1e-12);
}
