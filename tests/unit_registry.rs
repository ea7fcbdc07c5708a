//! 단위 레지스트리(카테고리별 배율 변환)와 파싱 경계 회귀 테스트.
use unit_converter_workbench::category::{self, Category};
use unit_converter_workbench::conversion::{convert, format_result, ConversionError};

#[test]
fn meter_to_meter_is_identity() {
    let out = convert(Category::Length, 5.0, "meter", "meter").unwrap();
    assert_eq!(out, 5.0);
    assert_eq!(format_result(out), "5.000000");
}

#[test]
fn length_factor_spot_checks() {
    let m = convert(Category::Length, 1.0, "mile", "meter").unwrap();
    assert!((m - 1609.344).abs() < 1e-9);
    let km = convert(Category::Length, 1.0, "mile", "kilometer").unwrap();
    assert!((km - 1.609344).abs() < 1e-12);
    let inch = convert(Category::Length, 1.0, "foot", "inch").unwrap();
    assert!((inch - 12.0).abs() < 1e-9);
}

#[test]
fn area_factor_spot_checks() {
    let km2 = convert(Category::Area, 1.0, "square_mile", "square_kilometer").unwrap();
    assert!((km2 - 2.589_988_110_336).abs() < 1e-9);
    let ft2 = convert(Category::Area, 1.0, "square_yard", "square_foot").unwrap();
    assert!((ft2 - 9.0).abs() < 1e-9);
    // 원본 결함으로 지목되던 야드파운드 계열 면적 단위도 전부 등록되어 있다
    for code in ["square_mile", "square_yard", "square_foot", "square_inch"] {
        assert!(convert(Category::Area, 1.0, code, "square_meter").is_ok(), "{code}");
    }
}

#[test]
fn volume_factor_spot_checks() {
    let l = convert(Category::Volume, 1.0, "gallon", "liter").unwrap();
    assert!((l - 3.785_411_784).abs() < 1e-12);
    let quarts = convert(Category::Volume, 1.0, "gallon", "quart").unwrap();
    assert!((quarts - 4.0).abs() < 1e-9);
    let ml = convert(Category::Volume, 1.0, "cubic_centimeter", "milliliter").unwrap();
    assert!((ml - 1.0).abs() < 1e-12);
}

#[test]
fn weight_factor_spot_checks() {
    let g = convert(Category::Weight, 1.0, "pound", "gram").unwrap();
    assert!((g - 453.592_37).abs() < 1e-9);
    let oz = convert(Category::Weight, 1.0, "pound", "ounce").unwrap();
    assert!((oz - 16.0).abs() < 1e-9);
    let kg = convert(Category::Weight, 1.0, "ton", "kilogram").unwrap();
    assert!((kg - 1000.0).abs() < 1e-9);
}

#[test]
fn time_factor_spot_checks() {
    let days = convert(Category::Time, 1.0, "week", "day").unwrap();
    assert!((days - 7.0).abs() < 1e-12);
    let months = convert(Category::Time, 1.0, "year", "month").unwrap();
    assert!((months - 12.0).abs() < 1e-9);
    let sec = convert(Category::Time, 1.0, "hour", "second").unwrap();
    assert!((sec - 3600.0).abs() < 1e-12);
}

#[test]
fn unknown_identifier_is_rejected() {
    let err = convert(Category::Length, 1.0, "furlong", "meter").unwrap_err();
    match err {
        ConversionError::UnknownUnit(u) => assert_eq!(u, "furlong"),
    }
}

#[test]
fn cross_category_identifier_is_rejected_at_parse_boundary() {
    // 차원이 다른 단위는 파싱 단계에서 걸러진다
    assert!(convert(Category::Length, 1.0, "celsius", "meter").is_err());
    assert!(convert(Category::Temperature, 1.0, "celsius", "meter").is_err());
    assert!(convert(Category::Weight, 1.0, "gallon", "gram").is_err());
}

#[test]
fn abbreviations_match_long_identifiers() {
    let long = convert(Category::Length, 3.0, "kilometer", "mile").unwrap();
    let short = convert(Category::Length, 3.0, "km", "mi").unwrap();
    assert_eq!(long, short);
}

#[test]
fn every_selector_identifier_roundtrips_identity() {
    for cat in category::ALL {
        for (_, code) in category::unit_options(cat) {
            let out = convert(cat, 2.5, code, code).unwrap();
            assert!((out - 2.5).abs() < 1e-12, "category {cat:?}: {code}");
        }
    }
}

#[test]
fn format_result_renders_six_decimals() {
    assert_eq!(format_result(32.0), "32.000000");
    assert_eq!(format_result(1.609344), "1.609344");
    assert_eq!(format_result(-0.5), "-0.500000");
}
