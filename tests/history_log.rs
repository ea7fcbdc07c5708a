//! 세션 변환 기록 회귀 테스트.
use unit_converter_workbench::category::Category;
use unit_converter_workbench::conversion::convert;
use unit_converter_workbench::history::{ConversionRecord, HistoryLog};

fn record(input: f64, from: &str, to: &str, result: f64) -> ConversionRecord {
    ConversionRecord::new(input, from, to, result)
}

#[test]
fn append_then_reversed_yields_newest_first() {
    let mut log = HistoryLog::new();
    log.append(record(1.0, "meter", "foot", 3.280839895));
    log.append(record(2.0, "meter", "foot", 6.56167979));
    let first = log.iter_reversed().next().unwrap();
    assert_eq!(first.input, 2.0);
    assert_eq!(log.len(), 2);
}

#[test]
fn duplicates_are_allowed() {
    let mut log = HistoryLog::new();
    log.append(record(1.0, "meter", "foot", 3.280839895));
    log.append(record(1.0, "meter", "foot", 3.280839895));
    assert_eq!(log.len(), 2);
}

#[test]
fn clear_empties_and_is_idempotent() {
    let mut log = HistoryLog::new();
    log.append(record(1.0, "liter", "gallon", 0.264172052));
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.iter_reversed().count(), 0);
    // 빈 상태에서 다시 호출해도 무해
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn failed_conversion_never_reaches_the_log() {
    let mut log = HistoryLog::new();
    log.append(record(100.0, "celsius", "fahrenheit", 212.0));
    let before = log.len();
    // 알 수 없는 단위로 변환 시도 → 오류, 기록은 그대로
    let out = convert(Category::Temperature, 1.0, "celsius", "rankine");
    assert!(out.is_err());
    assert_eq!(log.len(), before);
}

#[test]
fn display_string_uses_six_decimal_result() {
    let rec = record(100.0, "celsius", "fahrenheit", 212.0);
    assert_eq!(rec.display, "100 celsius → 212.000000 fahrenheit");
    let rec = record(1.5, "mile", "kilometer", 2.414016);
    assert_eq!(rec.display, "1.5 mile → 2.414016 kilometer");
}

#[test]
fn iter_reversed_is_fresh_each_call() {
    let mut log = HistoryLog::new();
    log.append(record(1.0, "hour", "minute", 60.0));
    assert_eq!(log.iter_reversed().count(), 1);
    log.append(record(2.0, "hour", "minute", 120.0));
    assert_eq!(log.iter_reversed().count(), 2);
    assert_eq!(log.iter_reversed().next().unwrap().input, 2.0);
}
