use std::io::{self, Write};

use crate::app::AppError;
use crate::category::{self, Category};
use crate::config::Config;
use crate::conversion;
use crate::history::{ConversionRecord, HistoryLog};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    History,
    ClearHistory,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_CLEAR_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::History),
            "3" => return Ok(MenuChoice::ClearHistory),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 성공한 변환만 기록에 추가한다.
pub fn handle_conversion(
    tr: &Translator,
    _cfg: &Config,
    history: &mut HistoryLog,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    print_category_options(tr);
    let cat = loop {
        let sel = read_line(tr.t(keys::CONVERT_PROMPT_CATEGORY))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(cat) = map_category(n) {
                break cat;
            }
        }
        println!("{}", tr.t(keys::CONVERT_UNSUPPORTED));
    };
    println!(
        "{} {}",
        tr.t(keys::CONVERT_UNITS_AVAILABLE),
        category::unit_options(cat)
            .iter()
            .map(|(_, code)| *code)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let value = read_f64(tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;
    let from_unit = from_unit.trim();
    let to_unit = to_unit.trim();
    match conversion::convert(cat, value, from_unit, to_unit) {
        Ok(result) => {
            let record = ConversionRecord::new(value, from_unit, to_unit, result);
            println!("{} {}", tr.t(keys::CONVERT_RESULT), record.display);
            history.append(record);
        }
        Err(e) => {
            // 실패한 변환은 기록을 건드리지 않는다.
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
        }
    }
    Ok(())
}

fn print_category_options(tr: &Translator) {
    let line = category::ALL
        .iter()
        .enumerate()
        .map(|(i, cat)| format!("{}) {}", i + 1, tr.t(cat.label_key())))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{line}");
}

fn map_category(n: u32) -> Option<Category> {
    category::ALL.get(n.checked_sub(1)? as usize).copied()
}

/// 변환 기록을 최신순으로 출력한다.
pub fn handle_history(tr: &Translator, history: &HistoryLog) {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if history.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for record in history.iter_reversed() {
        println!("{}", record.display);
    }
}

/// 변환 기록을 비운다.
pub fn handle_clear_history(tr: &Translator, history: &mut HistoryLog) {
    history.clear();
    println!("{}", tr.t(keys::HISTORY_CLEARED));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "en-us".to_string(),
        "3" => "ko-kr".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
