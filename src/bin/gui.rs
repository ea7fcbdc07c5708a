#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use unit_converter_workbench::{
    category::{self, Category},
    config, conversion,
    history::{ConversionRecord, HistoryLog},
    i18n,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Unit Converter Workbench",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font notice: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    window_alpha: f32,
    // 변환 폼
    conv_category: Category,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 세션 기록
    history: HistoryLog,
    history_status: Option<String>,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    apply_initial_view_size: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let conv_category = config.default_category;
        let (conv_from, conv_to) = category::default_units(conv_category);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let lang_input = config.language.clone();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            lang_input,
            lang_save_status: None,
            conv_category,
            conv_value: 1.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_result: None,
            history: HistoryLog::new(),
            history_status: None,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
            apply_initial_view_size: true,
        }
    }

    /// 카테고리를 바꾸고 기본 단위 쌍으로 초기화한다.
    fn select_category(&mut self, cat: Category) {
        if self.conv_category == cat {
            return;
        }
        self.conv_category = cat;
        let (f, t) = category::default_units(cat);
        self.conv_from = f.to_string();
        self.conv_to = t.to_string();
        self.conv_result = None;
    }

    /// 현재 폼 값으로 변환을 실행한다. 성공 시에만 기록에 추가한다.
    fn run_conversion(&mut self) {
        let from = self.conv_from.trim().to_string();
        let to = self.conv_to.trim().to_string();
        match conversion::convert(self.conv_category, self.conv_value, &from, &to) {
            Ok(result) => {
                let record = ConversionRecord::new(self.conv_value, &from, &to, result);
                self.conv_result = Some(record.display.clone());
                self.history.append(record);
            }
            Err(e) => {
                let prefix = self
                    .tr
                    .lookup("gui.convert.error_prefix")
                    .unwrap_or_else(|| "Error".to_string());
                self.conv_result = Some(format!("{prefix}: {e}"));
            }
        }
    }

    /// 좌측 카테고리 내비게이션과 기록 지우기 버튼을 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Categories"));
            ui.add_space(8.0);
        });
        for cat in category::ALL {
            let selected = self.conv_category == cat;
            let button = egui::Button::new(self.tr.t(cat.label_key()))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch category"));
            if resp.clicked() {
                self.select_category(cat);
            }
            ui.add_space(4.0);
        }
        ui.separator();
        if ui
            .button(txt("gui.nav.clear_history", "Clear History"))
            .on_hover_text(txt(
                "gui.nav.clear_history_tip",
                "Remove every record of this session",
            ))
            .clicked()
        {
            self.history.clear();
            self.history_status = Some(txt("gui.nav.cleared", "History cleared successfully!"));
        }
        if let Some(msg) = &self.history_status {
            ui.small(msg);
        }
    }

    /// 변환 폼 카드를 그린다.
    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.convert.heading", "Unit Converter"),
            &txt(
                "gui.convert.tip",
                "Convert a value between units of the selected category.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.convert.value", "Value"),
                            &txt("gui.convert.value_tip", "Enter the value to convert"),
                        );
                        ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.convert.from", "From unit"),
                            &txt("gui.convert.from_tip", "Current unit of the value"),
                        );
                        egui::ComboBox::from_id_source("conv_from")
                            .selected_text(category::unit_label(&self.conv_from, self.conv_category))
                            .show_ui(ui, |ui| {
                                for (label, code) in category::unit_options(self.conv_category) {
                                    ui.selectable_value(
                                        &mut self.conv_from,
                                        code.to_string(),
                                        *label,
                                    );
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.convert.to", "To unit"),
                            &txt("gui.convert.to_tip", "Desired unit after conversion"),
                        );
                        egui::ComboBox::from_id_source("conv_to")
                            .selected_text(category::unit_label(&self.conv_to, self.conv_category))
                            .show_ui(ui, |ui| {
                                for (label, code) in category::unit_options(self.conv_category) {
                                    ui.selectable_value(
                                        &mut self.conv_to,
                                        code.to_string(),
                                        *label,
                                    );
                                }
                            });
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.convert.run", "Convert")).clicked() {
                    self.run_conversion();
                }
                if let Some(res) = &self.conv_result {
                    ui.label(res);
                }
            });
        });
    }

    /// 세션 기록 섹션을 그린다. 최신 기록이 위에 온다.
    fn ui_history(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.history.heading", "Conversion History"),
            &txt("gui.history.tip", "Records of this session, newest first."),
        );
        ui.add_space(4.0);
        if self.history.is_empty() {
            ui.small(txt(
                "gui.history.empty",
                "No conversion history yet. Start converting units to see your history here!",
            ));
            return;
        }
        for record in self.history.iter_reversed() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(&record.display);
            });
            ui.add_space(4.0);
        }
    }
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 UI를 표시할 수 있도록 CJK 폰트를 탐색해 적용한다.
/// 1) assets/fonts/ 아래의 .ttf/.ttc
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    if let Ok(entries) = fs::read_dir("assets/fonts") {
        for entry in entries.flatten() {
            let p = entry.path();
            let is_font = p
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("ttc"))
                .unwrap_or(false);
            if is_font {
                let bytes =
                    fs::read(&p).map_err(|e| format!("Failed to read font file: {e}"))?;
                apply_font_bytes(ctx, bytes, "bundled_font");
                return Ok(());
            }
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("CJK font not found. Korean labels may not render; set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.45).max(760.0), (screen.y * 0.60).max(640.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Unit Converter Workbench"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_default_category = self.config.default_category;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.default_category", "Default category"));
                    ui.horizontal_wrapped(|ui| {
                        for cat in category::ALL {
                            ui.selectable_value(
                                &mut new_default_category,
                                cat,
                                self.tr.t(cat.label_key()),
                            );
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui
                            .button(txt("gui.settings.font_pick", "Choose font file"))
                            .clicked()
                        {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                    });
                    if !self.custom_font_path.is_empty()
                        && ui.button(txt("gui.settings.font_apply", "Apply font")).clicked()
                    {
                        self.font_load_error = load_custom_font(ctx, &self.custom_font_path).err();
                    }
                    if let Some(err) = &self.font_load_error {
                        ui.small(err);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_default_category != self.config.default_category {
                self.config.default_category = new_default_category;
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline unit converter with a session-scoped history",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.usage",
                        "Pick a category on the left, choose units, enter a value and press Convert.",
                    ));
                    ui.label(txt(
                        "gui.about.history",
                        "History keeps this session's successful conversions only and is lost on exit.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language/font in settings if labels do not render.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_converter(ui);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    self.ui_history(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unit_pairs_resolve_in_every_category() {
        for cat in category::ALL {
            let (from, to) = category::default_units(cat);
            let out = conversion::convert(cat, 1.0, from, to);
            assert!(out.is_ok(), "category {cat:?}: {from} -> {to}");
        }
    }

    #[test]
    fn every_selector_identifier_parses() {
        for cat in category::ALL {
            for (_, code) in category::unit_options(cat) {
                let out = conversion::convert(cat, 1.0, code, code);
                assert!(out.is_ok(), "category {cat:?}: {code}");
                assert!((out.unwrap() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn run_conversion_appends_on_success_only() {
        let mut app = GuiApp::new(config::Config::default());
        app.conv_category = Category::Temperature;
        app.conv_from = "celsius".into();
        app.conv_to = "fahrenheit".into();
        app.conv_value = 100.0;
        app.run_conversion();
        assert_eq!(app.history.len(), 1);
        assert_eq!(
            app.history.iter_reversed().next().unwrap().display,
            "100 celsius → 212.000000 fahrenheit"
        );

        // 잘못된 단위는 결과 메시지만 남기고 기록은 그대로 둔다
        app.conv_to = "meter".into();
        app.run_conversion();
        assert_eq!(app.history.len(), 1);
        assert!(app.conv_result.as_deref().unwrap_or("").contains("meter"));
    }

    #[test]
    fn select_category_resets_unit_pair() {
        let mut app = GuiApp::new(config::Config::default());
        app.select_category(Category::Weight);
        assert_eq!(app.conv_from, "kilogram");
        assert_eq!(app.conv_to, "pound");
        assert!(app.conv_result.is_none());
    }
}
