//! TUI描画関連の関数。
//!
//! サイトページは1本の縦長テキストとして組み立て、組み立て中に各
//! セクションの先頭行を記録する。この記録がナビゲーターの解決に使う
//! セクションレジストリになる。

use chrono::Datelike;
use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    content,
    events::Screen,
    form::SurveyField,
    input, layout,
    shortcuts::SiteShortcuts,
};

use super::App;

/// ブランドカラー（サイトのゴールド）。
const GOLD: Color = Color::Rgb(200, 176, 78);

/// 本文を折り返す固定幅。端末幅に依存させず行数を決定的にする。
const TEXT_WIDTH: usize = 76;

/// 組み立て済みのページ本文。
pub struct Page {
    /// ページ全体の行。
    pub lines: Vec<Line<'static>>,
    /// セクションIDとその先頭行のレジストリ（出現順）。
    pub offsets: Vec<(&'static str, u16)>,
}

impl Page {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// セクションの開始を記録する。
    fn begin_section(&mut self, id: &'static str) {
        self.offsets.push((id, self.lines.len() as u16));
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// 見出し行を追加する。
    fn heading(&mut self, text: &str) {
        self.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        self.blank();
    }

    /// 固定幅で折り返した本文を追加する。
    fn paragraph(&mut self, text: &str, style: Style) {
        for l in wrap_plain(text, TEXT_WIDTH) {
            self.push(Line::from(Span::styled(l, style)));
        }
    }
}

/// 画面全体のレイアウトを描画する。
pub fn draw(f: &mut Frame, app: &App) {
    match app.ui.screen {
        Screen::Home => draw_home_screen(f, app),
        Screen::Site => draw_site_screen(f, app),
    }

    // 入力ボックスが開いていれば重ねて描画する。
    if let Some(input_state) = &app.input_box {
        input::render_input_box(f, input_state);
    }
}

/// ホーム画面を描画する。
fn draw_home_screen(f: &mut Frame, app: &App) {
    let area = layout::create_home_layout(f.area());

    // 見出しと唯一のナビゲーションリンクを組み立てる。
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome to {}", app.cfg.company.holding_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Explore Satellite Tech ]",
            Style::default().fg(Color::Black).bg(GOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: explore | q: quit",
            Style::default().fg(Color::Gray),
        )),
    ];

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(content, area);
}

/// サイト画面を描画する。
fn draw_site_screen(f: &mut Frame, app: &App) {
    let site_layout = layout::create_site_layout(f.area());

    // ヘッダー（ブランドとセクションメニュー）を描画する。
    draw_nav_bar(f, app, site_layout.nav_bar);

    // ページ本文を現在のスクロール位置で描画する。
    let page = build_page(app);
    let viewport = site_layout.body.height.saturating_sub(2);
    let max_scroll = (page.lines.len() as u16).saturating_sub(viewport);
    let scroll = app.nav.scroll.min(max_scroll);
    let body = Paragraph::new(page.lines)
        .block(Block::default().borders(Borders::ALL))
        .scroll((scroll, 0));
    f.render_widget(body, site_layout.body);

    // STATUSバー（記録中のセクション・ステータス・エラー）を描画する。
    let status_bar = build_status_bar(app);
    f.render_widget(status_bar, site_layout.status_bar);
}

/// ヘッダーのブランド行とメニュー行を描画する。
fn draw_nav_bar(f: &mut Frame, app: &App, area: Rect) {
    let brand = Line::from(vec![
        Span::styled(
            app.cfg.company.holding_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(app.cfg.company.division_name.clone(), Style::default().fg(GOLD)),
        Span::raw("    "),
        Span::styled("* Satellites Online", Style::default().fg(Color::Blue)),
    ]);

    let menu = Line::from(Span::styled(
        build_menu_text(&app.shortcuts.site),
        Style::default().fg(Color::Gray),
    ));

    let nav = Paragraph::new(vec![brand, menu]).block(Block::default().borders(Borders::ALL));
    f.render_widget(nav, area);
}

/// ショートカット設定からメニュー文字列を組み立てる。
fn build_menu_text(sc: &SiteShortcuts) -> String {
    format!(
        "{}: Technology | {}: Capabilities | {}: Applications | {}: Results | {}: Get Survey | {}: parent site | {}: home",
        format_keys(&sc.technology),
        format_keys(&sc.capabilities),
        format_keys(&sc.applications),
        format_keys(&sc.results),
        format_keys(&sc.contact),
        format_keys(&sc.parent_site),
        format_keys(&sc.back_home),
    )
}

/// ステータスバーを構築する。
fn build_status_bar(app: &App) -> Paragraph<'static> {
    // 最後にナビゲートしたセクションは表示のみに使う。
    let status_text = if let Some(err) = &app.ui.error {
        format!("[{}] ERROR: {}", app.nav.active_section, err)
    } else {
        format!("[{}] {}", app.nav.active_section, app.ui.status)
    };

    let mut status_bar = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("STATUS"))
        .wrap(Wrap { trim: true });

    // エラー時は赤色で強調表示する。
    if app.ui.error.is_some() {
        status_bar = status_bar.style(Style::default().fg(Color::Red));
    }

    status_bar
}

/// ページ本文とセクションレジストリを現在の状態から組み立てる。
pub fn build_page(app: &App) -> Page {
    let mut page = Page::new();
    push_hero(&mut page, app);
    push_technology(&mut page, app);
    push_capabilities(&mut page);
    push_applications(&mut page, app);
    push_results(&mut page);
    push_contact(&mut page, app);
    push_footer(&mut page, app);
    page
}

/// ヒーローセクション。
fn push_hero(page: &mut Page, app: &App) {
    page.begin_section("hero");
    page.push(Line::from(Span::styled(
        "SPACE-BASED EXPLORATION * 18,000 FT DETECTION RANGE",
        Style::default().fg(Color::Blue),
    )));
    page.blank();
    page.push(Line::from(Span::styled(
        "SEE THROUGH",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    page.push(Line::from(Span::styled(
        "THE EARTH",
        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
    )));
    page.blank();
    page.paragraph(&app.cfg.company.tagline, Style::default());
    page.blank();

    // 主要統計を1行にまとめる。
    let stats = content::HERO_STATS
        .iter()
        .map(|(value, label)| format!("{value} {label}"))
        .collect::<Vec<_>>()
        .join("  |  ");
    page.push(Line::from(Span::styled(stats, Style::default().fg(GOLD))));
    page.blank();
    page.push(Line::from(Span::styled(
        "[ Request Survey ]   [ View Technology Demo ]",
        Style::default().fg(Color::Blue),
    )));
    page.blank();
    page.blank();
}

/// 技術セクション（レイヤー選択パネル付き）。
fn push_technology(page: &mut Page, app: &App) {
    page.begin_section("technology");
    page.heading("ATOMIC MINERAL RESONANCE TOMOGRAPHY");
    page.paragraph(
        "Every mineral element possesses a unique atomic resonance frequency. AMRT technology detects these signatures from space, creating detailed subsurface maps without environmental impact.",
        Style::default().fg(Color::Gray),
    );
    page.blank();

    page.push(Line::from("Underground Layer Detection"));
    // レイヤー一覧：アクティブな1件だけを強調する。
    for (i, layer) in content::TECH_LAYERS.iter().enumerate() {
        let marker = if app.layers.is_active(i) { ">" } else { " " };
        let style = if app.layers.is_active(i) {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        page.push(Line::from(Span::styled(
            format!("{marker} {} {} ({})", layer.glyph, layer.title, layer.depth),
            style,
        )));
    }
    page.blank();

    // アクティブなレイヤーの詳細を展開する。
    let active = &content::TECH_LAYERS[app.layers.active()];
    page.push(Line::from(Span::styled(
        format!("{} - {}", active.title, active.depth),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    page.paragraph(active.description, Style::default().fg(Color::Gray));
    page.push(Line::from(Span::styled(
        format!(
            "Detection Range: {}  |  Accuracy: 93%+ Verified",
            content::layer_detection_range(app.layers.active())
        ),
        Style::default().fg(GOLD),
    )));
    page.blank();

    page.push(Line::from("Evolution from Nuclear Magnetic Resonance (NMR)"));
    page.push(Line::from(Span::styled(
        "  NMR (Legacy): photographic plates and radio-nucleotide bombardment",
        Style::default().fg(Color::Red),
    )));
    page.push(Line::from(Span::styled(
        "  AMRT (Current): digital technology with AI algorithms, 93% accuracy",
        Style::default().fg(GOLD),
    )));
    page.blank();
    page.blank();
}

/// 能力セクション（静的なカードグリッド）。
fn push_capabilities(page: &mut Page) {
    page.begin_section("capabilities");
    page.heading("DETECTION CAPABILITIES");
    page.paragraph(
        "Comprehensive subsurface analysis across multiple industries and applications, providing unprecedented insight into Earth's hidden resources.",
        Style::default().fg(Color::Gray),
    );

    for cap in &content::CAPABILITIES {
        page.blank();
        page.push(Line::from(vec![
            Span::styled(
                format!("{} {}", cap.glyph, cap.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", cap.range), Style::default().fg(GOLD)),
        ]));
        page.paragraph(cap.description, Style::default().fg(Color::Gray));
        page.push(Line::from(Span::styled(
            format!(
                "  Accuracy: {}  Applications: {}",
                cap.accuracy,
                cap.applications.join(", ")
            ),
            Style::default().fg(Color::Gray),
        )));
    }
    page.blank();
    page.blank();
}

/// 用途セクション（タブ選択パネル付き）。
fn push_applications(page: &mut Page, app: &App) {
    page.begin_section("applications");
    page.heading("INDUSTRY APPLICATIONS");

    // タブ一覧：アクティブな1件だけを強調する。
    for (i, a) in content::APPLICATIONS.iter().enumerate() {
        let marker = if app.applications.is_active(i) { ">" } else { " " };
        let style = if app.applications.is_active(i) {
            Style::default().fg(Color::Black).bg(GOLD)
        } else {
            Style::default()
        };
        page.push(Line::from(Span::styled(
            format!("{marker} {} ({})", a.title, a.industry),
            style,
        )));
    }
    page.blank();

    // アクティブなタブの詳細を展開する。
    let active = &content::APPLICATIONS[app.applications.active()];
    page.paragraph(active.description, Style::default().fg(Color::Gray));
    page.blank();
    page.push(Line::from("Key Benefits:"));
    for benefit in active.benefits {
        page.push(Line::from(format!("  - {benefit}")));
    }
    page.blank();
    page.push(Line::from(Span::styled(
        "Case Study:",
        Style::default().fg(Color::Blue),
    )));
    page.paragraph(active.case_study, Style::default().fg(Color::Gray));
    page.push(Line::from(Span::styled(
        format!(
            "Detection Depth: {}  |  Accuracy Rate: {}",
            active.depth, active.accuracy
        ),
        Style::default().fg(GOLD),
    )));
    page.blank();

    page.push(Line::from("Survey Process:"));
    for (i, step) in content::SURVEY_PROCESS.iter().enumerate() {
        page.push(Line::from(format!("  {}. {step}", i + 1)));
    }
    page.blank();
    page.blank();
}

/// 結果・検証セクション。
fn push_results(page: &mut Page) {
    page.begin_section("results");
    page.heading("PROVEN RESULTS");
    page.paragraph(
        "AMRT technology has been validated through rigorous drilling programs, third-party verification, and real-world applications across multiple industries.",
        Style::default().fg(Color::Gray),
    );
    page.blank();

    let stats = content::RESULT_STATS
        .iter()
        .map(|(value, label)| format!("{value} {label}"))
        .collect::<Vec<_>>()
        .join("  |  ");
    page.push(Line::from(Span::styled(stats, Style::default().fg(GOLD))));
    page.blank();

    for method in &content::VALIDATION_METHODS {
        page.push(Line::from(Span::styled(
            method.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        page.paragraph(method.description, Style::default().fg(Color::Gray));
        page.blank();
    }
    page.blank();
}

/// 問い合わせセクション（調査依頼フォーム付き）。
fn push_contact(page: &mut Page, app: &App) {
    page.begin_section("contact");
    page.heading("REQUEST A SATELLITE SURVEY");
    page.paragraph(
        "Ready to discover what lies beneath your property? Get a detailed subsurface analysis with advanced AMRT technology. No environmental impact, maximum insight.",
        Style::default().fg(Color::Gray),
    );
    page.blank();

    page.push(Line::from(Span::styled(
        "Survey Request Form  (Tab: next field | e: edit | p: project type | s: submit)",
        Style::default().fg(Color::Gray),
    )));
    // フォームの現在値：編集対象のフィールドに印を付ける。
    for (i, field) in SurveyField::ALL.iter().enumerate() {
        let marker = if i == app.ui.editing_field_idx { ">" } else { " " };
        let required = if field.required() { " *" } else { "" };
        let value = app.form.value(*field);
        let shown = if value.is_empty() { "-" } else { value };
        let style = if i == app.ui.editing_field_idx {
            Style::default().fg(GOLD)
        } else {
            Style::default()
        };
        page.push(Line::from(Span::styled(
            format!("{marker} {}{required}: {shown}", field.label()),
            style,
        )));
    }
    page.blank();

    page.push(Line::from("What to Expect:"));
    for (i, (title, detail)) in content::EXPECT_STEPS.iter().enumerate() {
        page.push(Line::from(format!("  {}. {title} - {detail}", i + 1)));
    }
    page.blank();

    page.push(Line::from("Survey Deliverables:"));
    for item in content::DELIVERABLES {
        page.push(Line::from(format!("  - {item}")));
    }
    page.blank();

    // 料金と納期は設定値から表示する。
    page.push(Line::from("Pricing & Timeline:"));
    page.push(Line::from(format!(
        "  Survey Duration: {}",
        app.cfg.survey.duration
    )));
    page.push(Line::from(format!(
        "  Report Delivery: {}",
        app.cfg.survey.report_delivery
    )));
    page.push(Line::from(format!("  Pricing: {}", app.cfg.survey.pricing)));
    page.blank();
    page.blank();
}

/// フッター。ナビゲーション対象ではないためレジストリには載せない。
fn push_footer(page: &mut Page, app: &App) {
    page.push(Line::from(Span::styled(
        format!(
            "{} {}",
            app.cfg.company.holding_name, app.cfg.company.division_name
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    page.paragraph(
        "Advanced satellite-based mineral exploration using revolutionary AMRT technology. See beneath the Earth's surface with unprecedented precision.",
        Style::default().fg(Color::Gray),
    );
    page.blank();
    page.push(Line::from(Span::styled(
        format!("Survey Services: {}", content::FOOTER_SERVICES.join(" / ")),
        Style::default().fg(Color::Gray),
    )));
    page.push(Line::from(Span::styled(
        format!("Technology: {}", content::FOOTER_TECHNOLOGY.join(" / ")),
        Style::default().fg(Color::Gray),
    )));
    page.blank();
    page.push(Line::from(format!(
        "Technology Center: {}",
        app.cfg.contact.address
    )));
    page.push(Line::from(format!(
        "{}  |  {}  |  24/7 Satellite Monitoring",
        app.cfg.contact.phone, app.cfg.contact.email
    )));
    page.blank();
    page.push(Line::from(Span::styled(
        format!(
            "(c) {} {} {}. All rights reserved.  93%+ Accuracy Verified  * Satellites Online",
            chrono::Local::now().year(),
            app.cfg.company.holding_name,
            app.cfg.company.division_name
        ),
        Style::default().fg(Color::DarkGray),
    )));
}

/// ショートカットキーの配列を表示用文字列に変換する。
fn format_keys(keys: &[String]) -> String {
    keys.join("/")
}

/// 固定幅で単語単位の折り返しを行う。
fn wrap_plain(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, navigation::SECTION_IDS, shortcuts::Shortcuts};

    fn sample_app() -> App {
        App::new(Config::default(), Shortcuts::default())
    }

    #[test]
    fn test_page_registry_lists_all_sections_in_order() {
        // レジストリは6セクションを表示順で持ち、行位置は単調増加する。
        let page = build_page(&sample_app());
        let ids: Vec<&str> = page.offsets.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SECTION_IDS);
        for pair in page.offsets.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
    }

    #[test]
    fn test_section_offsets_stay_within_page() {
        // 各セクションの先頭行はページ内に収まる。
        let page = build_page(&sample_app());
        let total = page.lines.len() as u16;
        for (_, offset) in &page.offsets {
            assert!(*offset < total);
        }
    }

    #[test]
    fn test_active_layer_detail_follows_selection() {
        // レイヤー選択を変えると展開される詳細も変わる。
        let mut app = sample_app();
        app.layers.select(2);
        let page = build_page(&app);
        let text: String = page
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Surface Analysis - 0 - 500 ft"));
    }

    #[test]
    fn test_deepest_layer_shows_extended_range() {
        // 最深層のみ18,000ftのレンジ表示になる。
        let mut app = sample_app();
        app.layers.select(4);
        let page = build_page(&app);
        let text: String = page
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Up to 18,000 ft"));
    }

    #[test]
    fn test_form_values_appear_on_page() {
        // フォームへ設定した値が問い合わせセクションに現れる。
        let mut app = sample_app();
        app.form.set_field(SurveyField::Name, "Jane Doe".into());
        let page = build_page(&app);
        let text: String = page
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Name *: Jane Doe"));
    }

    #[test]
    fn test_wrap_plain_respects_width() {
        // 折り返し後の各行は指定幅に収まる。
        let text = "one two three four five six seven eight nine ten";
        for line in wrap_plain(text, 12) {
            assert!(line.chars().count() <= 12);
        }
        assert!(wrap_plain("", 10).is_empty());
        assert_eq!(wrap_plain("word", 10), vec!["word".to_string()]);
    }
}
