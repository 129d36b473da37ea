//! TUIのイベントループ、入力処理、状態管理。

mod handlers;
mod render;

use anyhow::Result;
use crossterm::event::{self, Event};
use std::{path::PathBuf, time::Duration};

use crate::{
    config::Config,
    content,
    events::{Screen, UiState},
    form::SurveyForm,
    input::InputBoxState,
    navigation::Navigator,
    panel::SelectablePanel,
    shortcuts::Shortcuts,
    ui::Tui,
};

use handlers::{handle_key, is_ctrl_c};
use render::draw;

/// 入力処理と描画で共有するアプリ状態。
pub struct App {
    /// メモリ上の現在設定（ブランド・連絡先・料金表記）。
    pub cfg: Config,
    /// 画面やステータスなどUI固有の状態。
    pub ui: UiState,
    /// 技術セクションのレイヤー選択状態。
    pub layers: SelectablePanel,
    /// 用途セクションのタブ選択状態。
    pub applications: SelectablePanel,
    /// 調査依頼フォームの現在値。
    pub form: SurveyForm,
    /// セクションナビゲーション状態。
    pub nav: Navigator,
    /// 入力ボックスの状態（入力中はSome）。
    pub input_box: Option<InputBoxState>,
    /// ショートカットキー設定。
    pub shortcuts: Shortcuts,
}

impl App {
    /// 設定とショートカットから初期状態を組み立てる。
    pub fn new(cfg: Config, shortcuts: Shortcuts) -> Self {
        Self {
            cfg,
            ui: UiState {
                screen: Screen::Home,
                status: "Ready".into(),
                editing_field_idx: 0,
                error: None,
            },
            layers: SelectablePanel::new(content::TECH_LAYERS.len()),
            applications: SelectablePanel::new(content::APPLICATIONS.len()),
            form: SurveyForm::new(),
            nav: Navigator::new(),
            input_box: None,
            shortcuts,
        }
    }
}

/// ユーザーが終了するまでメインTUIループを回す。
pub fn run_app(terminal: &mut Tui) -> Result<()> {
    // 設定ファイルを読み込む（初回はデフォルトを生成）。
    let cfg_path = PathBuf::from("config.toml");
    let cfg = Config::load_or_default(&cfg_path)?;

    // ショートカット設定を読み込む（無ければデフォルト）。
    let shortcuts = Shortcuts::load_or_default("shortcut.toml")?;

    // アプリ状態を初期化する。
    let mut app = App::new(cfg, shortcuts);

    loop {
        // 現在の状態を描画する。
        terminal.draw(|f| draw(f, &app))?;

        // UIの応答性確保のため短いタイムアウトで入力をポーリングする。
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(k) = event::read()?
        {
            // どの画面でもCtrl+Cで終了できるようにする。
            if is_ctrl_c(&k) {
                break;
            }
            if handle_key(&mut app, k)? {
                break;
            }
        }
    }
    Ok(())
}
