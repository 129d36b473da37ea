//! ショートカット設定の管理。

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ショートカット設定の全体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortcuts {
    pub home: HomeShortcuts,
    pub site: SiteShortcuts,
    pub form: FormShortcuts,
    pub input_box: InputBoxShortcuts,
}

/// ホーム画面のショートカット。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeShortcuts {
    pub quit: Vec<String>,
    pub enter_site: Vec<String>,
}

/// サイト画面のショートカット。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteShortcuts {
    pub quit: Vec<String>,
    pub back_home: Vec<String>,
    pub parent_site: Vec<String>,
    pub down: Vec<String>,
    pub up: Vec<String>,
    pub page_down: Vec<String>,
    pub page_up: Vec<String>,
    pub hero: Vec<String>,
    pub technology: Vec<String>,
    pub capabilities: Vec<String>,
    pub applications: Vec<String>,
    pub results: Vec<String>,
    pub contact: Vec<String>,
    pub layer_next: Vec<String>,
    pub layer_prev: Vec<String>,
    pub app_next: Vec<String>,
    pub app_prev: Vec<String>,
}

/// 調査依頼フォームのショートカット。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormShortcuts {
    pub next_field: Vec<String>,
    pub edit_field: Vec<String>,
    pub project_type: Vec<String>,
    pub submit: Vec<String>,
}

/// InputBoxのショートカット。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputBoxShortcuts {
    pub confirm: Vec<String>,
    pub cancel: Vec<String>,
    pub backspace: Vec<String>,
    pub delete: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub home: Vec<String>,
    pub end: Vec<String>,
    pub clear_line: Vec<String>,
}

impl Shortcuts {
    /// TOMLから読み込み、無ければデフォルトを返す。
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            // 既存ファイルを読み込んでパースする。
            let content = std::fs::read_to_string(path)?;
            let shortcuts: Shortcuts = toml::from_str(&content)?;
            Ok(shortcuts)
        } else {
            // 未作成の場合は既定値を利用する。
            Ok(Self::default())
        }
    }

    /// TOMLとして保存する。
    #[allow(dead_code)]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // 文字列にシリアライズする。
        let content = toml::to_string_pretty(self)?;
        // ファイルへ書き込む。
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            home: HomeShortcuts {
                quit: vec!["q".into()],
                enter_site: vec!["Enter".into(), "e".into()],
            },
            site: SiteShortcuts {
                quit: vec!["q".into()],
                back_home: vec!["Esc".into()],
                parent_site: vec!["w".into()],
                down: vec!["Down".into(), "j".into()],
                up: vec!["Up".into(), "k".into()],
                page_down: vec!["PageDown".into(), "f".into()],
                page_up: vec!["PageUp".into(), "b".into()],
                hero: vec!["1".into()],
                technology: vec!["2".into()],
                capabilities: vec!["3".into()],
                applications: vec!["4".into()],
                results: vec!["5".into()],
                contact: vec!["6".into()],
                layer_next: vec!["Right".into(), "l".into()],
                layer_prev: vec!["Left".into(), "h".into()],
                app_next: vec!["]".into()],
                app_prev: vec!["[".into()],
            },
            form: FormShortcuts {
                next_field: vec!["Tab".into()],
                edit_field: vec!["e".into()],
                project_type: vec!["p".into()],
                submit: vec!["s".into()],
            },
            input_box: InputBoxShortcuts {
                confirm: vec!["Enter".into()],
                cancel: vec!["Esc".into()],
                backspace: vec!["Backspace".into()],
                delete: vec!["Delete".into()],
                left: vec!["Left".into()],
                right: vec!["Right".into()],
                home: vec!["Home".into()],
                end: vec!["End".into()],
                clear_line: vec!["Ctrl+u".into()],
            },
        }
    }
}

/// KeyEventがいずれかのショートカット文字列と一致するか判定する。
pub fn matches_shortcut(key: &KeyEvent, shortcuts: &[String]) -> bool {
    shortcuts.iter().any(|s| matches_single_shortcut(key, s))
}

/// KeyEventが単一のショートカット文字列と一致するか判定する。
fn matches_single_shortcut(key: &KeyEvent, shortcut: &str) -> bool {
    // ショートカット文字列を分解する（例: "Ctrl+u", "a", "Enter"）。
    let parts: Vec<&str> = shortcut.split('+').collect();

    let (modifiers_str, key_str) = if parts.len() > 1 {
        // 修飾キー付きの形式（例: "Ctrl+u"）。
        (&parts[0..parts.len() - 1], parts[parts.len() - 1])
    } else {
        // 修飾キーなしの形式（例: "a", "Enter"）。
        (&[][..], parts[0])
    };

    // 修飾キーを解析して期待値を作る。
    let mut expected_modifiers = KeyModifiers::empty();
    for modifier in modifiers_str {
        match *modifier {
            "Ctrl" | "ctrl" => expected_modifiers |= KeyModifiers::CONTROL,
            "Alt" | "alt" => expected_modifiers |= KeyModifiers::ALT,
            "Shift" | "shift" => expected_modifiers |= KeyModifiers::SHIFT,
            _ => return false,
        }
    }

    // 修飾キーが一致しなければ即座に不一致とする。
    if key.modifiers != expected_modifiers {
        return false;
    }

    // キーコードの種別ごとに一致判定を行う。
    match key_str {
        "Enter" | "enter" => key.code == KeyCode::Enter,
        "Esc" | "esc" => key.code == KeyCode::Esc,
        "Tab" | "tab" => key.code == KeyCode::Tab,
        "Backspace" | "backspace" => key.code == KeyCode::Backspace,
        "Delete" | "delete" => key.code == KeyCode::Delete,
        "Up" | "up" => key.code == KeyCode::Up,
        "Down" | "down" => key.code == KeyCode::Down,
        "Left" | "left" => key.code == KeyCode::Left,
        "Right" | "right" => key.code == KeyCode::Right,
        "Home" | "home" => key.code == KeyCode::Home,
        "End" | "end" => key.code == KeyCode::End,
        "PageUp" | "pageup" => key.code == KeyCode::PageUp,
        "PageDown" | "pagedown" => key.code == KeyCode::PageDown,
        // 単一文字は Char として比較する。
        s if s.len() == 1 => {
            if let Some(c) = s.chars().next() {
                key.code == KeyCode::Char(c)
            } else {
                false
            }
        }
        _ => false,
    }
}
