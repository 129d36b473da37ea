//! TUI内での文字列入力コンポーネント（InputBox）。
//!
//! フォームの1フィールドを編集するためのポップアップ。確定時に
//! どのフィールドへ反映するかを状態として持つ。

use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::form::SurveyField;

/// InputBox入力状態。
#[derive(Clone, Debug)]
pub struct InputBoxState {
    /// プロンプトメッセージ。
    pub prompt: String,
    /// 現在の入力値。
    pub value: String,
    /// カーソル位置（文字単位）。
    pub cursor: usize,
    /// 確定時に値を反映するフォームフィールド。
    pub target: SurveyField,
}

impl InputBoxState {
    /// 既存値を初期表示し、カーソルを末尾に置いた状態で開く。
    pub fn open(field: SurveyField, current: &str) -> Self {
        Self {
            prompt: format!("{}:", field.label()),
            value: current.to_string(),
            cursor: current.chars().count(),
            target: field,
        }
    }

    /// カーソル位置のバイトオフセットを求める。
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// 文字を挿入する。
    pub fn insert_char(&mut self, c: char) {
        // カーソル位置に挿入してから1文字分進める。
        let at = self.byte_cursor();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Backspace（カーソル前の文字を削除）。
    pub fn backspace(&mut self) {
        // 先頭では何もしない。
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Delete（カーソル位置の文字を削除）。
    pub fn delete(&mut self) {
        // 末尾では何もしない。
        if self.cursor < self.value.chars().count() {
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// カーソルを左に移動する。
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// カーソルを右に移動する。
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// カーソルを先頭に移動する。
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// カーソルを末尾に移動する。
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// 行全体をクリアする。
    pub fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// InputBoxをポップアップとして描画する。
pub fn render_input_box(f: &mut Frame, state: &InputBoxState) {
    // 中央に配置されたポップアップ領域を計算する。
    let popup_area = centered_popup(f.area(), 70, 7);

    // 既存の描画を消してポップアップ用の背景にする。
    f.render_widget(Clear, popup_area);

    // ポップアップの外枠とスタイルを描画する。
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Input")
        .style(Style::default().bg(Color::DarkGray));
    f.render_widget(block, popup_area);

    // 内部レイアウト（プロンプト + 入力フィールド + ヘルプ）を定義する。
    let inner_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // プロンプト
            Constraint::Length(1), // 入力フィールド
            Constraint::Length(1), // 空行
            Constraint::Length(1), // ヘルプ
        ])
        .split(popup_area);

    // プロンプトメッセージを描画する。
    let prompt_widget = Paragraph::new(state.prompt.clone()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(prompt_widget, inner_layout[0]);

    // 入力値の可視範囲を切り出す（カーソル追従の横スクロール）。
    let display_width = inner_layout[1].width as usize;
    let scroll_offset = state
        .cursor
        .saturating_sub(display_width.saturating_sub(2));
    let visible: Vec<char> = state
        .value
        .chars()
        .skip(scroll_offset)
        .take(display_width)
        .collect();

    // カーソル位置に|を差し込んで表示文字列を作る。
    let cursor_in_visible = (state.cursor - scroll_offset).min(visible.len());
    let before: String = visible[..cursor_in_visible].iter().collect();
    let after: String = visible[cursor_in_visible..].iter().collect();
    let with_cursor = format!("{before}|{after}");

    // 文字列とカーソルを含む入力欄を描画する。
    let input_widget = Paragraph::new(with_cursor).style(Style::default().fg(Color::Green));
    f.render_widget(input_widget, inner_layout[1]);

    // ヘルプテキストを描画する。
    let help = Paragraph::new("Enter=confirm | ESC=cancel | Ctrl+U=clear")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(help, inner_layout[3]);
}

/// 中央配置のポップアップ領域を計算する。
fn centered_popup(area: Rect, width_percent: u16, height: u16) -> Rect {
    // 縦方向の余白を作り、中央行を取り出す。
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    // 横方向も中央に寄せてポップアップ領域を返す。
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
}
