//! レイアウト計算のヘルパー関数。

use ratatui::prelude::*;

/// サイト画面の3つの領域。
pub struct SiteLayout {
    /// ヘッダー（ブランド + セクションメニュー）の領域。
    pub nav_bar: Rect,
    /// ページ本文の領域。
    pub body: Rect,
    /// STATUSバーの領域。
    pub status_bar: Rect,
}

/// サイト画面を3つの領域に分割する（NAV + Body + STATUS）。
pub fn create_site_layout(area: Rect) -> SiteLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // NAVバー
            Constraint::Min(1),    // ページ本文
            Constraint::Length(3), // STATUSバー
        ])
        .split(area);

    SiteLayout {
        nav_bar: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// ホーム画面の中央コンテンツ領域を切り出す。
pub fn create_home_layout(area: Rect) -> Rect {
    // 縦方向に余白を取り、中央の帯を返す。
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    // 横方向も中央に寄せる。
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1])[1]
}
