//! セクションナビゲーターの状態管理。
//!
//! 最後に要求されたセクションIDの記録と、描画側が組み立てたセクション
//! レジストリに対するスクロール位置の解決を行う。

/// ページ上のセクションID（表示順）。
pub const SECTION_IDS: [&str; 6] = [
    "hero",
    "technology",
    "capabilities",
    "applications",
    "results",
    "contact",
];

/// ナビゲーション状態。
#[derive(Clone, Debug)]
pub struct Navigator {
    /// 最後にナビゲートしたセクションID。表示専用で分岐には使わない。
    pub active_section: String,
    /// ページ先頭からのスクロール行数。
    pub scroll: u16,
}

impl Navigator {
    /// ヒーローセクションを指した初期状態を作る。
    pub fn new() -> Self {
        Self {
            active_section: SECTION_IDS[0].into(),
            scroll: 0,
        }
    }

    /// 指定IDへナビゲートする。
    ///
    /// IDは見つかったかどうかに関わらず無条件に記録する。レジストリに
    /// 存在する場合のみスクロール位置をそのセクション先頭へ移す。
    /// 存在しない場合のスクロールは無言のno-op。
    pub fn navigate(&mut self, section_id: &str, offsets: &[(&str, u16)]) {
        self.active_section = section_id.to_string();
        if let Some((_, offset)) = offsets.iter().find(|(id, _)| *id == section_id) {
            self.scroll = *offset;
        } else {
            tracing::debug!("navigate: section '{section_id}' not on page, scroll unchanged");
        }
    }

    /// スクロール位置を相対移動する。`0..=max` の範囲に収める。
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(max)) as u16;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// テスト用の小さなセクションレジストリ。
    fn offsets() -> Vec<(&'static str, u16)> {
        vec![("hero", 0), ("technology", 24), ("contact", 120)]
    }

    #[test]
    fn test_navigate_moves_scroll_to_known_section() {
        // 既知のIDはスクロール位置をセクション先頭へ移す。
        let mut nav = Navigator::new();
        nav.navigate("technology", &offsets());
        assert_eq!(nav.active_section, "technology");
        assert_eq!(nav.scroll, 24);
    }

    #[test]
    fn test_navigate_records_unknown_section_without_scrolling() {
        // 未知のIDでも記録は必ず更新し、スクロールは変化しない。
        let mut nav = Navigator::new();
        nav.navigate("contact", &offsets());
        nav.navigate("nonexistent-id", &offsets());
        assert_eq!(nav.active_section, "nonexistent-id");
        assert_eq!(nav.scroll, 120);
    }

    #[test]
    fn test_initial_state_points_at_hero() {
        // 初期状態はhero・先頭位置。
        let nav = Navigator::new();
        assert_eq!(nav.active_section, "hero");
        assert_eq!(nav.scroll, 0);
    }

    #[test]
    fn test_scroll_by_clamps_to_bounds() {
        // 相対スクロールは0..=maxに収まる。
        let mut nav = Navigator::new();
        nav.scroll_by(-10, 100);
        assert_eq!(nav.scroll, 0);
        nav.scroll_by(30, 100);
        assert_eq!(nav.scroll, 30);
        nav.scroll_by(1000, 100);
        assert_eq!(nav.scroll, 100);
    }

    #[test]
    fn test_section_ids_are_the_fixed_page_order() {
        assert_eq!(
            SECTION_IDS,
            ["hero", "technology", "capabilities", "applications", "results", "contact"]
        );
    }
}
