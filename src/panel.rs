//! 選択可能パネルの状態管理。
//!
//! 固定リストに対する単一のアクティブ位置を保持する。技術レイヤー一覧と
//! 用途タブの両方で使う。

/// 固定長リストへのアクティブ位置。
#[derive(Clone, Debug)]
pub struct SelectablePanel {
    /// 項目数（固定）。
    len: usize,
    /// 現在のアクティブ位置。常に `0..len` の範囲。
    active: usize,
}

impl SelectablePanel {
    /// 先頭をアクティブにした状態で作成する。
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// 現在のアクティブ位置を返す。
    pub fn active(&self) -> usize {
        self.active
    }

    /// 指定位置が現在アクティブか判定する。
    pub fn is_active(&self, idx: usize) -> bool {
        self.active == idx
    }

    /// アクティブ位置を変更する。範囲外の指定は無視する。
    pub fn select(&mut self, idx: usize) {
        if idx < self.len {
            self.active = idx;
        }
    }

    /// 次の項目へ循環的に移動する。
    pub fn next(&mut self) {
        if self.len > 0 {
            self.select((self.active + 1) % self.len);
        }
    }

    /// 前の項目へ循環的に移動する。
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.select((self.active + self.len - 1) % self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_marks_exactly_one_active() {
        // 有効な位置を選択すると、その1件だけがアクティブになる。
        let mut panel = SelectablePanel::new(3);
        panel.select(2);
        assert_eq!(panel.active(), 2);
        for i in 0..3 {
            assert_eq!(panel.is_active(i), i == 2);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        // 同じ位置を二度選択しても結果は変わらない。
        let mut panel = SelectablePanel::new(5);
        panel.select(3);
        panel.select(3);
        assert_eq!(panel.active(), 3);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        // 範囲外の選択は無視され、直前の状態を保つ。
        let mut panel = SelectablePanel::new(4);
        panel.select(1);
        panel.select(4);
        panel.select(100);
        assert_eq!(panel.active(), 1);
    }

    #[test]
    fn test_initial_active_is_zero() {
        // 初期状態は先頭がアクティブ。
        let panel = SelectablePanel::new(5);
        assert_eq!(panel.active(), 0);
        assert!(panel.is_active(0));
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        // next/prevは端で循環する。
        let mut panel = SelectablePanel::new(3);
        panel.prev();
        assert_eq!(panel.active(), 2);
        panel.next();
        assert_eq!(panel.active(), 0);
        panel.next();
        assert_eq!(panel.active(), 1);
    }

    #[test]
    fn test_empty_panel_does_not_move() {
        // 空リストでは何も起きない。
        let mut panel = SelectablePanel::new(0);
        panel.next();
        panel.prev();
        panel.select(0);
        assert_eq!(panel.active(), 0);
    }
}
