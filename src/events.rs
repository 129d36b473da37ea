//! 画面遷移用のUI状態と画面種別。

/// TUIで現在表示中の画面。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// 入口となるホーム画面。
    Home,
    /// スクロール可能なサイト本体の画面。
    Site,
}

/// 描画側と共有するUI状態。
#[derive(Clone, Debug)]
pub struct UiState {
    /// 現在の画面。
    pub screen: Screen,
    /// 画面下部のステータス文言。
    pub status: String,
    /// フォームで編集対象のフィールド位置（0..7）。
    pub editing_field_idx: usize,
    /// エラーメッセージ（強調表示用）。
    pub error: Option<String>,
}
