//! 調査依頼フォームの状態管理。
//!
//! 固定キー集合に対する文字列値の保持と、送信時のゲート判定・リセットを
//! 担当する。実際の送信先は存在せず、受理した内容は破棄される。

use uuid::Uuid;

/// フォームの固定フィールド。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurveyField {
    /// 氏名（必須）。
    Name,
    /// 会社名。
    Company,
    /// メールアドレス（必須）。
    Email,
    /// 電話番号。
    Phone,
    /// プロジェクト種別（必須）。
    ProjectType,
    /// 調査地域（必須）。
    Location,
    /// 補足メッセージ。
    Message,
}

impl SurveyField {
    /// 表示・走査順の全フィールド。
    pub const ALL: [SurveyField; 7] = [
        SurveyField::Name,
        SurveyField::Company,
        SurveyField::Email,
        SurveyField::Phone,
        SurveyField::ProjectType,
        SurveyField::Location,
        SurveyField::Message,
    ];

    /// マッピング上のキー名。
    #[allow(dead_code)]
    pub fn key(self) -> &'static str {
        match self {
            SurveyField::Name => "name",
            SurveyField::Company => "company",
            SurveyField::Email => "email",
            SurveyField::Phone => "phone",
            SurveyField::ProjectType => "projectType",
            SurveyField::Location => "location",
            SurveyField::Message => "message",
        }
    }

    /// 画面表示用ラベル。
    pub fn label(self) -> &'static str {
        match self {
            SurveyField::Name => "Name",
            SurveyField::Company => "Company",
            SurveyField::Email => "Email",
            SurveyField::Phone => "Phone",
            SurveyField::ProjectType => "Project Type",
            SurveyField::Location => "Location",
            SurveyField::Message => "Project Details",
        }
    }

    /// 送信に必須のフィールドか。
    pub fn required(self) -> bool {
        matches!(
            self,
            SurveyField::Name | SurveyField::Email | SurveyField::ProjectType | SurveyField::Location
        )
    }

    /// 配列上の位置。
    pub fn index(self) -> usize {
        match self {
            SurveyField::Name => 0,
            SurveyField::Company => 1,
            SurveyField::Email => 2,
            SurveyField::Phone => 3,
            SurveyField::ProjectType => 4,
            SurveyField::Location => 5,
            SurveyField::Message => 6,
        }
    }
}

/// 送信操作の結果。
#[derive(Clone, Debug)]
pub enum SubmitOutcome {
    /// 受理。確認表示用の参照IDを持つ。
    Accepted {
        /// ユーザー向け確認メッセージに載せる参照ID。
        reference: Uuid,
    },
    /// 必須項目不足などで送信がブロックされた。
    Blocked {
        /// ブロック理由の説明文。
        reason: String,
    },
}

/// フォーム全体の現在値。
#[derive(Clone, Debug, Default)]
pub struct SurveyForm {
    /// フィールド順の現在値。初期値はすべて空文字列。
    values: [String; 7],
}

impl SurveyForm {
    /// 全フィールドを空で初期化する。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定フィールドの値を置き換える。他のフィールドには影響しない。
    pub fn set_field(&mut self, field: SurveyField, value: String) {
        self.values[field.index()] = value;
    }

    /// 指定フィールドの現在値を返す。
    pub fn value(&self, field: SurveyField) -> &str {
        &self.values[field.index()]
    }

    /// 送信を試みる。
    ///
    /// 必須フィールドが空、またはメールアドレスの形式が不正な場合は
    /// `Blocked` を返し、状態は変更しない。受理時は全フィールドを空へ
    /// リセットし、参照IDを払い出す。内容はどこへも送信されない。
    pub fn submit(&mut self) -> SubmitOutcome {
        // 必須フィールドの充足を走査順に確認する。
        for field in SurveyField::ALL {
            if field.required() && self.value(field).trim().is_empty() {
                return SubmitOutcome::Blocked {
                    reason: format!("{} is required", field.label()),
                };
            }
        }

        // メールアドレスの簡易形式チェック（type=email相当）。
        if !looks_like_email(self.value(SurveyField::Email)) {
            return SubmitOutcome::Blocked {
                reason: "Email address looks invalid".into(),
            };
        }

        // 受理：参照IDを発行し、全フィールドを空へ戻す。
        let reference = Uuid::new_v4();
        self.values = Default::default();
        SubmitOutcome::Accepted { reference }
    }
}

/// メールアドレスらしい文字列か判定する。
fn looks_like_email(s: &str) -> bool {
    // ローカル部とドメイン部が双方あり、空白を含まないことのみ確認する。
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 必須項目をすべて埋めたフォームを作る。
    fn filled_form() -> SurveyForm {
        let mut form = SurveyForm::new();
        form.set_field(SurveyField::Name, "Jane Doe".into());
        form.set_field(SurveyField::Email, "jane@example.com".into());
        form.set_field(SurveyField::ProjectType, "Mining Exploration".into());
        form.set_field(SurveyField::Location, "Nevada".into());
        form
    }

    #[test]
    fn test_fields_start_empty() {
        // 初期状態では全フィールドが空文字列。
        let form = SurveyForm::new();
        for field in SurveyField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_set_field_leaves_others_unchanged() {
        // 1フィールドの更新は他のフィールドへ波及しない。
        let mut form = SurveyForm::new();
        form.set_field(SurveyField::Name, "Jane".into());
        assert_eq!(form.value(SurveyField::Name), "Jane");
        for field in SurveyField::ALL {
            if field != SurveyField::Name {
                assert_eq!(form.value(field), "");
            }
        }
    }

    #[test]
    fn test_set_field_overwrites_previous_value() {
        // 同じフィールドへの再設定は値を置き換える。
        let mut form = SurveyForm::new();
        form.set_field(SurveyField::Location, "Texas".into());
        form.set_field(SurveyField::Location, "Nevada".into());
        assert_eq!(form.value(SurveyField::Location), "Nevada");
    }

    #[test]
    fn test_submit_resets_all_fields() {
        // 受理後は任意項目も含め全フィールドが空へ戻る。
        let mut form = filled_form();
        form.set_field(SurveyField::Company, "Acme Mining".into());
        form.set_field(SurveyField::Message, "Large site".into());
        assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
        for field in SurveyField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_submit_blocked_on_missing_required_field() {
        // 必須項目が欠けていると送信はブロックされ、値は保持される。
        let mut form = filled_form();
        form.set_field(SurveyField::Email, "".into());
        let outcome = form.submit();
        match outcome {
            SubmitOutcome::Blocked { reason } => assert!(reason.contains("Email")),
            SubmitOutcome::Accepted { .. } => panic!("submit should be blocked"),
        }
        assert_eq!(form.value(SurveyField::Name), "Jane Doe");
    }

    #[test]
    fn test_submit_blocked_on_invalid_email() {
        // '@'を含まないメールアドレスはブロックされる。
        let mut form = filled_form();
        form.set_field(SurveyField::Email, "not-an-address".into());
        assert!(matches!(form.submit(), SubmitOutcome::Blocked { .. }));
    }

    #[test]
    fn test_optional_fields_do_not_block_submit() {
        // company/phone/messageは空のままでも受理される。
        let mut form = filled_form();
        assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.com"));
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("ab.com"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a b@c.com"));
    }

    #[test]
    fn test_field_keys_match_fixed_set() {
        // キー名は固定集合と一致する。
        let keys: Vec<&str> = SurveyField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["name", "company", "email", "phone", "projectType", "location", "message"]
        );
    }
}
