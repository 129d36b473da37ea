//! キー入力ハンドラー関数。

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    content,
    events::Screen,
    form::{SubmitOutcome, SurveyField},
    input::InputBoxState,
    shortcuts,
};

use super::{App, render};

/// キー入力を1件処理し、終了すべきならtrueを返す。
pub fn handle_key(app: &mut App, k: KeyEvent) -> Result<bool> {
    // 入力ボックスが開いていれば最優先で処理する。
    if app.input_box.is_some() {
        return handle_input_box_key(app, k);
    }

    // 画面ごとのハンドラへ委譲する。
    match app.ui.screen {
        Screen::Home => handle_home_key(app, k),
        Screen::Site => handle_site_key(app, k),
    }
}

/// Ctrl+Cかどうかを判定する。
pub fn is_ctrl_c(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c')
}

/// ホーム画面のキー処理。
fn handle_home_key(app: &mut App, k: KeyEvent) -> Result<bool> {
    // ホーム画面のショートカットを参照する。
    let sc = &app.shortcuts.home;

    if shortcuts::matches_shortcut(&k, &sc.quit) {
        return Ok(true);
    } else if shortcuts::matches_shortcut(&k, &sc.enter_site) {
        // サイト画面へ遷移する。唯一のナビゲーションリンク。
        tracing::info!("entering site page");
        app.ui.screen = Screen::Site;
        app.ui.status = "Exploration Technologies".into();
    }

    Ok(false)
}

/// サイト画面のキー処理。
fn handle_site_key(app: &mut App, k: KeyEvent) -> Result<bool> {
    // サイト画面のショートカットを参照する。
    let sc = &app.shortcuts.site;

    if shortcuts::matches_shortcut(&k, &sc.quit) {
        return Ok(true);
    } else if shortcuts::matches_shortcut(&k, &sc.back_home) {
        // 外部ルーティング相当のコールバック：ホーム画面へ戻す。
        app.ui.screen = Screen::Home;
        app.ui.status = "Ready".into();
    } else if shortcuts::matches_shortcut(&k, &sc.parent_site) {
        // 親会社サイトは外部のブラウザへ委譲する。
        open_parent_site(app);
    } else if shortcuts::matches_shortcut(&k, &sc.down) {
        scroll_page(app, 1);
    } else if shortcuts::matches_shortcut(&k, &sc.up) {
        scroll_page(app, -1);
    } else if shortcuts::matches_shortcut(&k, &sc.page_down) {
        scroll_page(app, 10);
    } else if shortcuts::matches_shortcut(&k, &sc.page_up) {
        scroll_page(app, -10);
    } else if shortcuts::matches_shortcut(&k, &sc.hero) {
        navigate_to(app, "hero");
    } else if shortcuts::matches_shortcut(&k, &sc.technology) {
        navigate_to(app, "technology");
    } else if shortcuts::matches_shortcut(&k, &sc.capabilities) {
        navigate_to(app, "capabilities");
    } else if shortcuts::matches_shortcut(&k, &sc.applications) {
        navigate_to(app, "applications");
    } else if shortcuts::matches_shortcut(&k, &sc.results) {
        navigate_to(app, "results");
    } else if shortcuts::matches_shortcut(&k, &sc.contact) {
        navigate_to(app, "contact");
    } else if shortcuts::matches_shortcut(&k, &sc.layer_next) {
        // 技術レイヤーの選択を進める。
        app.layers.next();
    } else if shortcuts::matches_shortcut(&k, &sc.layer_prev) {
        app.layers.prev();
    } else if shortcuts::matches_shortcut(&k, &sc.app_next) {
        // 用途タブの選択を進める。
        app.applications.next();
    } else if shortcuts::matches_shortcut(&k, &sc.app_prev) {
        app.applications.prev();
    } else {
        // サイト用キーでなければフォーム用キーとして処理する。
        return handle_form_key(app, k);
    }

    Ok(false)
}

/// 調査依頼フォームのキー処理。
fn handle_form_key(app: &mut App, k: KeyEvent) -> Result<bool> {
    // フォーム用のショートカットを参照する。
    let sc = &app.shortcuts.form;

    if shortcuts::matches_shortcut(&k, &sc.next_field) {
        // 次の編集フィールドへ移動する。
        app.ui.editing_field_idx = (app.ui.editing_field_idx + 1) % SurveyField::ALL.len();
    } else if shortcuts::matches_shortcut(&k, &sc.edit_field) {
        // 現在の編集対象フィールドの入力ボックスを開く。
        let field = SurveyField::ALL[app.ui.editing_field_idx];
        app.input_box = Some(InputBoxState::open(field, app.form.value(field)));
    } else if shortcuts::matches_shortcut(&k, &sc.project_type) {
        // プロジェクト種別を選択肢の中で循環させる。
        cycle_project_type(app);
    } else if shortcuts::matches_shortcut(&k, &sc.submit) {
        submit_form(app);
    }

    Ok(false)
}

/// 入力ボックスのキー処理。
fn handle_input_box_key(app: &mut App, k: KeyEvent) -> Result<bool> {
    // 入力ボックスが無ければ何もしない。
    let Some(input_state) = &mut app.input_box else {
        return Ok(false);
    };

    // 入力ボックス用ショートカットを参照する。
    let sc = &app.shortcuts.input_box;

    if shortcuts::matches_shortcut(&k, &sc.confirm) {
        // 入力ボックスを閉じる前に値と対象フィールドを取り出す。
        let value = input_state.value.clone();
        let field = input_state.target;
        app.input_box = None;

        // フォームの該当フィールドへ値を反映する。
        app.form.set_field(field, value);
    } else if shortcuts::matches_shortcut(&k, &sc.cancel) {
        // 入力を破棄して入力ボックスを閉じる。
        app.input_box = None;
    } else if shortcuts::matches_shortcut(&k, &sc.backspace) {
        input_state.backspace();
    } else if shortcuts::matches_shortcut(&k, &sc.delete) {
        input_state.delete();
    } else if shortcuts::matches_shortcut(&k, &sc.left) {
        input_state.move_left();
    } else if shortcuts::matches_shortcut(&k, &sc.right) {
        input_state.move_right();
    } else if shortcuts::matches_shortcut(&k, &sc.home) {
        input_state.move_home();
    } else if shortcuts::matches_shortcut(&k, &sc.end) {
        input_state.move_end();
    } else if shortcuts::matches_shortcut(&k, &sc.clear_line) {
        input_state.clear_line();
    } else if let KeyCode::Char(c) = k.code {
        // 通常の文字入力を処理する。
        if !k.modifiers.contains(KeyModifiers::CONTROL) {
            input_state.insert_char(c);
        }
    }

    Ok(false)
}

/// 指定セクションへナビゲートする。
///
/// IDの記録は無条件に行われ、ページ上に該当セクションがあれば
/// スクロール位置がその先頭へ移る。
fn navigate_to(app: &mut App, section_id: &str) {
    // 現在の状態からセクションレジストリを組み立てる。
    let page = render::build_page(app);
    app.nav.navigate(section_id, &page.offsets);
}

/// ページを相対スクロールする。
fn scroll_page(app: &mut App, delta: i32) {
    // ページ全長を上限としてスクロール位置を動かす。
    let total = render::build_page(app).lines.len() as u16;
    app.nav.scroll_by(delta, total.saturating_sub(1));
}

/// プロジェクト種別を次の選択肢へ進める。
fn cycle_project_type(app: &mut App) {
    let current = app.form.value(SurveyField::ProjectType);
    let next = match content::PROJECT_TYPES.iter().position(|t| *t == current) {
        Some(i) => content::PROJECT_TYPES[(i + 1) % content::PROJECT_TYPES.len()],
        None => content::PROJECT_TYPES[0],
    };
    app.form.set_field(SurveyField::ProjectType, next.to_string());
}

/// フォームの送信を試み、結果をステータスへ反映する。
fn submit_form(app: &mut App) {
    match app.form.submit() {
        SubmitOutcome::Accepted { reference } => {
            // 受理：確認メッセージを表示し、編集位置を先頭へ戻す。
            let now = chrono::Local::now();
            tracing::info!("survey request accepted (ref {reference})");
            app.ui.error = None;
            app.ui.editing_field_idx = 0;
            app.ui.status = format!(
                "Survey request submitted! Our team will contact you within 24 hours. (ref {reference}, {})",
                now.format("%Y-%m-%d %H:%M")
            );
        }
        SubmitOutcome::Blocked { reason } => {
            // ブロック：理由をエラーとして強調表示する。
            tracing::warn!("survey request blocked: {reason}");
            app.ui.error = Some(reason);
        }
    }
}

/// 親会社サイトを既定ブラウザで開く。失敗はログに残すだけにする。
fn open_parent_site(app: &mut App) {
    let url = app.cfg.company.parent_site_url.clone();
    match webbrowser::open(&url) {
        Ok(()) => {
            app.ui.status = format!("Opening {url}");
        }
        Err(e) => {
            // TUI環境ではブラウザが無いこともある。致命的ではない。
            tracing::warn!("failed to open parent site: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, shortcuts::Shortcuts};

    /// 既定設定でサイト画面にいるAppを作る。
    fn site_app() -> App {
        let mut app = App::new(Config::default(), Shortcuts::default());
        app.ui.screen = Screen::Site;
        app
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    #[test]
    fn test_section_keys_record_and_scroll() {
        // セクションキーは記録とスクロールの両方を更新する。
        let mut app = site_app();
        handle_key(&mut app, key('6')).unwrap();
        assert_eq!(app.nav.active_section, "contact");
        assert!(app.nav.scroll > 0);
    }

    #[test]
    fn test_layer_keys_change_active_layer() {
        // Left/Right相当のキーでレイヤー選択が動く。
        let mut app = site_app();
        handle_key(&mut app, key('l')).unwrap();
        assert_eq!(app.layers.active(), 1);
        handle_key(&mut app, key('h')).unwrap();
        assert_eq!(app.layers.active(), 0);
    }

    #[test]
    fn test_tab_cycles_form_fields() {
        // Tabで編集対象フィールドが循環する。
        let mut app = site_app();
        for _ in 0..SurveyField::ALL.len() {
            handle_key(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::empty())).unwrap();
        }
        assert_eq!(app.ui.editing_field_idx, 0);
    }

    #[test]
    fn test_edit_key_opens_input_box_for_current_field() {
        // eキーで現在フィールドの入力ボックスが開く。
        let mut app = site_app();
        handle_key(&mut app, key('e')).unwrap();
        let input = app.input_box.as_ref().expect("input box should open");
        assert_eq!(input.target, SurveyField::Name);
    }

    #[test]
    fn test_input_box_confirm_applies_value_to_form() {
        // 入力確定でフォームの該当フィールドだけが更新される。
        let mut app = site_app();
        handle_key(&mut app, key('e')).unwrap();
        for c in "Jane".chars() {
            handle_key(&mut app, key(c)).unwrap();
        }
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())).unwrap();
        assert!(app.input_box.is_none());
        assert_eq!(app.form.value(SurveyField::Name), "Jane");
        assert_eq!(app.form.value(SurveyField::Company), "");
    }

    #[test]
    fn test_input_box_cancel_discards_value() {
        // ESCで入力を破棄するとフォームは変化しない。
        let mut app = site_app();
        handle_key(&mut app, key('e')).unwrap();
        handle_key(&mut app, key('X')).unwrap();
        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())).unwrap();
        assert!(app.input_box.is_none());
        assert_eq!(app.form.value(SurveyField::Name), "");
    }

    #[test]
    fn test_project_type_key_cycles_options() {
        // pキーで種別が選択肢の順に循環する。
        let mut app = site_app();
        handle_key(&mut app, key('p')).unwrap();
        assert_eq!(app.form.value(SurveyField::ProjectType), content::PROJECT_TYPES[0]);
        handle_key(&mut app, key('p')).unwrap();
        assert_eq!(app.form.value(SurveyField::ProjectType), content::PROJECT_TYPES[1]);
    }

    #[test]
    fn test_submit_with_empty_form_sets_error() {
        // 必須項目が空のままの送信はエラー表示になる。
        let mut app = site_app();
        handle_key(&mut app, key('s')).unwrap();
        assert!(app.ui.error.is_some());
    }

    #[test]
    fn test_submit_with_filled_form_acknowledges_and_resets() {
        // 必須項目を満たした送信は確認メッセージと全リセットを行う。
        let mut app = site_app();
        app.form.set_field(SurveyField::Name, "Jane".into());
        app.form.set_field(SurveyField::Email, "jane@example.com".into());
        app.form.set_field(SurveyField::ProjectType, "Other".into());
        app.form.set_field(SurveyField::Location, "Nevada".into());
        handle_key(&mut app, key('s')).unwrap();
        assert!(app.ui.error.is_none());
        assert!(app.ui.status.contains("Survey request submitted"));
        for field in SurveyField::ALL {
            assert_eq!(app.form.value(field), "");
        }
    }

    #[test]
    fn test_home_and_site_transitions() {
        // ホームの入場リンクとサイトからの戻りを検証する。
        let mut app = App::new(Config::default(), Shortcuts::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())).unwrap();
        assert_eq!(app.ui.screen, Screen::Site);
        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())).unwrap();
        assert_eq!(app.ui.screen, Screen::Home);
    }

    #[test]
    fn test_quit_keys_request_exit() {
        // qは両画面で終了を要求する。
        let mut app = App::new(Config::default(), Shortcuts::default());
        assert!(handle_key(&mut app, key('q')).unwrap());
        let mut app = site_app();
        assert!(handle_key(&mut app, key('q')).unwrap());
    }

    #[test]
    fn test_scroll_keys_stay_in_bounds() {
        // 先頭より上へはスクロールしない。
        let mut app = site_app();
        handle_key(&mut app, key('k')).unwrap();
        assert_eq!(app.nav.scroll, 0);
        handle_key(&mut app, key('j')).unwrap();
        assert_eq!(app.nav.scroll, 1);
    }
}
