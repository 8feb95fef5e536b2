use super::*;
use crate::app::App;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::dom::style::Theme;

fn press(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    })
}

fn app() -> App {
    App::new(Settings::default())
}

fn settings_doc() -> (Document<Session>, Session) {
    let settings = Settings::default();
    let mut session = Session::new(settings.clone());
    let mut doc = Document::new(Theme::default());
    register_pages(&mut doc, &settings);
    doc.navigate(SETTINGS_URL, &mut session).unwrap();
    (doc, session)
}

#[test]
fn startup_lands_on_home() {
    let app = app();
    assert_eq!(
        app.document().active_page().map(|p| p.url.as_str()),
        Some(HOME_URL)
    );
    assert!(!app.should_quit());
}

#[test]
fn home_focuses_the_port_link_first() {
    let app = app();
    let page = app.document().active_page().unwrap();
    let focused = page.focused_element().unwrap();
    assert_eq!(focused.link_target(), Some(PORTS_URL));
}

#[test]
fn quit_control_sets_the_flag() {
    let mut app = app();
    app.handle_input(&press(KeyCode::Down)); // Quit
    app.handle_input(&press(KeyCode::Enter));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits() {
    let mut app = app();
    app.handle_input(&InputEvent::Key(KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
    }));
    assert!(app.should_quit());
}

#[test]
fn key_release_events_are_ignored() {
    let mut app = app();
    app.handle_input(&InputEvent::Key(KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
    }));
    let page = app.document().active_page().unwrap();
    assert_eq!(page.focused_element().unwrap().link_target(), Some(PORTS_URL));
}

#[test]
fn settings_page_starts_with_dropdown_visible() {
    let (doc, _session) = settings_doc();
    let page = doc.active_page().unwrap();
    assert!(!page.element_by_id("baudrate-custom").unwrap().style.visible);
    assert!(page.element_by_id("baudrate").unwrap().style.visible);

    // First focus skips the hidden input and lands on the dropdown.
    assert_eq!(page.focused(), page.position_by_id("baudrate"));
}

#[test]
fn custom_baud_checkbox_swaps_the_fields() {
    let (mut doc, mut session) = settings_doc();

    // Move focus from the dropdown to the checkbox and toggle it.
    doc.handle_key(key(KeyCode::Down), &mut session);
    doc.handle_key(key(KeyCode::Enter), &mut session);

    let page = doc.active_page().unwrap();
    assert!(session.custom_baud);
    assert!(page.element_by_id("baudrate-custom").unwrap().style.visible);
    assert!(!page.element_by_id("baudrate").unwrap().style.visible);
    assert!(page
        .element_by_id("custom-baud")
        .and_then(|e| e.as_checkbox())
        .unwrap()
        .checked);

    // Toggling back restores the dropdown.
    doc.handle_key(key(KeyCode::Enter), &mut session);
    let page = doc.active_page().unwrap();
    assert!(!session.custom_baud);
    assert!(!page.element_by_id("baudrate-custom").unwrap().style.visible);
    assert!(page.element_by_id("baudrate").unwrap().style.visible);
}

fn key(code: KeyCode) -> crate::core::event::KeyEvent {
    crate::core::event::KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    }
}

#[test]
fn connect_applies_dropdown_choice_and_reaches_console() {
    let (mut doc, mut session) = settings_doc();

    // Step the dropdown from 9600 up to 38400.
    doc.handle_key(key(KeyCode::Enter), &mut session); // edit mode
    doc.handle_key(key(KeyCode::Up), &mut session); // 19200
    doc.handle_key(key(KeyCode::Up), &mut session); // 38400
    doc.handle_key(key(KeyCode::Esc), &mut session);

    // Walk to the Connect link and follow it.
    for _ in 0..3 {
        doc.handle_key(key(KeyCode::Down), &mut session);
    }
    doc.handle_key(key(KeyCode::Enter), &mut session);

    assert_eq!(
        doc.active_page().map(|p| p.url.as_str()),
        Some(CONSOLE_URL)
    );
    assert_eq!(session.baud, 38_400);

    // No real port is selected, so the console reports the failure instead
    // of crashing.
    let output = doc
        .active_page()
        .unwrap()
        .element_by_id("serial-data")
        .unwrap()
        .text
        .clone();
    assert!(output.starts_with("Failed to open"), "{output}");
}

#[test]
fn connect_prefers_custom_baud_when_toggled() {
    let (mut doc, mut session) = settings_doc();

    // Toggle the custom field on and type a rate into it.
    doc.handle_key(key(KeyCode::Down), &mut session);
    doc.handle_key(key(KeyCode::Enter), &mut session);
    let page = doc.active_page_mut().unwrap();
    page.element_by_id_mut("baudrate-custom")
        .and_then(|e| e.as_input_mut())
        .unwrap()
        .value = "250000".to_string();

    // Walk to Connect: checkbox -> show-time -> connect.
    doc.handle_key(key(KeyCode::Down), &mut session);
    doc.handle_key(key(KeyCode::Down), &mut session);
    doc.handle_key(key(KeyCode::Enter), &mut session);

    assert_eq!(session.baud, 250_000);
}

#[test]
fn unparsable_custom_baud_falls_back_to_default() {
    let (mut doc, mut session) = settings_doc();
    session.custom_baud = true;
    let page = doc.active_page_mut().unwrap();
    page.element_by_id_mut("baudrate-custom")
        .and_then(|e| e.as_input_mut())
        .unwrap()
        .value = "not-a-number".to_string();

    let link_index = page
        .elements
        .iter()
        .position(|e| e.link_target() == Some(CONSOLE_URL))
        .unwrap();
    apply_settings(doc.active_page_mut().unwrap(), link_index, &mut session);
    assert_eq!(session.baud, Settings::default().default_baud);
}

#[test]
fn show_time_checkbox_feeds_the_session() {
    let (mut doc, mut session) = settings_doc();
    let page = doc.active_page_mut().unwrap();
    if let Some(state) = page
        .element_by_id_mut("show-time")
        .and_then(|e| e.as_checkbox_mut())
    {
        state.checked = true;
    }
    let link_index = page
        .elements
        .iter()
        .position(|e| e.link_target() == Some(CONSOLE_URL))
        .unwrap();
    apply_settings(doc.active_page_mut().unwrap(), link_index, &mut session);
    assert!(session.show_time);
}

#[test]
fn console_unmount_disconnects() {
    let (mut doc, mut session) = settings_doc();
    doc.navigate(CONSOLE_URL, &mut session).unwrap();
    assert!(!session.connected()); // the open failed, nothing to hold

    doc.navigate(HOME_URL, &mut session).unwrap();
    assert!(!session.connected());
}
