use super::*;

#[test]
fn uppercase_char_normalizes_to_shift() {
    let event = KeyEvent {
        code: KeyCode::Char('A'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    };
    let key = Key::from(event);
    assert_eq!(key.code, KeyCode::Char('a'));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn lowercase_char_unchanged() {
    let event = KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
    };
    assert_eq!(Key::from(event), Key::simple(KeyCode::Char('x')));
}

#[test]
fn modifier_flags_combine() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::ALT));
    assert!(!mods.contains(KeyModifiers::SHIFT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn ctrl_helper_matches_converted_event() {
    let event = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
    };
    assert_eq!(Key::from(event), Key::ctrl(KeyCode::Char('c')));
}
