use super::*;
use crate::core::event::InputEvent;

#[test]
fn char_keys_convert() {
    let event = crossterm::event::Event::Key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('q'),
        crossterm::event::KeyModifiers::NONE,
    ));
    let Some(InputEvent::Key(key)) = into_input_event(event) else {
        panic!("expected a key event");
    };
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.is_empty());
    assert_eq!(key.kind, KeyEventKind::Press);
}

#[test]
fn modifiers_carry_over() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Enter,
        crossterm::event::KeyModifiers::CONTROL | crossterm::event::KeyModifiers::SHIFT,
    );
    let key = into_key_event(event);
    assert_eq!(key.code, KeyCode::Enter);
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    assert!(!key.modifiers.contains(KeyModifiers::ALT));
}

#[test]
fn navigation_keys_convert() {
    for (ct, ours) in [
        (crossterm::event::KeyCode::Up, KeyCode::Up),
        (crossterm::event::KeyCode::Down, KeyCode::Down),
        (crossterm::event::KeyCode::Left, KeyCode::Left),
        (crossterm::event::KeyCode::Right, KeyCode::Right),
        (crossterm::event::KeyCode::Esc, KeyCode::Esc),
        (crossterm::event::KeyCode::Backspace, KeyCode::Backspace),
    ] {
        let key = into_key_event(crossterm::event::KeyEvent::new(
            ct,
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(key.code, ours);
    }
}

#[test]
fn resize_converts() {
    let event = crossterm::event::Event::Resize(120, 40);
    assert!(matches!(
        into_input_event(event),
        Some(InputEvent::Resize(120, 40))
    ));
}

#[test]
fn mouse_events_are_dropped() {
    let event = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });
    assert!(into_input_event(event).is_none());
}

#[test]
fn null_key_becomes_ctrl_space() {
    let key = into_key_event(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    ));
    assert_eq!(key.code, KeyCode::Char(' '));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
}
