use super::*;

#[test]
fn new_session_picks_settings_defaults() {
    let mut settings = Settings::default();
    settings.default_baud = 19_200;
    settings.show_timestamps = true;

    let session = Session::new(settings);
    assert_eq!(session.baud, 19_200);
    assert!(session.show_time);
    assert!(!session.custom_baud);
    assert!(!session.quit);
    assert!(!session.connected());
    assert!(session.selected_port.is_empty());
}

#[test]
fn send_without_connection_is_an_error() {
    let mut session = Session::new(Settings::default());
    let err = session.send("hi").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotConnected);
}

#[test]
fn connect_to_missing_port_fails_cleanly() {
    let mut session = Session::new(Settings::default());
    session.selected_port = "/dev/zport-test-does-not-exist".to_string();
    assert!(session.connect().is_err());
    assert!(!session.connected());
}

#[test]
fn drain_without_connection_leaves_buffer_alone() {
    let session = Session::new(Settings::default());
    let mut out = "existing".to_string();
    session.drain_into(&mut out);
    assert_eq!(out, "existing");
}

#[test]
fn disconnect_is_idempotent() {
    let mut session = Session::new(Settings::default());
    session.disconnect();
    session.disconnect();
    assert!(!session.connected());
}
