use super::*;

#[test]
fn opening_a_missing_port_fails() {
    assert!(SerialConnection::open("/dev/zport-test-does-not-exist", 9600, false).is_err());
}

#[test]
fn port_info_carries_path_and_description() {
    let info = PortInfo {
        path: "/dev/ttyUSB0".to_string(),
        description: "USB Serial".to_string(),
    };
    assert_eq!(info.path, "/dev/ttyUSB0");
    assert_eq!(info.description, "USB Serial");
}
