//! Serial-port driver: enumeration, connection lifecycle and byte decoding.

pub mod decode;

#[cfg(feature = "serial")]
pub mod connection;

#[cfg(feature = "serial")]
pub use connection::{available_ports, PortInfo, SerialConnection};
