use std::io;

use tracing::info;

use crate::serial::SerialConnection;
use crate::services::settings::Settings;

/// Application context threaded through every hook and dispatch: the chosen
/// connection parameters, the live connection, and the quit flag. This is the
/// only mutable state shared between pages.
pub struct Session {
    pub settings: Settings,
    /// System path picked on the port page.
    pub selected_port: String,
    pub baud: u32,
    /// Read the baud rate from the custom input instead of the dropdown.
    pub custom_baud: bool,
    /// Prefix received chunks with elapsed milliseconds.
    pub show_time: bool,
    pub quit: bool,
    connection: Option<SerialConnection>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let baud = settings.default_baud;
        let show_time = settings.show_timestamps;
        Self {
            settings,
            selected_port: String::new(),
            baud,
            custom_baud: false,
            show_time,
            quit: false,
            connection: None,
        }
    }

    pub fn connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Open the selected port with the chosen parameters. An already-open
    /// connection is closed first. Returns the port path on success.
    pub fn connect(&mut self) -> serialport::Result<String> {
        self.disconnect();
        let connection = SerialConnection::open(&self.selected_port, self.baud, self.show_time)?;
        let path = connection.path().to_string();
        self.connection = Some(connection);
        Ok(path)
    }

    pub fn disconnect(&mut self) {
        if let Some(connection) = self.connection.take() {
            info!(path = %connection.path(), "disconnecting");
            connection.close();
        }
    }

    pub fn send(&mut self, text: &str) -> io::Result<()> {
        match self.connection.as_mut() {
            Some(connection) => connection.send(text),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "not connected")),
        }
    }

    /// Append any text received since the last drain.
    pub fn drain_into(&self, out: &mut String) {
        if let Some(connection) = self.connection.as_ref() {
            connection.drain_into(out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
