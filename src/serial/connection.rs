use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::decode::Utf8Decoder;

const READ_TIMEOUT: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortInfo {
    /// System path, e.g. `/dev/ttyUSB0`.
    pub path: String,
    pub description: String,
}

/// Enumerate serial ports attached to the system.
pub fn available_ports() -> Vec<PortInfo> {
    let ports = match serialport::available_ports() {
        Ok(ports) => ports,
        Err(err) => {
            warn!(%err, "port enumeration failed");
            return Vec::new();
        }
    };

    ports
        .into_iter()
        .map(|p| {
            let description = match &p.port_type {
                serialport::SerialPortType::UsbPort(usb) => {
                    usb.product.clone().unwrap_or_default()
                }
                serialport::SerialPortType::PciPort => "PCI".to_string(),
                serialport::SerialPortType::BluetoothPort => "Bluetooth".to_string(),
                serialport::SerialPortType::Unknown => String::new(),
            };
            PortInfo {
                path: p.port_name,
                description,
            }
        })
        .collect()
}

/// An open serial port with a background reader.
///
/// The reader thread decodes inbound bytes and sends text chunks over a
/// channel; the UI drains the channel at paint time. Text only ever flows one
/// way, so a chunk may land mid-line across two frames but nothing is lost.
pub struct SerialConnection {
    port: Box<dyn serialport::SerialPort>,
    path: String,
    alive: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
    rx: Receiver<String>,
}

impl SerialConnection {
    /// Open `path` at `baud` and start the reader thread. With `timestamps`
    /// set, each received chunk is prefixed with the milliseconds elapsed
    /// since the connection opened, zero-padded to seven digits.
    pub fn open(path: &str, baud: u32, timestamps: bool) -> serialport::Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(READ_TIMEOUT)
            .open()?;
        let reader_port = port.try_clone()?;

        let alive = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel();
        let reader = std::thread::spawn({
            let alive = Arc::clone(&alive);
            move || read_loop(reader_port, alive, tx, timestamps)
        });

        info!(path, baud, "serial port opened");
        Ok(Self {
            port,
            path: path.to_string(),
            alive,
            reader: Some(reader),
            rx,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn send(&mut self, text: &str) -> io::Result<()> {
        self.port.write_all(text.as_bytes())
    }

    /// Append everything the reader has produced since the last drain.
    pub fn drain_into(&self, out: &mut String) {
        while let Ok(chunk) = self.rx.try_recv() {
            out.push_str(&chunk);
        }
    }

    /// Stop the reader and close the port.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
        info!(path = %self.path, "serial port closed");
    }
}

impl Drop for SerialConnection {
    fn drop(&mut self) {
        if self.reader.is_some() {
            self.shutdown();
        }
    }
}

fn read_loop(
    mut port: Box<dyn serialport::SerialPort>,
    alive: Arc<AtomicBool>,
    tx: Sender<String>,
    timestamps: bool,
) {
    let started = Instant::now();
    let mut decoder = Utf8Decoder::new();
    let mut buf = [0u8; 256];

    while alive.load(Ordering::Relaxed) {
        match port.read(&mut buf) {
            Ok(0) => {}
            Ok(n) => {
                let mut text = String::new();
                decoder.feed(&buf[..n], &mut text);
                if text.is_empty() {
                    continue;
                }
                let chunk = if timestamps {
                    format!("[{:07}] {}", started.elapsed().as_millis(), text)
                } else {
                    text
                };
                if tx.send(chunk).is_err() {
                    // Receiver gone; the page was torn down.
                    break;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::TimedOut => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                warn!(%err, "serial read failed");
                let _ = tx.send(format!("\n[read error: {err}]\n"));
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serial/connection.rs"]
mod tests;
