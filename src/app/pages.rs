//! The four application pages and their hooks.
//!
//! Hooks are free functions over `(&mut Page, element index, &mut Session)`;
//! all cross-page state lives in the session.

use tracing::warn;

use crate::dom::style::{Align, ElementStyle, PageStyle};
use crate::dom::{Document, Element, Extent, Page};
use crate::serial;
use crate::services::settings::Settings;
use crate::ui::core::style::Mod;

use super::session::Session;

pub type AppPage = Page<Session>;

pub use crate::dom::document::HOME_URL;
pub const PORTS_URL: &str = "ports";
pub const SETTINGS_URL: &str = "settings";
pub const CONSOLE_URL: &str = "console";

pub fn register_pages(doc: &mut Document<Session>, settings: &Settings) {
    doc.register(vec![
        home_page(),
        ports_page(),
        settings_page(settings),
        console_page(),
    ]);
}

fn home_page() -> AppPage {
    Page::new(
        HOME_URL,
        "Serial TUI",
        (Extent::Fixed(10), Extent::Fixed(40)),
        vec![
            Element::text("Select an option").style(
                ElementStyle::default()
                    .align(Align::Center)
                    .weight(Mod::BOLD),
            ),
            Element::blank(),
            Element::link("Open serial port", PORTS_URL),
            Element::blank(),
            Element::blank(),
            Element::selectable("Quit").on_activate(quit),
        ],
    )
    .style(PageStyle::default().border(false))
    .stateful()
}

fn quit(_page: &mut AppPage, _index: usize, session: &mut Session) {
    session.quit = true;
}

/// Rebuilt on every visit; the mount hook fills in one link per port found.
fn ports_page() -> AppPage {
    Page::new(
        PORTS_URL,
        "Select a serial port",
        (Extent::Auto, Extent::Auto),
        Vec::new(),
    )
    .on_mount(load_ports)
}

fn load_ports(page: &mut AppPage, session: &mut Session) {
    let ports = serial::available_ports();
    if ports.is_empty() {
        page.add_element(Element::text("No serial ports found"), session);
        return;
    }
    for port in ports {
        let label = if port.description.is_empty() {
            port.path.clone()
        } else {
            format!("{} {}", port.path, port.description)
        };
        page.add_element(
            Element::link(label, SETTINGS_URL)
                .id(port.path)
                .on_activate(select_port),
            session,
        );
    }
}

fn select_port(page: &mut AppPage, index: usize, session: &mut Session) {
    session.selected_port = page.elements[index].id.clone();
}

fn settings_page(settings: &Settings) -> AppPage {
    let rates: Vec<String> = settings.baud_rates.iter().map(u32::to_string).collect();
    Page::new(
        SETTINGS_URL,
        "Settings",
        (Extent::Auto, Extent::Auto),
        vec![
            Element::text("Baud rate"),
            Element::input("", "", true)
                .id("baudrate-custom")
                .style(ElementStyle::default().indent(2).hidden()),
            Element::dropdown("", rates, settings.default_baud.to_string())
                .id("baudrate")
                .style(ElementStyle::default().indent(2)),
            Element::checkbox("Custom baud rate", false)
                .id("custom-baud")
                .on_activate(toggle_custom_baud),
            Element::checkbox("Show timestamps", settings.show_timestamps).id("show-time"),
            Element::link("Connect", CONSOLE_URL).on_activate(apply_settings),
        ],
    )
    .stateful()
}

/// Swap the dropdown for the free-form input (and back), and remember which
/// one the Connect link should read.
fn toggle_custom_baud(page: &mut AppPage, index: usize, session: &mut Session) {
    let mut checked = false;
    if let Some(state) = page.elements[index].as_checkbox_mut() {
        state.checked = !state.checked;
        checked = state.checked;
    }
    page.elements[index].update_text();

    for id in ["baudrate-custom", "baudrate"] {
        if let Some(elem) = page.element_by_id_mut(id) {
            elem.style.visible = !elem.style.visible;
        }
    }

    session.custom_baud = checked;
}

fn apply_settings(page: &mut AppPage, _index: usize, session: &mut Session) {
    let chosen = if session.custom_baud {
        page.element_by_id("baudrate-custom")
            .and_then(|e| e.as_input())
            .map(|s| s.value.clone())
    } else {
        page.element_by_id("baudrate")
            .and_then(|e| e.as_dropdown())
            .map(|s| s.value.clone())
    };

    session.baud = chosen
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(session.settings.default_baud);
    session.show_time = page
        .element_by_id("show-time")
        .and_then(|e| e.as_checkbox())
        .is_some_and(|c| c.checked);
}

fn console_page() -> AppPage {
    Page::new(
        CONSOLE_URL,
        "Serial console",
        (Extent::Inset(2), Extent::Inset(2)),
        vec![
            Element::input("λ", "", false).id("send-input"),
            Element::selectable("Send").id("send-button").on_activate(send_data),
            Element::rule('═'),
            Element::text("").id("serial-data").on_refresh(drain_serial),
        ],
    )
    .on_mount(connect_port)
    .on_unmount(disconnect_port)
}

fn connect_port(page: &mut AppPage, session: &mut Session) {
    match session.connect() {
        Ok(path) => page.title = path,
        Err(err) => {
            warn!(port = %session.selected_port, %err, "connect failed");
            if let Some(elem) = page.element_by_id_mut("serial-data") {
                elem.text = format!("Failed to open {}: {}", session.selected_port, err);
            }
        }
    }
}

fn disconnect_port(_page: &mut AppPage, session: &mut Session) {
    session.disconnect();
}

fn drain_serial(page: &mut AppPage, index: usize, session: &mut Session) {
    session.drain_into(&mut page.elements[index].text);
}

fn send_data(page: &mut AppPage, _index: usize, session: &mut Session) {
    let Some(value) = page
        .element_by_id("send-input")
        .and_then(|e| e.as_input())
        .map(|s| s.value.clone())
    else {
        return;
    };
    if value.is_empty() {
        return;
    }
    if let Err(err) = session.send(&value) {
        warn!(%err, "send failed");
        return;
    }
    if let Some(state) = page
        .element_by_id_mut("send-input")
        .and_then(|e| e.as_input_mut())
    {
        state.value.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/pages.rs"]
mod tests;
