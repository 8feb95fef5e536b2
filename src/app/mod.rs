//! Application wiring: session + document + pages, and the input/render loop.

pub mod pages;
pub mod session;

pub use session::Session;

use crate::core::event::{InputEvent, Key, KeyCode, KeyEventKind};
use crate::dom::style::Theme;
use crate::dom::Document;
use crate::services::settings::Settings;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;

pub struct App {
    doc: Document<Session>,
    session: Session,
    painter: Painter,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut session = Session::new(settings);
        let mut doc = Document::new(Theme::default());
        pages::register_pages(&mut doc, &session.settings);
        if let Err(err) = doc.navigate_home(&mut session) {
            doc.set_status(err.to_string());
        }
        Self {
            doc,
            session,
            painter: Painter::new(),
        }
    }

    pub fn document(&self) -> &Document<Session> {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document<Session> {
        &mut self.doc
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.session.quit
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        let InputEvent::Key(key) = event else {
            return;
        };
        if key.kind == KeyEventKind::Release {
            return;
        }
        // Raw mode swallows the interrupt key; honor it here.
        if Key::from(*key) == Key::ctrl(KeyCode::Char('c')) {
            self.session.quit = true;
            return;
        }
        self.doc.handle_key(*key, &mut self.session);
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.painter.clear();
        self.doc
            .render(&mut self.session, (area.h, area.w), &mut self.painter);
        backend.draw(area, self.painter.cmds());
    }
}

/// Bootstrap the terminal and run the input/render loop until quit.
///
/// Each iteration handles at most one pending input event, then repaints, so
/// a tick never blocks past the poll interval.
#[cfg(feature = "tui")]
pub fn run() -> std::io::Result<()> {
    use std::io;
    use std::time::Duration;

    use crate::services::settings;
    use crate::tui::crossterm::into_input_event;
    use crate::tui::terminal_guard::TerminalGuard;
    use crate::ui::backend::terminal::RatatuiTerminal;

    let loaded = settings::ensure_settings_file()
        .ok()
        .and_then(|_| settings::load_settings())
        .unwrap_or_default();
    let tick = Duration::from_millis(loaded.tick_ms.max(1));

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let (signal_rx, _signal_thread) = {
        let (tx, rx) = std::sync::mpsc::channel();
        let thread =
            crate::tui::terminal_guard::install_termination_signals(guard.restorer(), tx)?;
        (rx, thread)
    };

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut app = App::new(loaded);

    loop {
        #[cfg(unix)]
        if let Ok(signal) = signal_rx.try_recv() {
            guard.restorer().restore()?;
            std::process::exit(signal.exit_code());
        }

        if crossterm::event::poll(tick)? {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                app.handle_input(&event);
            }
        }
        if app.should_quit() {
            break;
        }
        terminal.draw(|backend, area| app.render(backend, area))?;
    }

    Ok(())
}
