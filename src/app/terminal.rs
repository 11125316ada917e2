use std::{
    io::{self, Stdout},
    panic,
    sync::Once,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::debug;

/// The kiosk's hold on the terminal: raw mode, the alternate screen and the
/// key event source. Dropping it (or panicking) hands the shell back.
pub(crate) struct KioskTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl KioskTerminal {
    pub fn enter(tick_rate: Duration) -> Result<Self> {
        restore_on_panic();
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            leave_screen();
            return Err(err).context("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave_screen();
                return Err(err).context("failed to initialize terminal");
            }
        };
        debug!(?tick_rate, "kiosk took over the terminal");
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub fn render(&mut self, draw: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(draw).context("failed to draw frame")?;
        Ok(())
    }

    /// Waits at most one tick for a key press. Resizes are absorbed here.
    pub fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        if !event::poll(self.tick_rate).context("failed to poll terminal events")? {
            return Ok(None);
        }
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            Event::Resize(width, height) => {
                self.terminal
                    .resize(Rect::new(0, 0, width, height))
                    .context("failed to resize terminal")?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Drop for KioskTerminal {
    fn drop(&mut self) {
        leave_screen();
        debug!("kiosk released the terminal");
    }
}

fn restore_on_panic() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let chained = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            leave_screen();
            chained(info);
        }));
    });
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}
