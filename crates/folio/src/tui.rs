//! Terminal session: alternate screen, raw mode, mouse capture, and the
//! cleanup that must run however the program exits.

use std::io::{Stdout, Write, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::debug;

pub type Backend = CrosstermBackend<Stdout>;

/// Owns the terminal for the lifetime of the page.
pub struct Tui {
    terminal: Terminal<Backend>,
    active: bool,
    /// Whether modifier reporting was pushed and must be popped on exit.
    enhanced_keys: bool,
}

impl Tui {
    /// Open the backend without touching terminal modes.
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            active: false,
            enhanced_keys: false,
        })
    }

    /// Switch to the alternate screen with raw input and mouse reporting.
    ///
    /// Where the terminal supports it, modifier disambiguation is enabled
    /// too so Alt+Enter reaches the message field as its own key.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        debug!(enhanced_keys = self.enhanced_keys, "terminal session started");

        self.terminal.clear()?;
        self.active = true;
        Ok(())
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn exit(&mut self) {
        if !self.active {
            return;
        }
        if self.enhanced_keys {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        restore();
        self.active = false;
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Current (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.exit();
    }
}

/// Leave the alternate screen and raw mode, ignoring individual failures.
fn restore() {
    let mut out = stdout();
    let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}

/// Route panics and eyre reports through a terminal restore first.
///
/// Call before [`Tui::enter`] so a panic during setup still leaves a usable
/// shell behind.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .panic_section("folio crashed; the log file may have more detail")
        .into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        panic_hook(info);
    }));
    Ok(())
}
