use std::io::{self, Write};

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::warn;

use crate::domain::change::ShortHash;
use crate::domain::keypress::Keypress;
use crate::error::{AppError, AppResult};
use crate::services::TerminalService;

pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }
}

/// Holds the terminal in raw mode until dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> AppResult<Self> {
        enable_raw_mode()
            .map_err(|err| AppError::Terminal(format!("failed to enable raw mode: {err}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "failed to restore terminal mode");
        }
    }
}

fn read_key_blocking() -> AppResult<Keypress> {
    let _raw = RawModeGuard::acquire()?;
    loop {
        let event = event::read()
            .map_err(|err| AppError::Terminal(format!("failed to read key: {err}")))?;
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return Ok(translate(key));
            }
        }
    }
}

fn translate(key: KeyEvent) -> Keypress {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Keypress::Interrupt,
        KeyCode::Enter => Keypress::Enter,
        KeyCode::Char(c) => Keypress::Char(c),
        _ => Keypress::Other,
    }
}

#[async_trait]
impl TerminalService for CrosstermTerminal {
    fn propose(&self, message: &str) -> AppResult<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;
        Ok(())
    }

    async fn read_keypress(&self) -> AppResult<Keypress> {
        tokio::task::spawn_blocking(read_key_blocking)
            .await
            .map_err(|err| AppError::Terminal(format!("key reader stopped: {err}")))?
    }

    fn end_line(&self) -> AppResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn report_commit(&self, hash: &ShortHash) -> AppResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", hash.as_str())?;
        stdout.flush()?;
        Ok(())
    }
}
