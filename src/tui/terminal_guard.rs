use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal mode switches, split out so tests can observe them.
pub trait TerminalModes: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermModes;

impl TerminalModes for CrosstermModes {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{
            event::{EnableBracketedPaste, EnableMouseCapture},
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{
            cursor::Show,
            event::{DisableBracketedPaste, DisableMouseCapture},
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Run every step even when an earlier one fails; report the first error.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        raw.and(screen)
    }
}

/// Cloneable handle that puts the terminal back exactly once.
#[derive(Clone)]
pub struct RestoreHandle {
    done: Arc<AtomicBool>,
    modes: Arc<dyn TerminalModes>,
}

impl RestoreHandle {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.modes.leave()
    }
}

pub struct TerminalGuard {
    handle: RestoreHandle,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::with_modes(Arc::new(CrosstermModes))
    }

    pub fn with_modes(modes: Arc<dyn TerminalModes>) -> io::Result<Self> {
        modes.enter()?;
        Ok(Self {
            handle: RestoreHandle {
                done: Arc::new(AtomicBool::new(false)),
                modes,
            },
        })
    }

    pub fn restore_handle(&self) -> RestoreHandle {
        self.handle.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.handle.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the main loop. If the loop has not exited
/// within the grace period, restores the terminal and exits the process.
#[cfg(unix)]
pub fn watch_termination_signals(
    handle: RestoreHandle,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    const GRACE: Duration = Duration::from_secs(2);

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(raw) = signals.forever().next() {
            let signal = if raw == SIGINT {
                TerminationSignal::Interrupt
            } else {
                TerminationSignal::Terminate
            };
            let _ = tx.send(signal);

            std::thread::sleep(GRACE);
            let _ = handle.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
