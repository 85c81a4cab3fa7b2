use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use unimart::app::Shell;
use unimart::core::{InputEvent, View};
use unimart::kernel::services::adapters::{load_settings, AppMessage, AsyncRuntime, BundledViewSource};
use unimart::kernel::{Location, TracingFaultSink};
use unimart::tui::terminal_guard::{TerminalGuard, TerminationSignal};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_MESSAGES_PER_TICK: usize = 64;

const USAGE: &str = "\
usage: unimart [PATH]

  PATH  page to open first, e.g. / or /new-product

keys: 1-5 sidebar, c create product, p profile, [ ] back/forward,
      r reload, / search, ctrl+b sidebar, q quit";

fn main() -> io::Result<()> {
    let path_arg = std::env::args().nth(1);
    if matches!(path_arg.as_deref(), Some("-h" | "--help")) {
        println!("{USAGE}");
        return Ok(());
    }

    let _logging = logging::init();
    let settings = load_settings();
    let initial = Location::new(path_arg.as_deref().unwrap_or(&settings.initial_path));

    let (tx, rx) = mpsc::channel();
    let source = Arc::new(BundledViewSource::new(settings.catalog_path.clone()));
    let runtime = AsyncRuntime::new(tx, source, settings.load_timeout())?;

    let guard = TerminalGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals =
        unimart::tui::terminal_guard::watch_termination_signals(guard.restore_handle(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut shell = Shell::new(&settings, initial, runtime, Arc::new(TracingFaultSink));

    let result = run(&mut terminal, &mut shell, &rx, &signal_rx);
    if let Err(e) = &result {
        tracing::error!(error = %e, "main loop failed");
    }

    drop(terminal);
    drop(guard);
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut Shell,
    rx: &Receiver<AppMessage>,
    signal_rx: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal received");
            return Ok(());
        }

        for msg in rx.try_iter().take(MAX_MESSAGES_PER_TICK) {
            dirty |= shell.handle_message(msg);
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                shell.render(frame, area);
                if let Some(position) = shell.cursor_position() {
                    frame.set_cursor_position(position);
                }
            })?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            let input = InputEvent::from(event::read()?);
            if shell.handle_input(&input).is_quit() {
                return Ok(());
            }
            dirty = true;
        }
    }
}
