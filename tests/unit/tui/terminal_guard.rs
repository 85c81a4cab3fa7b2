use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingModes {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalModes for RecordingModes {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingModes;

impl TerminalModes for FailingModes {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
    }

    fn leave(&self) -> io::Result<()> {
        panic!("leave must not run when enter failed");
    }
}

#[test]
fn guard_leaves_terminal_on_drop() {
    let modes = Arc::new(RecordingModes::default());
    {
        let _guard = TerminalGuard::with_modes(modes.clone()).unwrap();
    }

    assert_eq!(&*modes.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restore_handle_runs_once() {
    let modes = Arc::new(RecordingModes::default());
    let guard = TerminalGuard::with_modes(modes.clone()).unwrap();
    let handle = guard.restore_handle();

    handle.restore().unwrap();
    handle.restore().unwrap();
    drop(guard);

    assert_eq!(&*modes.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_returns_error() {
    assert!(TerminalGuard::with_modes(Arc::new(FailingModes)).is_err());
}

#[test]
fn signal_exit_codes() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
