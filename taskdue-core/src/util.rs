use crate::constants::FAKE_PTY;

/// Checks if stdout is a TTY. `TASKDUE_FAKE_PTY` forces table output through
/// a pipe, which the integration tests rely on.
pub fn stdout_is_tty() -> bool {
    *FAKE_PTY || termion::is_tty(&std::io::stdout())
}
