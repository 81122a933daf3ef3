//! Terminal setup and restoration.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> Result<()> {
    enter_with_rollback(
        enable_raw_mode,
        || execute!(std::io::stdout(), EnterAlternateScreen),
        disable_raw_mode,
    )
}

/// What: Run the two setup steps, undoing the first when the second fails.
///
/// Inputs:
/// - `raw_on`: Switches raw mode on.
/// - `screen_on`: Switches to the alternate screen.
/// - `raw_off`: Switches raw mode back off.
///
/// Output:
/// - `Ok(())` when both steps succeed; the first error otherwise.
///
/// Details:
/// - A failing `raw_off` is logged; the `screen_on` error is the one returned.
fn enter_with_rollback(
    raw_on: impl FnOnce() -> std::io::Result<()>,
    screen_on: impl FnOnce() -> std::io::Result<()>,
    raw_off: impl FnOnce() -> std::io::Result<()>,
) -> Result<()> {
    raw_on()?;
    if let Err(e) = screen_on() {
        if let Err(undo) = raw_off() {
            tracing::warn!(error = %undo, "failed to leave raw mode after setup error");
        }
        return Err(e.into());
    }
    Ok(())
}

/// Leave the alternate screen and raw mode.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    /// What: A failing alternate-screen switch leaves raw mode again.
    ///
    /// Inputs:
    /// - `screen_on` returning an I/O error.
    ///
    /// Output:
    /// - Error returned and `raw_off` called once.
    fn screen_failure_turns_raw_mode_off() {
        let undone = Cell::new(0);
        let res = enter_with_rollback(
            || Ok(()),
            || Err(std::io::Error::other("no alternate screen")),
            || {
                undone.set(undone.get() + 1);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert_eq!(undone.get(), 1);
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let undone = Cell::new(false);
        let res = enter_with_rollback(
            || Ok(()),
            || Ok(()),
            || {
                undone.set(true);
                Ok(())
            },
        );
        assert!(res.is_ok());
        assert!(!undone.get());
    }

    #[test]
    fn raw_mode_failure_skips_the_rest() {
        let screen = Cell::new(false);
        let res = enter_with_rollback(
            || Err(std::io::Error::other("not a tty")),
            || {
                screen.set(true);
                Ok(())
            },
            || Ok(()),
        );
        assert!(res.is_err());
        assert!(!screen.get());
    }
}
