//! Keyboard handling for the news list.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::AppState;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// What: Handle one terminal event.
///
/// Inputs:
/// - `ev`: Event read from the terminal.
/// - `app`: Mutable application state.
/// - `refresh_tx`: Channel used to request a new fetch.
///
/// Output:
/// - `true` when the application should exit; `false` otherwise.
///
/// Details:
/// - Only key presses are handled; releases, repeats, mouse, and resize events are ignored
///   (a resize is picked up by the next draw).
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    refresh_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    handle_key(ke, app, refresh_tx)
}

/// Dispatch a key press; returns `true` to exit.
fn handle_key(ke: KeyEvent, app: &mut AppState, refresh_tx: &mpsc::UnboundedSender<()>) -> bool {
    match (ke.code, ke.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => return true,
        (KeyCode::Char('q') | KeyCode::Esc, _) => return true,
        (KeyCode::Down | KeyCode::Char('j'), _) => app.move_selection(1),
        (KeyCode::Up | KeyCode::Char('k'), _) => app.move_selection(-1),
        (KeyCode::PageDown, _) => app.move_selection(PAGE_STEP),
        (KeyCode::PageUp, _) => app.move_selection(-PAGE_STEP),
        (KeyCode::Home | KeyCode::Char('g'), _) => app.select_first(),
        (KeyCode::End | KeyCode::Char('G'), _) => app.select_last(),
        (KeyCode::Enter | KeyCode::Char('o'), _) => {
            if let Some(item) = app.selected_item() {
                crate::util::open_url(item.url());
            }
        }
        (KeyCode::Char('r'), _) => {
            if refresh_tx.send(()).is_err() {
                tracing::warn!("refresh worker is gone");
            }
        }
        _ => {}
    }
    false
}
