use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hemikey::input::{
    KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP, KEY_BACKSPACE, KEY_DELETE,
    KEY_ENTER,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InputEvent {
    /// Key identifier understood by the keyboard adapter.
    Key(&'static str),
    /// Terminal resized; redraw only.
    Redraw,
    Exit,
}

/// Translate a crossterm event into a host input. Unbound keys are dropped here.
pub(crate) fn map_terminal_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(_, _) => Some(InputEvent::Redraw),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(InputEvent::Exit);
    }
    let name = match key.code {
        KeyCode::Esc => return Some(InputEvent::Exit),
        KeyCode::Up => KEY_ARROW_UP,
        KeyCode::Down => KEY_ARROW_DOWN,
        KeyCode::Left => KEY_ARROW_LEFT,
        KeyCode::Right => KEY_ARROW_RIGHT,
        KeyCode::Enter => KEY_ENTER,
        KeyCode::Backspace => KEY_BACKSPACE,
        KeyCode::Delete => KEY_DELETE,
        _ => return None,
    };
    Some(InputEvent::Key(name))
}
