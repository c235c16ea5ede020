//! Key bindings for the page view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hrconsole_lib::ActionKind;

use crate::presentation::Gesture;

/// What a key press asks for while browsing a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextPage,
    PreviousPage,
    /// Jump to the page at this index.
    GoTo(usize),
    Grid(Gesture),
    StartSearch,
    OpenFilters,
    /// Row action on the record under the cursor.
    Action(ActionKind),
    BulkDelete,
    ClearSelection,
    Help,
    /// Unbound character, possibly a toolbar hotkey.
    Hotkey(char),
}

/// Key that triggers a row action.
pub fn action_key(kind: &ActionKind) -> Option<char> {
    match kind {
        ActionKind::View => Some('v'),
        ActionKind::Edit => Some('e'),
        ActionKind::Delete => Some('x'),
        ActionKind::Approve => Some('y'),
        ActionKind::Reject => Some('r'),
        ActionKind::Generate => Some('g'),
        ActionKind::Download => Some('o'),
        ActionKind::Custom(_) => None,
    }
}

fn action_for(c: char) -> Option<ActionKind> {
    [
        ActionKind::View,
        ActionKind::Edit,
        ActionKind::Delete,
        ActionKind::Approve,
        ActionKind::Reject,
        ActionKind::Generate,
        ActionKind::Download,
    ]
    .into_iter()
    .find(|kind| action_key(kind) == Some(c))
}

/// Map a key press in browse mode to a command.
pub fn browse_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Tab => Command::NextPage,
        KeyCode::BackTab => Command::PreviousPage,
        KeyCode::Up => Command::Grid(Gesture::CursorUp),
        KeyCode::Down => Command::Grid(Gesture::CursorDown),
        KeyCode::Left | KeyCode::PageUp => Command::Grid(Gesture::PreviousPage),
        KeyCode::Right | KeyCode::PageDown => Command::Grid(Gesture::NextPage),
        KeyCode::Home => Command::Grid(Gesture::FirstPage),
        KeyCode::End => Command::Grid(Gesture::LastPage),
        KeyCode::Enter => Command::Action(ActionKind::View),
        KeyCode::Esc => Command::ClearSelection,
        KeyCode::Char(c) => match c {
            'q' => Command::Quit,
            '1'..='9' => Command::GoTo(c as usize - '1' as usize),
            'k' => Command::Grid(Gesture::CursorUp),
            'j' => Command::Grid(Gesture::CursorDown),
            'h' => Command::Grid(Gesture::PreviousPage),
            'l' => Command::Grid(Gesture::NextPage),
            '/' => Command::StartSearch,
            'f' => Command::OpenFilters,
            'c' => Command::Grid(Gesture::ClearFilters),
            '[' => Command::Grid(Gesture::FocusColumn(-1)),
            ']' => Command::Grid(Gesture::FocusColumn(1)),
            's' => Command::Grid(Gesture::SortFocused),
            '+' | '=' => Command::Grid(Gesture::PageSizeUp),
            '-' => Command::Grid(Gesture::PageSizeDown),
            ' ' => Command::Grid(Gesture::ToggleRow),
            'a' => Command::Grid(Gesture::ToggleAll),
            'D' => Command::BulkDelete,
            '?' => Command::Help,
            c => match action_for(c) {
                Some(kind) => Command::Action(kind),
                None => Command::Hotkey(c),
            },
        },
        _ => return None,
    };
    Some(command)
}

/// Key bindings listed by the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("Tab / Shift-Tab, 1-7", "switch page"),
    ("↑ ↓ / j k", "move cursor"),
    ("← → / h l, PgUp PgDn", "previous / next page"),
    ("Home / End", "first / last page"),
    ("/", "search"),
    ("f", "filters"),
    ("c", "clear search and filters"),
    ("[ ]", "focus column"),
    ("s", "sort focused column"),
    ("+ / -", "rows per page"),
    ("space / a", "select row / page"),
    ("Esc", "clear selection"),
    ("D", "delete selected"),
    ("Enter / v", "view"),
    ("e x y r g o", "edit delete approve reject generate download"),
    ("q / Ctrl-C", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_keys_round_trip() {
        for kind in [ActionKind::View, ActionKind::Reject, ActionKind::Download] {
            let key = action_key(&kind).unwrap();
            assert_eq!(
                browse_command(press(KeyCode::Char(key))),
                Some(Command::Action(kind))
            );
        }
    }

    #[test]
    fn test_digits_jump_to_pages() {
        assert_eq!(
            browse_command(press(KeyCode::Char('1'))),
            Some(Command::GoTo(0))
        );
        assert_eq!(
            browse_command(press(KeyCode::Char('7'))),
            Some(Command::GoTo(6))
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(browse_command(key), Some(Command::Quit));
        assert_eq!(
            browse_command(press(KeyCode::Char('c'))),
            Some(Command::Grid(Gesture::ClearFilters))
        );
    }

    #[test]
    fn test_unbound_char_is_hotkey() {
        assert_eq!(
            browse_command(press(KeyCode::Char('G'))),
            Some(Command::Hotkey('G'))
        );
    }
}
