use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{Focus, TuiState};
use crate::board::CopyRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Quit,
    ToggleFocus,
    Save,
    CancelEdit,
    InsertNewline,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Backspace,
    Delete,
    InsertChar(char),
    CopyNote,
    EditNote,
    DeleteNote,
}

/// What the event loop has to do after a key has been applied.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    None,
    Quit,
    Copy(CopyRequest),
}

pub(crate) fn handle_tui_key(state: &mut TuiState, key: KeyEvent) -> Effect {
    if key.kind == KeyEventKind::Release {
        return Effect::None;
    }
    let editing = state.board.editing().is_some();
    match key_to_action(&key, state.focus, editing) {
        Some(action) => apply_action(state, action),
        None => Effect::None,
    }
}

/// Pasted text goes into the draft verbatim, line breaks included. It never
/// saves, whichever pane has focus.
pub(crate) fn handle_tui_paste(state: &mut TuiState, text: &str) -> Effect {
    state.focus = Focus::Input;
    state.board.draft_mut().insert_str(text);
    Effect::None
}

fn key_to_action(key: &KeyEvent, focus: Focus, editing: bool) -> Option<Action> {
    let code = key.code;
    let modifiers = key.modifiers;

    if matches!((code, modifiers), (KeyCode::Char('c'), KeyModifiers::CONTROL)) {
        return Some(Action::Quit);
    }

    if matches!(code, KeyCode::Tab) {
        return Some(Action::ToggleFocus);
    }

    match focus {
        Focus::Input => input_action(code, modifiers, editing),
        Focus::Notes => notes_action(code),
    }
}

fn input_action(code: KeyCode, modifiers: KeyModifiers, editing: bool) -> Option<Action> {
    if is_newline_key(code, modifiers) {
        return Some(Action::InsertNewline);
    }
    if is_enter(code) {
        return Some(Action::Save);
    }

    match code {
        KeyCode::Esc if editing => Some(Action::CancelEdit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Char(ch) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Action::InsertChar(ch))
        }
        _ => None,
    }
}

fn notes_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopyNote),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditNote),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteNote),
        _ => None,
    }
}

fn apply_action(state: &mut TuiState, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::ToggleFocus => state.toggle_focus(),
        Action::Save => state.save(),
        Action::CancelEdit => {
            state.board.cancel_edit();
        }
        Action::InsertNewline => state.board.draft_mut().newline(),
        Action::MoveUp => match state.focus {
            Focus::Input => state.board.draft_mut().move_up(),
            Focus::Notes => state.move_selection_up(),
        },
        Action::MoveDown => match state.focus {
            Focus::Input => state.board.draft_mut().move_down(),
            Focus::Notes => state.move_selection_down(),
        },
        Action::MoveLeft => state.board.draft_mut().move_left(),
        Action::MoveRight => state.board.draft_mut().move_right(),
        Action::Backspace => state.board.draft_mut().backspace(),
        Action::Delete => state.board.draft_mut().delete_char(),
        Action::InsertChar(ch) => state.board.draft_mut().insert_char(ch),
        Action::CopyNote => {
            if let Some(request) = state.copy_selected() {
                return Effect::Copy(request);
            }
        }
        Action::EditNote => state.edit_selected(),
        Action::DeleteNote => state.delete_selected(),
    }
    Effect::None
}

fn is_enter(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r'))
}

/// Shift+Enter needs keyboard enhancement; Alt+Enter and Ctrl+J work on
/// terminals that cannot report it.
fn is_newline_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    if is_enter(code) {
        return modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
    }
    matches!(code, KeyCode::Char('j')) && modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoteBoard;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut TuiState, text: &str) {
        for ch in text.chars() {
            handle_tui_key(state, key(KeyCode::Char(ch)));
        }
    }

    fn new_state() -> TuiState {
        TuiState::new(NoteBoard::new())
    }

    fn contents(state: &TuiState) -> Vec<&str> {
        state
            .board
            .notes()
            .iter()
            .map(|n| n.content.as_str())
            .collect()
    }

    #[test]
    fn enter_saves_draft() {
        let mut state = new_state();
        type_text(&mut state, " hello ");
        assert_eq!(handle_tui_key(&mut state, key(KeyCode::Enter)), Effect::None);
        assert_eq!(contents(&state), ["hello"]);
        assert!(state.board.draft().is_blank());
    }

    #[test]
    fn shift_enter_inserts_newline_without_saving() {
        let mut state = new_state();
        type_text(&mut state, "a");
        handle_tui_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_text(&mut state, "b");
        assert!(state.board.notes().is_empty());
        assert_eq!(state.board.draft().text(), "a\nb");

        handle_tui_key(&mut state, key(KeyCode::Enter));
        assert_eq!(contents(&state), ["a\nb"]);
    }

    #[test]
    fn enter_on_blank_draft_does_nothing() {
        let mut state = new_state();
        type_text(&mut state, "   ");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        assert!(state.board.notes().is_empty());
        assert_eq!(state.board.draft().text(), "   ");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = new_state();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        handle_tui_key(&mut state, release);
        assert!(state.board.draft().is_blank());
    }

    #[test]
    fn edit_flow_through_keys() {
        let mut state = new_state();
        type_text(&mut state, "Hello");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "World");
        handle_tui_key(&mut state, key(KeyCode::Enter));

        handle_tui_key(&mut state, key(KeyCode::Tab));
        handle_tui_key(&mut state, key(KeyCode::Char('k')));
        handle_tui_key(&mut state, key(KeyCode::Char('e')));
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.board.draft().text(), "Hello");

        type_text(&mut state, "!");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        assert_eq!(contents(&state), ["Hello!", "World"]);
        assert_eq!(state.board.editing(), None);
    }

    #[test]
    fn esc_cancels_edit_before_quitting() {
        let mut state = new_state();
        type_text(&mut state, "note");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        handle_tui_key(&mut state, key(KeyCode::Tab));
        handle_tui_key(&mut state, key(KeyCode::Enter));
        assert!(state.board.editing().is_some());

        assert_eq!(handle_tui_key(&mut state, key(KeyCode::Esc)), Effect::None);
        assert_eq!(state.board.editing(), None);
        assert!(state.board.draft().is_blank());
        assert_eq!(handle_tui_key(&mut state, key(KeyCode::Esc)), Effect::Quit);
    }

    #[test]
    fn copy_key_emits_request_for_selected_note() {
        let mut state = new_state();
        type_text(&mut state, "first");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        handle_tui_key(&mut state, key(KeyCode::Tab));

        let Effect::Copy(request) = handle_tui_key(&mut state, key(KeyCode::Char('c'))) else {
            panic!("expected a copy request");
        };
        assert_eq!(request.text, "first");
        assert_eq!(Some(request.id), state.selected_id());
    }

    #[test]
    fn letters_in_notes_pane_do_not_reach_draft() {
        let mut state = new_state();
        type_text(&mut state, "keep");
        handle_tui_key(&mut state, key(KeyCode::Enter));
        handle_tui_key(&mut state, key(KeyCode::Tab));
        handle_tui_key(&mut state, key(KeyCode::Char('d')));
        assert!(state.board.notes().is_empty());
        assert!(state.board.draft().is_blank());
    }

    #[test]
    fn shifted_chars_are_inserted_as_reported() {
        let mut state = new_state();
        handle_tui_key(&mut state, key(KeyCode::Char('H')));
        handle_tui_key(&mut state, key(KeyCode::Char('i')));
        handle_tui_key(&mut state, KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT));
        assert_eq!(state.board.draft().text(), "Hi!");
    }

    #[test]
    fn pasted_lines_stay_in_one_draft() {
        let mut state = new_state();
        type_text(&mut state, "keep");
        handle_tui_key(&mut state, key(KeyCode::Enter));

        handle_tui_key(&mut state, key(KeyCode::Tab));
        assert_eq!(handle_tui_paste(&mut state, "a\nb\r\nc"), Effect::None);
        assert_eq!(contents(&state), ["keep"]);
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.board.draft().text(), "a\nb\nc");

        handle_tui_key(&mut state, key(KeyCode::Enter));
        assert_eq!(contents(&state), ["keep", "a\nb\nc"]);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut state = new_state();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_tui_key(&mut state, ctrl_c), Effect::Quit);
        handle_tui_key(&mut state, key(KeyCode::Tab));
        assert_eq!(handle_tui_key(&mut state, ctrl_c), Effect::Quit);
    }
}
