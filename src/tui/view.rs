use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{Focus, TuiState};
use crate::{domain::note::Note, format};

const COPY_BADGE: &str = " [copy]";
const COPIED_BADGE: &str = " [copied]";
const EDIT_MARK: &str = "* ";
const EDITED_MARK: &str = " (edited)";

pub(crate) fn draw_tui(frame: &mut Frame<'_>, state: &TuiState) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(frame.area());

    draw_input(frame, state, areas[0]);
    draw_notes(frame, state, areas[1]);
}

fn draw_input(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let draft = state.board.draft();
    let lines: Vec<Line> = draft
        .lines()
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let save_style = if state.board.can_save() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(input_title(state))
                .title_bottom(Line::from(Span::styled("[Enter] Save", save_style)).right_aligned())
                .border_style(focus_style(state.focus, Focus::Input)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
    if matches!(state.focus, Focus::Input) {
        frame.set_cursor_position(draft.cursor_position(area));
    }
}

fn draw_notes(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .board
        .notes()
        .iter()
        .map(|note| note_item(state, note, inner_width))
        .collect();
    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notes_title(state))
                .border_style(focus_style(state.focus, Focus::Notes)),
        )
        .highlight_style(focus_style(state.focus, Focus::Notes).add_modifier(Modifier::BOLD));
    let mut list_state = ListState::default();
    list_state.select(state.selected);
    frame.render_stateful_widget(widget, area, &mut list_state);
}

fn note_item<'a>(state: &TuiState, note: &Note, width: usize) -> ListItem<'a> {
    let copied = state.board.copied() == Some(note.id);
    let badge = if copied { COPIED_BADGE } else { COPY_BADGE };
    let mark = if state.board.editing() == Some(note.id) {
        EDIT_MARK
    } else {
        ""
    };
    let edited = if note.updated_at > note.created_at {
        EDITED_MARK
    } else {
        ""
    };
    let prefix = format!(
        "{}{}{}",
        mark,
        format::format_display_time(note.created_at, Local::now()),
        edited
    );
    let text_width = width.saturating_sub(UnicodeWidthStr::width(badge));
    let line = format::format_note_line(&prefix, &note.content, text_width);
    let badge_style = if copied {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(Line::from(vec![
        Span::raw(line),
        Span::styled(badge, badge_style),
    ]))
}

fn input_title(state: &TuiState) -> String {
    let active_label = if matches!(state.focus, Focus::Input) {
        " [active]"
    } else {
        ""
    };
    match state.board.editing() {
        Some(id) => format!(
            "Editing Note #{}{} (Shift+Enter newline, Esc cancel)",
            id, active_label
        ),
        None => format!(
            "New Note{} (Shift+Enter newline, Tab switch, Esc exit)",
            active_label
        ),
    }
}

fn notes_title(state: &TuiState) -> String {
    if matches!(state.focus, Focus::Notes) {
        "Notes [active] (c copy, e edit, d delete, q quit)".to_string()
    } else {
        format!("Notes ({})", state.board.notes().len())
    }
}

fn focus_style(current: Focus, target: Focus) -> Style {
    if current == target {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoteBoard;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn render(state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw_tui(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state_with(contents: &[&str]) -> TuiState {
        let mut board = NoteBoard::new();
        for content in contents {
            board.update_draft(content);
            board.save();
        }
        TuiState::new(board)
    }

    #[test]
    fn renders_notes_with_copy_badges() {
        let screen = render(&state_with(&["alpha", "beta"]));
        assert!(screen.contains("New Note [active]"));
        assert!(screen.contains("alpha [copy]"));
        assert!(screen.contains("beta [copy]"));
        assert!(screen.contains("Notes (2)"));
    }

    #[test]
    fn copied_note_shows_copied_badge() {
        let mut state = state_with(&["alpha", "beta"]);
        let id = state.board.notes()[1].id;
        state.board.copy_succeeded(id, Instant::now());
        let screen = render(&state);
        assert!(screen.contains("alpha [copy]"));
        assert!(screen.contains("beta [copied]"));
    }

    #[test]
    fn editing_title_names_the_note() {
        let mut state = state_with(&["alpha"]);
        let id = state.board.notes()[0].id;
        state.board.begin_edit(id);
        let screen = render(&state);
        assert!(screen.contains(&format!("Editing Note #{}", id)));
        assert!(screen.contains("* "));
    }
}
