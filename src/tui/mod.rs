use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{info, warn};

mod handler;
mod state;
mod view;

use handler::{Effect, handle_tui_key, handle_tui_paste};
use state::TuiState;
use view::draw_tui;

use crate::{
    board::NoteBoard,
    clipboard::{CopyOutcome, CopyWorker},
    config::TUI_POLL_MS,
};

pub(crate) fn run_tui(board: NoteBoard, worker: &CopyWorker) -> Result<()> {
    let (mut terminal, keyboard_enhanced) = setup_terminal()?;
    let mut state = TuiState::new(board);
    info!(keyboard_enhanced, "board opened");

    let result = run_tui_loop(&mut terminal, worker, &mut state);
    restore_terminal(&mut terminal, keyboard_enhanced)?;
    info!(notes = state.board.notes().len(), "board closed");
    result
}

fn setup_terminal() -> Result<(Terminal<CrosstermBackend<io::Stdout>>, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Needed for the terminal to report Shift+Enter distinctly from Enter.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }
    // Pasted line breaks would otherwise arrive as Enter and save each line.
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    Ok((Terminal::new(backend)?, keyboard_enhanced))
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    keyboard_enhanced: bool,
) -> Result<()> {
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    disable_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    worker: &CopyWorker,
    state: &mut TuiState,
) -> Result<()> {
    loop {
        let now = Instant::now();
        for outcome in worker.drain() {
            apply_copy_outcome(&mut state.board, outcome, now);
        }
        state.board.tick(now);

        terminal.draw(|frame| draw_tui(frame, state))?;
        if !poll_event()? {
            continue;
        }
        let effect = match event::read()? {
            Event::Key(key) => handle_tui_key(state, key),
            Event::Paste(text) => handle_tui_paste(state, &text),
            _ => Effect::None,
        };
        match effect {
            Effect::Quit => break,
            Effect::Copy(request) => {
                if !worker.submit(request) {
                    warn!("clipboard worker is no longer running");
                }
            }
            Effect::None => {}
        }
    }
    Ok(())
}

fn apply_copy_outcome(board: &mut NoteBoard, outcome: CopyOutcome, now: Instant) {
    match outcome.result {
        Ok(()) => board.copy_succeeded(outcome.id, now),
        Err(error) => board.copy_failed(outcome.id, &error),
    }
}

fn poll_event() -> Result<bool> {
    Ok(event::poll(Duration::from_millis(TUI_POLL_MS))?)
}
