use anyhow::Result;
use tracing::debug;

use crate::{
    app::AppContext,
    board::NoteBoard,
    cli::args::{Cli, Command},
    tui,
};

pub(crate) fn dispatch(app: &AppContext, cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Version) => {
            println!("noteboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => tui::run_tui(seeded_board(&cli.notes), app.copy_worker()),
    }
}

/// Saves each seed through the board, so blank seeds are dropped the same
/// way a blank draft is. The draft starts empty either way.
fn seeded_board(notes: &[String]) -> NoteBoard {
    let mut board = NoteBoard::new();
    for note in notes {
        board.update_draft(note);
        board.save();
    }
    board.update_draft("");
    debug!(seeded = board.notes().len(), "board seeded");
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_skip_blank_notes_and_trim() {
        let seeds = ["  one ".to_string(), "   ".to_string(), "two".to_string()];
        let board = seeded_board(&seeds);
        let contents: Vec<&str> = board.notes().iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, ["one", "two"]);
        assert!(board.draft().is_blank());
    }
}
