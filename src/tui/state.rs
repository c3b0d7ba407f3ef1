use crate::{
    board::{CopyRequest, NoteBoard, SaveOutcome},
    domain::note::NoteId,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    Notes,
}

pub(crate) struct TuiState {
    pub(crate) board: NoteBoard,
    pub(crate) focus: Focus,
    pub(crate) selected: Option<usize>,
}

impl TuiState {
    pub(crate) fn new(board: NoteBoard) -> Self {
        let mut state = Self {
            board,
            focus: Focus::Input,
            selected: None,
        };
        state.clamp_selection();
        state
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Notes,
            Focus::Notes => Focus::Input,
        };
        self.clamp_selection();
    }

    pub(crate) fn selected_id(&self) -> Option<NoteId> {
        self.selected
            .and_then(|index| self.board.notes().get(index))
            .map(|note| note.id)
    }

    pub(crate) fn move_selection_up(&mut self) {
        match self.selected {
            Some(current) => self.selected = Some(current.saturating_sub(1)),
            None => self.clamp_selection(),
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        match self.selected {
            Some(current) => {
                let max_index = self.board.notes().len().saturating_sub(1);
                self.selected = Some((current + 1).min(max_index));
            }
            None => self.clamp_selection(),
        }
    }

    pub(crate) fn save(&mut self) {
        if let SaveOutcome::Created(id) | SaveOutcome::Updated(id) = self.board.save() {
            self.select(id);
        }
        self.focus = Focus::Input;
    }

    pub(crate) fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if self.board.begin_edit(id) {
                self.focus = Focus::Input;
            }
        }
    }

    pub(crate) fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.board.delete(id);
            self.clamp_selection();
        }
    }

    pub(crate) fn copy_selected(&self) -> Option<CopyRequest> {
        self.selected_id()
            .and_then(|id| self.board.copy_request(id))
    }

    fn select(&mut self, id: NoteId) {
        self.selected = self.board.notes().iter().position(|note| note.id == id);
    }

    fn clamp_selection(&mut self) {
        let len = self.board.notes().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
    }
}
