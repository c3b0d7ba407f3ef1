use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The draft input buffer. Holds text as lines plus a char-based cursor.
#[derive(Debug)]
pub(crate) struct Draft {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Draft {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::new(),
        }
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Replaces the whole buffer and parks the cursor after the last char.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.lines = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        self.ensure_invariants();
        self.cursor.line = self.lines.len() - 1;
        self.cursor.col = self.current_line_len();
        self.cursor.preferred_col = None;
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
        self.cursor = Cursor::new();
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        self.ensure_invariants();
        let line = &mut self.lines[self.cursor.line];
        let byte_index = byte_index_at_char(line, self.cursor.col);
        line.insert(byte_index, ch);
        self.cursor.col = self.cursor.col.saturating_add(1);
        self.cursor.preferred_col = None;
    }

    /// Inserts text at the cursor. Line breaks (`\n`, `\r\n` or `\r`) become
    /// new lines rather than being typed literally.
    pub(crate) fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for ch in normalized.chars() {
            if ch == '\n' {
                self.newline();
            } else {
                self.insert_char(ch);
            }
        }
    }

    pub(crate) fn newline(&mut self) {
        self.ensure_invariants();
        let line = &mut self.lines[self.cursor.line];
        let split_at = byte_index_at_char(line, self.cursor.col);
        let tail = line.split_off(split_at);
        let insert_at = self.cursor.line + 1;
        self.lines.insert(insert_at, tail);
        self.cursor.line = insert_at;
        self.cursor.col = 0;
        self.cursor.preferred_col = None;
    }

    pub(crate) fn backspace(&mut self) {
        self.ensure_invariants();
        if self.cursor.col > 0 {
            let line = &mut self.lines[self.cursor.line];
            remove_char_at(line, self.cursor.col - 1);
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            let current_line = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            let line = &mut self.lines[self.cursor.line];
            self.cursor.col = line.chars().count();
            line.push_str(&current_line);
        }
        self.cursor.preferred_col = None;
    }

    pub(crate) fn delete_char(&mut self) {
        self.ensure_invariants();
        if self.cursor.col < self.current_line_len() {
            remove_char_at(&mut self.lines[self.cursor.line], self.cursor.col);
        } else if self.cursor.line + 1 < self.lines.len() {
            let next_line = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&next_line);
        }
        self.cursor.preferred_col = None;
    }

    pub(crate) fn move_left(&mut self) {
        self.ensure_invariants();
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.current_line_len();
        }
        self.cursor.preferred_col = None;
    }

    pub(crate) fn move_right(&mut self) {
        self.ensure_invariants();
        if self.cursor.col < self.current_line_len() {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
        self.cursor.preferred_col = None;
    }

    pub(crate) fn move_up(&mut self) {
        self.ensure_invariants();
        if self.cursor.line == 0 {
            return;
        }
        let target_col = self.cursor.preferred_col.unwrap_or(self.cursor.col);
        self.cursor.line -= 1;
        self.cursor.col = target_col.min(self.current_line_len());
        self.cursor.preferred_col = Some(target_col);
    }

    pub(crate) fn move_down(&mut self) {
        self.ensure_invariants();
        if self.cursor.line + 1 >= self.lines.len() {
            return;
        }
        let target_col = self.cursor.preferred_col.unwrap_or(self.cursor.col);
        self.cursor.line += 1;
        self.cursor.col = target_col.min(self.current_line_len());
        self.cursor.preferred_col = Some(target_col);
    }

    /// Terminal position of the cursor inside a bordered `area`.
    pub(crate) fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let content_width = area.width.saturating_sub(2).max(1) as usize;
        let (row, col) = wrapped_cursor_position(&self.lines, &self.cursor, content_width);
        (area.x + col as u16 + 1, area.y + row as u16 + 1)
    }

    fn ensure_invariants(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        if self.cursor.line >= self.lines.len() {
            self.cursor.line = self.lines.len() - 1;
        }
        let line_len = self.current_line_len();
        if self.cursor.col > line_len {
            self.cursor.col = line_len;
        }
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.cursor.line)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }
}

#[derive(Debug)]
struct Cursor {
    line: usize,
    col: usize,
    preferred_col: Option<usize>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            preferred_col: None,
        }
    }
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

fn remove_char_at(line: &mut String, char_index: usize) {
    let at = byte_index_at_char(line, char_index);
    if at < line.len() {
        line.remove(at);
    }
}

fn width_up_to_char(value: &str, char_index: usize) -> usize {
    value
        .chars()
        .take(char_index)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

fn wrapped_cursor_position(
    lines: &[String],
    cursor: &Cursor,
    content_width: usize,
) -> (usize, usize) {
    let cursor_line = cursor.line.min(lines.len().saturating_sub(1));
    let rows_before: usize = lines
        .iter()
        .take(cursor_line)
        .map(|line| {
            let line_width = UnicodeWidthStr::width(line.as_str());
            line_width.saturating_sub(1) / content_width + 1
        })
        .sum();

    let line = lines.get(cursor_line).map(String::as_str).unwrap_or("");
    let prefix_width = width_up_to_char(line, cursor.col.min(line.chars().count()));
    (
        rows_before + prefix_width / content_width,
        prefix_width % content_width,
    )
}
