use super::commands::complete_prefix;

/// The single-line editor plus submitted-line history.
///
/// `history_index` counts back from the newest line: `Some(0)` is the most
/// recent submission and `None` means the user is not browsing history.
#[derive(Debug, Default)]
pub struct InputState {
    buf: String,
    cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    pub fn set(&mut self, s: impl Into<String>) {
        self.buf = s.into();
        self.cursor = self.buf.chars().count();
    }

    pub fn reset(&mut self) {
        self.buf.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Every non-empty line is kept, duplicates included.
    pub fn record(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.history.push(line.to_string());
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buf.chars().count() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buf.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buf.chars().count();
    }

    pub fn clear_line(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    fn entry(&self, index: usize) -> Option<&String> {
        let pos = self.history.len().checked_sub(index + 1)?;
        self.history.get(pos)
    }

    pub fn history_up(&mut self) {
        let Some(last) = self.history.len().checked_sub(1) else {
            return;
        };
        let next = self.history_index.map(|i| i + 1).unwrap_or(0).min(last);
        if let Some(line) = self.entry(next).cloned() {
            self.history_index = Some(next);
            self.set(line);
        }
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.clear_line();
            }
            Some(i) => {
                let next = i - 1;
                if let Some(line) = self.entry(next).cloned() {
                    self.history_index = Some(next);
                    self.set(line);
                }
            }
        }
    }

    /// Tab completion: only a unique prefix match replaces the text.
    pub fn complete(&mut self) {
        let matches = complete_prefix(&self.buf);
        if let [only] = matches.as_slice() {
            self.set(*only);
        }
    }
}

#[cfg(test)]
#[path = "../tests/session/input_tests.rs"]
mod tests;
