//! Text buffer the keyboard types into

/// Editable text surface
///
/// Positions are character indices. Every mutation collapses the selection
/// to a cursor right after the replaced range.
pub trait TextBuffer {
    /// Current selection as `(start, end)`, `start <= end`
    fn selection(&self) -> (usize, usize);

    /// Replace `start..end` with `text`; out-of-range bounds are clamped
    fn set_range_text(&mut self, text: &str, start: usize, end: usize);
}

/// In-memory text area with a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text area holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let len = text.chars().count();
        Self {
            text: text.to_string(),
            selection_start: len,
            selection_end: len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Select `start..end`; bounds are ordered and clamped to the text
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection_start = start.min(len);
        self.selection_end = end.min(len);
    }

    /// Place a zero-length cursor
    pub fn set_cursor(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for TextArea {
    fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    fn set_range_text(&mut self, text: &str, start: usize, end: usize) {
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);

        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, text);

        let cursor = start + text.chars().count();
        self.selection_start = cursor;
        self.selection_end = cursor;
    }
}
