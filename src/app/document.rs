use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// The single editable text buffer every handler works against.
///
/// Caret and selection live in the implementation; handlers only ever read
/// or replace the whole text, or ask for a clipboard round-trip.
pub trait TextDocument {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Copy the current selection to the clipboard. No-op without a selection.
    fn copy_selection(&mut self);
    /// Insert clipboard content at the caret, replacing any selection.
    fn paste(&mut self);
}

/// Clipboard shared between `MemoryDocument`s.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard(Rc<RefCell<Option<String>>>);

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn set_contents(&self, text: &str) {
        *self.0.borrow_mut() = Some(text.to_string());
    }
}

/// Headless document used when no widget is around.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    text: String,
    caret: usize,
    selection: Option<Range<usize>>,
    clipboard: MemoryClipboard,
}

impl MemoryDocument {
    pub fn new(clipboard: MemoryClipboard) -> Self {
        Self {
            clipboard,
            ..Self::default()
        }
    }

    pub fn with_text(text: &str, clipboard: MemoryClipboard) -> Self {
        let mut doc = Self::new(clipboard);
        doc.set_text(text);
        doc
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, clamped to the text and snapped back to a char boundary.
    pub fn set_caret(&mut self, pos: usize) {
        self.caret = floor_boundary(&self.text, pos);
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Select `range` (byte offsets). Empty or out-of-bounds ranges clear the selection.
    pub fn select(&mut self, range: Range<usize>) {
        let start = floor_boundary(&self.text, range.start);
        let end = floor_boundary(&self.text, range.end);
        if start < end {
            self.caret = end;
            self.selection = Some(start..end);
        } else {
            self.selection = None;
        }
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection.as_ref().map(|r| &self.text[r.clone()])
    }
}

fn floor_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

impl TextDocument for MemoryDocument {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = 0;
        self.selection = None;
    }

    fn copy_selection(&mut self) {
        if let Some(selected) = self.selected_text() {
            self.clipboard.set_contents(selected);
        }
    }

    fn paste(&mut self) {
        let Some(content) = self.clipboard.contents() else {
            return;
        };
        let at = match self.selection.take() {
            Some(range) => {
                self.text.replace_range(range.clone(), "");
                range.start
            }
            None => self.caret,
        };
        self.text.insert_str(at, &content);
        self.caret = at + content.len();
    }
}
