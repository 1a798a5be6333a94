use fltk::{
    enums::Font,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::document::TextDocument;

/// The text editor widget as the application's document.
///
/// Clones share the same widget and buffer, so each menu binding can hold
/// its own handle.
#[derive(Clone)]
pub struct EditorDocument {
    editor: TextEditor,
    buffer: TextBuffer,
}

impl EditorDocument {
    /// Create the editor as a child of the currently open group.
    pub fn new() -> Self {
        let buffer = TextBuffer::default();
        let mut editor = TextEditor::new(0, 0, 0, 0, "");
        editor.set_buffer(buffer.clone());
        editor.set_text_font(Font::Courier);
        Self { editor, buffer }
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument for EditorDocument {
    fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
    }

    fn copy_selection(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }
}

/// Read the buffer's text and free the C-side copy.
///
/// `TextBuffer::text()` copies FLTK's `malloc()`'d string into a `String`
/// but never frees the original, leaking the whole buffer on every call.
fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // Fl_Text_Buffer_text returns a malloc'd, null-terminated copy (or null),
    // which is copied into a Rust String and then released with free().
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
