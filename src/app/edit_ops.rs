use tracing::debug;

use super::document::TextDocument;

pub fn copy<D: TextDocument + ?Sized>(doc: &mut D) {
    doc.copy_selection();
}

pub fn paste<D: TextDocument + ?Sized>(doc: &mut D) {
    doc.paste();
}

/// Placeholder for find/replace: behaves exactly like paste.
pub fn replace<D: TextDocument + ?Sized>(doc: &mut D) {
    doc.paste();
}

/// Undo history is not kept; the menu entry is present but inert.
pub fn undo<D: TextDocument + ?Sized>(_doc: &mut D) {
    debug!("undo requested, no history kept");
}
