use std::path::PathBuf;

use tracing::{debug, info};

use super::document::TextDocument;
use super::error::AppError;
use super::text_io::{read_text_file, write_text_file};

pub const SAVED_MESSAGE: &str = "File is saved successfully...";

/// Interactive path selection. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_open(&mut self) -> Option<PathBuf>;
    fn pick_save(&mut self) -> Option<PathBuf>;
}

/// User-facing status dialogs.
pub trait Notifier {
    fn info(&mut self, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// Result of a file handler. The menu bindings discard it: cancellations and
/// I/O failures are both silent to the user.
#[derive(Debug)]
pub enum FileOutcome {
    Cancelled,
    Completed(PathBuf),
    Failed(AppError),
}

impl FileOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, FileOutcome::Completed(_))
    }
}

/// Clear the document. Unsaved content is discarded without asking.
pub fn new_file<D: TextDocument + ?Sized>(doc: &mut D) {
    doc.set_text("");
}

/// Ask for a file and replace the document with its content.
pub fn open_file<D, P>(doc: &mut D, picker: &mut P) -> FileOutcome
where
    D: TextDocument + ?Sized,
    P: FilePicker + ?Sized,
{
    let Some(path) = picker.pick_open() else {
        return FileOutcome::Cancelled;
    };

    match read_text_file(&path) {
        Ok(content) => {
            doc.set_text(&content);
            info!(path = %path.display(), bytes = content.len(), "file opened");
            FileOutcome::Completed(path)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "open failed, ignoring");
            FileOutcome::Failed(e)
        }
    }
}

/// Ask for a destination and write the document there.
///
/// Every save prompts again; no current file is remembered.
pub fn save_file<D, P, N>(doc: &D, picker: &mut P, notifier: &mut N) -> FileOutcome
where
    D: TextDocument + ?Sized,
    P: FilePicker + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(path) = picker.pick_save() else {
        return FileOutcome::Cancelled;
    };

    match write_text_file(&path, &doc.text()) {
        Ok(()) => {
            info!(path = %path.display(), "file saved");
            notifier.info(SAVED_MESSAGE);
            FileOutcome::Completed(path)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "save failed, ignoring");
            FileOutcome::Failed(e)
        }
    }
}
