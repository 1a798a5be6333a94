use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_ops::FilePicker;

/// Native file chooser. No filter: any file can be opened or written.
#[derive(Debug, Default)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    pub fn new() -> Self {
        Self
    }
}

fn native_dialog(kind: FileDialogType, title: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.show(); // blocks until closed
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

impl FilePicker for NativeFilePicker {
    fn pick_open(&mut self) -> Option<PathBuf> {
        native_dialog(FileDialogType::BrowseFile, "Open")
    }

    fn pick_save(&mut self) -> Option<PathBuf> {
        native_dialog(FileDialogType::BrowseSaveFile, "Save")
    }
}
