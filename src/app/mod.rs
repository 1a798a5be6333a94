//! Application layer - everything that works without a display.
//!
//! - `document` - the `TextDocument` seam and a headless implementation
//! - `text_io` - plain-text file read/write
//! - `file_ops`, `print`, `edit_ops` - one handler per menu action
//! - `config`, `error` - fixed parameters and the error type

pub mod config;
pub mod document;
pub mod edit_ops;
pub mod error;
pub mod file_ops;
pub mod print;
pub mod text_io;

pub use config::AppConfig;
pub use document::{MemoryClipboard, MemoryDocument, TextDocument};
pub use error::{AppError, Result};
pub use file_ops::{FileOutcome, FilePicker, Notifier};
pub use print::{PageCanvas, PageStatus, PrintBackend, PrintJob, PrintOutcome};
