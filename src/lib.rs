//! A single-window notepad built on FLTK.
//!
//! - `app/` - toolkit-independent handlers (file, print, edit) and the
//!   `TextDocument` seam they operate on
//! - `ui/` - FLTK widgets and the platform adapters (file chooser, printer,
//!   message dialogs) plugged into the handlers

pub mod app;
pub mod ui;
