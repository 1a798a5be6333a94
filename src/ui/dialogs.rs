use fltk::dialog;

use crate::app::file_ops::Notifier;

/// Modal FLTK message boxes.
#[derive(Debug, Default)]
pub struct FltkNotifier;

impl FltkNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for FltkNotifier {
    fn info(&mut self, message: &str) {
        dialog::message_title("Message");
        dialog::message_default(message);
    }

    fn error(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }
}
