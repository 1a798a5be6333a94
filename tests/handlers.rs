use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use simple_notepad::app::{
    AppConfig, AppError, FileOutcome, FilePicker, MemoryClipboard, MemoryDocument, Notifier,
    PageCanvas, PageStatus, PrintBackend, PrintJob, PrintOutcome, Result, TextDocument, edit_ops,
    file_ops, print,
};
use tempfile::TempDir;

/// Answers each dialog with the next queued choice.
#[derive(Default)]
struct ScriptedPicker(VecDeque<Option<PathBuf>>);

impl ScriptedPicker {
    fn answering(choices: impl IntoIterator<Item = Option<PathBuf>>) -> Self {
        Self(choices.into_iter().collect())
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_open(&mut self) -> Option<PathBuf> {
        self.0.pop_front().flatten()
    }
    fn pick_save(&mut self) -> Option<PathBuf> {
        self.0.pop_front().flatten()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    infos: Vec<String>,
    errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }
    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
struct PageRecorder(Vec<String>);

impl PageCanvas for PageRecorder {
    fn draw_text(&mut self, text: &str, _x: i32, _y: i32) {
        self.0.push(text.to_string());
    }
}

/// Renders pages like a real printer would, until the job runs out.
struct FakePrinter {
    confirm: bool,
    fail_with: Option<String>,
    start_error: Option<String>,
    dialogs_shown: usize,
    printed_pages: Vec<String>,
}

impl FakePrinter {
    fn new(confirm: bool) -> Self {
        Self {
            confirm,
            fail_with: None,
            start_error: None,
            dialogs_shown: 0,
            printed_pages: Vec::new(),
        }
    }
}

impl PrintBackend for FakePrinter {
    fn open_dialog(&mut self, _job: &PrintJob) -> Result<bool> {
        self.dialogs_shown += 1;
        if let Some(msg) = &self.start_error {
            return Err(AppError::Print(msg.clone()));
        }
        Ok(self.confirm)
    }

    fn submit(&mut self, job: &PrintJob) -> Result<()> {
        if let Some(msg) = &self.fail_with {
            return Err(AppError::Print(msg.clone()));
        }
        let mut page = 0;
        loop {
            let mut canvas = PageRecorder::default();
            if job.render_page(page, &mut canvas) == PageStatus::NoSuchPage {
                break;
            }
            self.printed_pages.extend(canvas.0);
            page += 1;
        }
        Ok(())
    }
}

fn doc(text: &str) -> MemoryDocument {
    MemoryDocument::with_text(text, MemoryClipboard::new())
}

#[test]
fn save_then_open_round_trips() {
    let dir = TempDir::new().unwrap();
    for (i, text) in ["line1\nline2", "line1\nline2\n"].into_iter().enumerate() {
        let path = dir.path().join(format!("doc{}.txt", i));
        let mut picker = ScriptedPicker::answering([Some(path.clone()), Some(path.clone())]);
        let mut notifier = RecordingNotifier::default();

        let mut d = doc(text);
        assert!(file_ops::save_file(&d, &mut picker, &mut notifier).is_completed());
        file_ops::new_file(&mut d);
        assert_eq!(d.text(), "");

        assert!(file_ops::open_file(&mut d, &mut picker).is_completed());
        assert_eq!(d.text(), text);
        assert_eq!(notifier.infos, vec!["File is saved successfully...".to_string()]);
    }
}

#[test]
fn each_save_prompts_again() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.txt");
    let mut picker = ScriptedPicker::answering([Some(first.clone()), None]);
    let mut notifier = RecordingNotifier::default();
    let d = doc("content");

    assert!(file_ops::save_file(&d, &mut picker, &mut notifier).is_completed());
    // second save gets its own dialog, which is cancelled this time
    let outcome = file_ops::save_file(&d, &mut picker, &mut notifier);
    assert!(matches!(outcome, FileOutcome::Cancelled));
    assert_eq!(notifier.infos.len(), 1);
}

#[test]
fn cancelled_save_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("target.txt");
    let mut notifier = RecordingNotifier::default();

    // the first save goes through to `target`, then the document changes
    let mut d = doc("first version");
    let mut picker = ScriptedPicker::answering([Some(target.clone()), None]);
    assert!(file_ops::save_file(&d, &mut picker, &mut notifier).is_completed());
    d.set_text("second version");

    let outcome = file_ops::save_file(&d, &mut picker, &mut notifier);
    assert!(matches!(outcome, FileOutcome::Cancelled));
    assert_eq!(fs::read_to_string(&target).unwrap(), "first version\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert_eq!(d.text(), "second version");
    assert_eq!(notifier.infos.len(), 1);
}

#[test]
fn save_cancelled_before_any_write_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let unused = dir.path().join("unused.txt");
    let mut notifier = RecordingNotifier::default();
    let d = doc("never written");

    let mut picker = ScriptedPicker::answering([None, Some(unused.clone())]);
    let outcome = file_ops::save_file(&d, &mut picker, &mut notifier);
    assert!(matches!(outcome, FileOutcome::Cancelled));
    // the path the next dialog would have offered is still free
    assert!(!unused.exists());
    assert!(notifier.infos.is_empty());
}

#[test]
fn print_cancel_submits_nothing() {
    let mut printer = FakePrinter::new(false);
    let mut notifier = RecordingNotifier::default();
    let config = AppConfig::default();
    let outcome = print::print_document(&doc("text"), &mut printer, &mut notifier, &config);
    assert!(matches!(outcome, PrintOutcome::Cancelled));
    assert_eq!(printer.dialogs_shown, 1);
    assert!(printer.printed_pages.is_empty());
    assert!(notifier.errors.is_empty());
}

#[test]
fn print_renders_single_page() {
    let mut printer = FakePrinter::new(true);
    let mut notifier = RecordingNotifier::default();
    let long = "a line of text\n".repeat(200);
    let config = AppConfig::default();
    let outcome = print::print_document(&doc(&long), &mut printer, &mut notifier, &config);
    assert!(matches!(outcome, PrintOutcome::Submitted));
    assert_eq!(printer.printed_pages, vec![long]);
}

#[test]
fn print_failure_shows_error_dialog() {
    let mut printer = FakePrinter::new(true);
    printer.fail_with = Some("printer on fire".to_string());
    let mut notifier = RecordingNotifier::default();
    let config = AppConfig::default();
    let outcome = print::print_document(&doc("text"), &mut printer, &mut notifier, &config);
    assert!(matches!(outcome, PrintOutcome::Failed(AppError::Print(_))));
    assert_eq!(notifier.errors.len(), 1);
    let (title, message) = &notifier.errors[0];
    assert_eq!(title, "Printing error");
    assert!(message.contains("printer on fire"));
}

#[test]
fn print_job_that_cannot_start_shows_error_dialog() {
    let mut printer = FakePrinter::new(true);
    printer.start_error = Some("no printer configured".to_string());
    let mut notifier = RecordingNotifier::default();
    let config = AppConfig::default();
    let outcome = print::print_document(&doc("text"), &mut printer, &mut notifier, &config);
    assert!(matches!(outcome, PrintOutcome::Failed(AppError::Print(_))));
    assert!(printer.printed_pages.is_empty());
    assert_eq!(notifier.errors.len(), 1);
    assert_eq!(notifier.errors[0].0, "Printing error");
    assert!(notifier.errors[0].1.contains("no printer configured"));
}

#[test]
fn copy_paste_between_documents() {
    let clipboard = MemoryClipboard::new();
    let mut source = MemoryDocument::with_text("first second third", clipboard.clone());
    source.select(6..12);
    edit_ops::copy(&mut source);

    let mut target = MemoryDocument::new(clipboard);
    edit_ops::paste(&mut target);
    assert_eq!(target.text(), "second");
    assert_eq!(source.text(), "first second third");
}
