use tracing::{debug, info, warn};

use super::config::AppConfig;
use super::document::TextDocument;
use super::error::{AppError, Result};
use super::file_ops::Notifier;

pub const PRINT_ERROR_TITLE: &str = "Printing error";

/// Drawing surface for one printed page.
pub trait PageCanvas {
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    PageExists,
    NoSuchPage,
}

/// One print invocation. The text is a snapshot taken when the job is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub name: String,
    pub copies: u32,
    pub text: String,
    pub origin: (i32, i32),
}

impl PrintJob {
    /// Only one page is ever printed; long documents are not paginated.
    pub const PAGE_COUNT: usize = 1;

    pub fn for_document<D: TextDocument + ?Sized>(doc: &D, config: &AppConfig) -> Self {
        Self {
            name: config.print_job_name.clone(),
            copies: 1,
            text: doc.text(),
            origin: config.print_origin,
        }
    }

    pub fn render_page(&self, page_index: usize, canvas: &mut dyn PageCanvas) -> PageStatus {
        if page_index >= Self::PAGE_COUNT {
            return PageStatus::NoSuchPage;
        }
        let (x, y) = self.origin;
        canvas.draw_text(&self.text, x, y);
        PageStatus::PageExists
    }
}

/// Platform printer. The dialog is always shown before anything is submitted.
pub trait PrintBackend {
    /// Show the print dialog. `Ok(false)` when the user cancels.
    fn open_dialog(&mut self, job: &PrintJob) -> Result<bool>;
    fn submit(&mut self, job: &PrintJob) -> Result<()>;
}

#[derive(Debug)]
pub enum PrintOutcome {
    Cancelled,
    Submitted,
    Failed(AppError),
}

/// Print the document's current text. Printer failures are the one error
/// reported to the user.
pub fn print_document<D, B, N>(
    doc: &D,
    backend: &mut B,
    notifier: &mut N,
    config: &AppConfig,
) -> PrintOutcome
where
    D: TextDocument + ?Sized,
    B: PrintBackend + ?Sized,
    N: Notifier + ?Sized,
{
    let job = PrintJob::for_document(doc, config);

    let result = backend.open_dialog(&job).and_then(|confirmed| {
        if !confirmed {
            return Ok(false);
        }
        backend.submit(&job).map(|()| true)
    });

    match result {
        Ok(false) => {
            debug!(job = %job.name, "print dialog cancelled");
            PrintOutcome::Cancelled
        }
        Ok(true) => {
            info!(job = %job.name, copies = job.copies, "print job submitted");
            PrintOutcome::Submitted
        }
        Err(e) => {
            warn!(job = %job.name, error = %e, "print job failed");
            notifier.error(PRINT_ERROR_TITLE, &format!("Printer error: {}", e));
            PrintOutcome::Failed(e)
        }
    }
}
