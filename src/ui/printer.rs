use std::ffi::{CStr, c_char, c_int, c_void};

use fltk::{
    draw,
    enums::{Color, Font},
};
use tracing::debug;

use crate::app::error::{AppError, Result};
use crate::app::print::{PageCanvas, PrintBackend, PrintJob};

unsafe extern "C" {
    fn Fl_Printer_new() -> *mut c_void;
    fn Fl_Printer_delete(printer: *mut c_void);
    fn Fl_Printer_begin_job(
        printer: *mut c_void,
        pagecount: c_int,
        frompage: *mut c_int,
        topage: *mut c_int,
        perr_message: *mut *mut c_char,
    ) -> c_int;
    fn Fl_Printer_begin_page(printer: *mut c_void) -> c_int;
    fn Fl_Printer_end_page(printer: *mut c_void) -> c_int;
    fn Fl_Printer_end_job(printer: *mut c_void);
}

/// `Fl_Printer::begin_job` return codes: 0 started, 1 cancelled, above 1 failed.
const BEGIN_JOB_CANCELLED: c_int = 1;

/// Map a `begin_job` return code to the dialog result.
fn begin_job_result(code: c_int, message: Option<String>) -> Result<bool> {
    match code {
        0 => Ok(true),
        BEGIN_JOB_CANCELLED => Ok(false),
        _ => Err(AppError::Print(
            message.unwrap_or_else(|| format!("could not start print job (code {})", code)),
        )),
    }
}

/// Owned `Fl_Printer`.
///
/// fltk-rs's `Printer::begin_job` folds "cancelled" and "failed" into one
/// error, so the job is driven through cfltk directly.
struct RawPrinter(*mut c_void);

impl RawPrinter {
    fn new() -> Result<Self> {
        // SAFETY: Fl_Printer_new allocates a fresh printer or returns null.
        let ptr = unsafe { Fl_Printer_new() };
        if ptr.is_null() {
            return Err(AppError::Print("no printer device available".to_string()));
        }
        Ok(Self(ptr))
    }

    fn begin_job(&mut self, pagecount: usize) -> Result<bool> {
        let mut from = 0;
        let mut to = 0;
        let mut message: *mut c_char = std::ptr::null_mut();
        // SAFETY: self.0 is a live printer; the out-pointers outlive the call.
        // On failure FLTK sets `message` to a new[]-allocated C string, which
        // is copied and then left alone (it cannot be released with free()).
        let (code, message) = unsafe {
            let code = Fl_Printer_begin_job(
                self.0,
                pagecount as c_int,
                &mut from,
                &mut to,
                &mut message,
            );
            let text = if message.is_null() {
                None
            } else {
                Some(CStr::from_ptr(message).to_string_lossy().into_owned())
            };
            (code, text)
        };
        begin_job_result(code, message)
    }

    fn begin_page(&mut self) -> Result<()> {
        // SAFETY: self.0 is a live printer with a started job.
        match unsafe { Fl_Printer_begin_page(self.0) } {
            0 => Ok(()),
            code => Err(AppError::Print(format!("could not start page (code {})", code))),
        }
    }

    fn end_page(&mut self) -> Result<()> {
        // SAFETY: as above.
        match unsafe { Fl_Printer_end_page(self.0) } {
            0 => Ok(()),
            code => Err(AppError::Print(format!("could not finish page (code {})", code))),
        }
    }

    fn end_job(&mut self) {
        // SAFETY: as above.
        unsafe { Fl_Printer_end_job(self.0) }
    }
}

impl Drop for RawPrinter {
    fn drop(&mut self) {
        // SAFETY: self.0 came from Fl_Printer_new and is deleted exactly once.
        unsafe { Fl_Printer_delete(self.0) }
    }
}

/// Draws onto whatever FLTK surface is current (the printer during a job).
struct FltkCanvas {
    font_size: i32,
}

impl PageCanvas for FltkCanvas {
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        draw::set_draw_color(Color::Black);
        draw::set_font(Font::Courier, self.font_size);
        let line_height = draw::height();
        for (i, line) in text.lines().enumerate() {
            draw::draw_text(line, x, y + i as i32 * line_height);
        }
    }
}

/// Printing through FLTK's `Fl_Printer`.
///
/// Starting the job shows the system print dialog. A cancelled dialog is a
/// quiet no-op; a job that cannot start is a printer error.
pub struct FltkPrinter {
    printer: Option<RawPrinter>,
    font_size: i32,
}

impl FltkPrinter {
    pub fn new(font_size: i32) -> Self {
        Self { printer: None, font_size }
    }
}

impl PrintBackend for FltkPrinter {
    fn open_dialog(&mut self, job: &PrintJob) -> Result<bool> {
        let mut printer = RawPrinter::new()?;
        let confirmed = printer.begin_job(PrintJob::PAGE_COUNT)?;
        debug!(job = %job.name, confirmed, "print dialog closed");
        if confirmed {
            self.printer = Some(printer);
        }
        Ok(confirmed)
    }

    fn submit(&mut self, job: &PrintJob) -> Result<()> {
        let Some(mut printer) = self.printer.take() else {
            return Err(AppError::Print("print job was not started".to_string()));
        };

        let mut canvas = FltkCanvas { font_size: self.font_size };
        let mut result = Ok(());
        for index in 0..PrintJob::PAGE_COUNT {
            if let Err(e) = printer.begin_page() {
                result = Err(e);
                break;
            }
            job.render_page(index, &mut canvas);
            if let Err(e) = printer.end_page() {
                result = Err(e);
                break;
            }
        }
        printer.end_job();
        result
    }
}
