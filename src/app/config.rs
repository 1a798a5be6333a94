/// Fixed window and print parameters.
///
/// Nothing here is read from disk; `AppConfig::default()` is the only source.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub print_job_name: String,
    /// Where page 0's text is drawn, in printer coordinates.
    pub print_origin: (i32, i32),
    pub print_font_size: i32,
}

pub const WINDOW_TITLE: &str = "A Simple Notepad Tool";
pub const PRINT_JOB_NAME: &str = "Sample Command Pattern";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: 600,
            height: 600,
            print_job_name: PRINT_JOB_NAME.to_string(),
            print_origin: (500, 500),
            print_font_size: 12,
        }
    }
}
