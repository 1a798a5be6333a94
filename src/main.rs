use fltk::{app, enums::Event, prelude::*};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use simple_notepad::app::{AppConfig, edit_ops, file_ops, print};
use simple_notepad::ui::{
    dialogs::FltkNotifier,
    editor::EditorDocument,
    file_dialogs::NativeFilePicker,
    main_window::build_main_window,
    menu::{MenuActions, build_menu},
    printer::FltkPrinter,
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Bind each menu item to its own handler, each holding its own document handle.
fn menu_actions(doc: &EditorDocument, config: &AppConfig) -> MenuActions {
    MenuActions {
        open: Box::new({
            let mut doc = doc.clone();
            move || {
                file_ops::open_file(&mut doc, &mut NativeFilePicker::new());
            }
        }),
        new_file: Box::new({
            let mut doc = doc.clone();
            move || file_ops::new_file(&mut doc)
        }),
        save: Box::new({
            let doc = doc.clone();
            move || {
                file_ops::save_file(&doc, &mut NativeFilePicker::new(), &mut FltkNotifier::new());
            }
        }),
        print: Box::new({
            let doc = doc.clone();
            let config = config.clone();
            move || {
                let mut printer = FltkPrinter::new(config.print_font_size);
                print::print_document(&doc, &mut printer, &mut FltkNotifier::new(), &config);
            }
        }),
        replace: Box::new({
            let mut doc = doc.clone();
            move || edit_ops::replace(&mut doc)
        }),
        undo: Box::new({
            let mut doc = doc.clone();
            move || edit_ops::undo(&mut doc)
        }),
        copy: Box::new({
            let mut doc = doc.clone();
            move || edit_ops::copy(&mut doc)
        }),
        paste: Box::new({
            let mut doc = doc.clone();
            move || edit_ops::paste(&mut doc)
        }),
    }
}

fn main() {
    init_logging();

    let app = app::App::default();
    let config = AppConfig::default();

    let mut widgets = build_main_window(&config);
    build_menu(&mut widgets.menu, menu_actions(&widgets.document, &config));

    // Closing the window ends the process; Escape does not.
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            app.quit();
        }
    });

    widgets.wind.show();
    info!(title = %config.title, "window shown");

    if let Err(e) = app.run() {
        error!(error = %e, "event loop failed");
        std::process::exit(1);
    }
}
