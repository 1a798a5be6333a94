use fltk::{group::Flex, menu::MenuBar, prelude::*, window::Window};

use super::editor::EditorDocument;
use crate::app::config::AppConfig;

const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub document: EditorDocument,
}

/// Window with a menu bar on top and the scrolling text editor below.
pub fn build_main_window(config: &AppConfig) -> MainWidgets {
    let mut wind = Window::new(100, 100, config.width, config.height, None);
    wind.set_label(&config.title);

    let mut flex = Flex::new(0, 0, config.width, config.height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let document = EditorDocument::new();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        document,
    }
}
