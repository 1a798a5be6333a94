use fltk::{
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

pub const FILE_OPEN: &str = "File/Open";
pub const FILE_NEW: &str = "File/New File";
pub const FILE_SAVE: &str = "File/Save File";
pub const FILE_PRINT: &str = "File/Print File";

pub const EDIT_REPLACE: &str = "Edit/Replace";
pub const EDIT_UNDO: &str = "Edit/Undo";
pub const EDIT_COPY: &str = "Edit/Copy";
pub const EDIT_PASTE: &str = "Edit/Paste";

pub type Action = Box<dyn FnMut()>;

/// One handler per menu item.
pub struct MenuActions {
    pub open: Action,
    pub new_file: Action,
    pub save: Action,
    pub print: Action,
    pub replace: Action,
    pub undo: Action,
    pub copy: Action,
    pub paste: Action,
}

/// Menu item paths in display order, with whether a divider follows.
pub const MENU_LAYOUT: [(&str, bool); 8] = [
    (FILE_OPEN, true),
    (FILE_NEW, true),
    (FILE_SAVE, true),
    (FILE_PRINT, false),
    (EDIT_REPLACE, false),
    (EDIT_UNDO, false),
    (EDIT_COPY, false),
    (EDIT_PASTE, false),
];

fn has_divider(path: &str) -> bool {
    MENU_LAYOUT.iter().any(|(p, divider)| *p == path && *divider)
}

fn flag(path: &str) -> MenuFlag {
    if has_divider(path) { MenuFlag::MenuDivider } else { MenuFlag::Normal }
}

pub fn build_menu(menu: &mut MenuBar, actions: MenuActions) {
    let MenuActions {
        mut open,
        mut new_file,
        mut save,
        mut print,
        mut replace,
        mut undo,
        mut copy,
        mut paste,
    } = actions;

    // File
    menu.add(FILE_OPEN, Shortcut::None, flag(FILE_OPEN), move |_| open());
    menu.add(FILE_NEW, Shortcut::None, flag(FILE_NEW), move |_| new_file());
    menu.add(FILE_SAVE, Shortcut::None, flag(FILE_SAVE), move |_| save());
    menu.add(FILE_PRINT, Shortcut::None, flag(FILE_PRINT), move |_| print());

    // Edit
    menu.add(EDIT_REPLACE, Shortcut::None, flag(EDIT_REPLACE), move |_| replace());
    menu.add(EDIT_UNDO, Shortcut::None, flag(EDIT_UNDO), move |_| undo());
    menu.add(EDIT_COPY, Shortcut::None, flag(EDIT_COPY), move |_| copy());
    menu.add(EDIT_PASTE, Shortcut::None, flag(EDIT_PASTE), move |_| paste());
}
