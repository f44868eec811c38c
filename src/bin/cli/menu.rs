use crate::app::Command;

pub enum MenuEntry {
    Action {
        label: &'static str,
        shortcut: &'static str,
        command: Command,
    },
    /// An action drawn with a check box; the app decides whether it is on.
    Toggle {
        label: &'static str,
        shortcut: &'static str,
        command: Command,
    },
    Submenu {
        label: &'static str,
        entries: &'static [MenuEntry],
    },
    Separator,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Action { label, .. }
            | MenuEntry::Toggle { label, .. }
            | MenuEntry::Submenu { label, .. } => label,
            MenuEntry::Separator => "",
        }
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            MenuEntry::Action { shortcut, .. } | MenuEntry::Toggle { shortcut, .. } => shortcut,
            _ => "",
        }
    }

    fn selectable(&self) -> bool {
        !matches!(self, MenuEntry::Separator)
    }
}

pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

const FONT_SIZE_ENTRIES: &[MenuEntry] = &[
    MenuEntry::Action {
        label: "Increase",
        shortcut: "Ctrl+Up",
        command: Command::IncreaseFontSize,
    },
    MenuEntry::Action {
        label: "Decrease",
        shortcut: "Ctrl+Down",
        command: Command::DecreaseFontSize,
    },
    MenuEntry::Action {
        label: "Set Font Size",
        shortcut: "",
        command: Command::SetFontSize,
    },
];

pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        entries: &[
            MenuEntry::Action {
                label: "New",
                shortcut: "Ctrl+N",
                command: Command::New,
            },
            MenuEntry::Action {
                label: "Open",
                shortcut: "Ctrl+O",
                command: Command::Open,
            },
            MenuEntry::Action {
                label: "Save",
                shortcut: "Ctrl+S",
                command: Command::Save,
            },
            MenuEntry::Action {
                label: "Save As",
                shortcut: "Alt+S",
                command: Command::SaveAs,
            },
            MenuEntry::Separator,
            MenuEntry::Action {
                label: "Exit",
                shortcut: "Ctrl+Q",
                command: Command::Exit,
            },
        ],
    },
    Menu {
        title: "Edit",
        entries: &[
            MenuEntry::Action {
                label: "Undo",
                shortcut: "Ctrl+Z",
                command: Command::Undo,
            },
            MenuEntry::Action {
                label: "Redo",
                shortcut: "Ctrl+Y",
                command: Command::Redo,
            },
        ],
    },
    Menu {
        title: "Run",
        entries: &[MenuEntry::Action {
            label: "Run Code",
            shortcut: "F5",
            command: Command::RunCode,
        }],
    },
    Menu {
        title: "View",
        entries: &[
            MenuEntry::Toggle {
                label: "Dark Mode",
                shortcut: "Ctrl+D",
                command: Command::ToggleDarkMode,
            },
            MenuEntry::Submenu {
                label: "Font Size",
                entries: FONT_SIZE_ENTRIES,
            },
        ],
    },
];

/// Which menu is pulled down and which entry is highlighted. `submenu` holds
/// the highlighted row inside the open submenu, if any.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MenuState {
    pub open: bool,
    pub menu: usize,
    pub entry: usize,
    pub submenu: Option<usize>,
}

impl MenuState {
    pub fn open(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn current_menu(&self) -> &'static Menu {
        &MENUS[self.menu]
    }

    pub fn open_submenu_entries(&self) -> Option<&'static [MenuEntry]> {
        self.submenu?;
        match &self.current_menu().entries[self.entry] {
            MenuEntry::Submenu { entries, .. } => Some(entries),
            _ => None,
        }
    }

    pub fn next_menu(&mut self) {
        self.menu = (self.menu + 1) % MENUS.len();
        self.entry = 0;
        self.submenu = None;
    }

    pub fn prev_menu(&mut self) {
        self.menu = (self.menu + MENUS.len() - 1) % MENUS.len();
        self.entry = 0;
        self.submenu = None;
    }

    pub fn move_down(&mut self) {
        self.step(1);
    }

    pub fn move_up(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let entries = self
            .open_submenu_entries()
            .unwrap_or(self.current_menu().entries);
        let current = self.submenu.unwrap_or(self.entry);
        let len = entries.len() as isize;
        let mut idx = current as isize;
        for _ in 0..len {
            idx = (idx + delta).rem_euclid(len);
            if entries[idx as usize].selectable() {
                break;
            }
        }
        match self.submenu {
            Some(_) => self.submenu = Some(idx as usize),
            None => self.entry = idx as usize,
        }
    }

    /// Right arrow: descend into a submenu, otherwise move to the next menu.
    pub fn right(&mut self) {
        if self.submenu.is_none()
            && matches!(self.current_menu().entries[self.entry], MenuEntry::Submenu { .. })
        {
            self.submenu = Some(0);
        } else {
            self.next_menu();
        }
    }

    /// Left arrow: leave a submenu, otherwise move to the previous menu.
    pub fn left(&mut self) {
        if self.submenu.is_some() {
            self.submenu = None;
        } else {
            self.prev_menu();
        }
    }

    pub fn back(&mut self) {
        if self.submenu.is_some() {
            self.submenu = None;
        } else {
            self.close();
        }
    }

    /// Enter: returns the command to run and closes the menu, or opens the
    /// highlighted submenu.
    pub fn activate(&mut self) -> Option<Command> {
        let entry = match self.open_submenu_entries() {
            Some(entries) => &entries[self.submenu.unwrap_or(0)],
            None => &self.current_menu().entries[self.entry],
        };
        match entry {
            MenuEntry::Action { command, .. } | MenuEntry::Toggle { command, .. } => {
                let command = *command;
                self.close();
                Some(command)
            }
            MenuEntry::Submenu { .. } => {
                self.submenu = Some(0);
                None
            }
            MenuEntry::Separator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_index(title: &str) -> usize {
        MENUS.iter().position(|m| m.title == title).unwrap()
    }

    #[test]
    fn test_every_command_is_reachable() {
        fn collect(entries: &[MenuEntry], out: &mut Vec<Command>) {
            for entry in entries {
                match entry {
                    MenuEntry::Action { command, .. } | MenuEntry::Toggle { command, .. } => {
                        out.push(*command)
                    }
                    MenuEntry::Submenu { entries, .. } => collect(entries, out),
                    MenuEntry::Separator => {}
                }
            }
        }
        let mut commands = Vec::new();
        for menu in MENUS {
            collect(menu.entries, &mut commands);
        }
        for command in Command::ALL {
            assert!(commands.contains(command), "{:?} missing from menus", command);
        }
    }

    #[test]
    fn test_navigation_skips_separator() {
        let mut state = MenuState::default();
        state.open();
        // File: New, Open, Save, Save As, ---, Exit
        for _ in 0..3 {
            state.move_down();
        }
        assert_eq!(state.entry, 3);
        state.move_down();
        assert_eq!(state.entry, 5);
        state.move_down();
        assert_eq!(state.entry, 0);
        state.move_up();
        assert_eq!(state.entry, 5);
    }

    #[test]
    fn test_activate_closes_menu() {
        let mut state = MenuState::default();
        state.open();
        state.move_down();
        assert_eq!(state.activate(), Some(Command::Open));
        assert!(!state.open);
    }

    #[test]
    fn test_font_size_submenu() {
        let mut state = MenuState::default();
        state.open();
        state.menu = menu_index("View");
        state.move_down();
        assert_eq!(state.current_menu().entries[state.entry].label(), "Font Size");

        assert_eq!(state.activate(), None);
        assert_eq!(state.submenu, Some(0));
        state.move_down();
        state.move_down();
        assert_eq!(state.activate(), Some(Command::SetFontSize));
    }

    #[test]
    fn test_left_leaves_submenu_before_switching_menu() {
        let mut state = MenuState::default();
        state.open();
        state.menu = menu_index("View");
        state.entry = 1;
        state.right();
        assert_eq!(state.submenu, Some(0));
        state.left();
        assert_eq!(state.submenu, None);
        assert_eq!(state.menu, menu_index("View"));
        state.left();
        assert_eq!(state.menu, menu_index("Run"));
    }

    #[test]
    fn test_back_closes_in_two_steps_from_submenu() {
        let mut state = MenuState::default();
        state.open();
        state.menu = menu_index("View");
        state.entry = 1;
        state.activate();
        state.back();
        assert!(state.open);
        state.back();
        assert!(!state.open);
    }
}
