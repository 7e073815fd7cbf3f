use folio_types::{WindowId, WindowKind};

/// Which column of the desktop a shortcut sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutColumn {
    Left,
    Right,
}

/// Something on the desktop or dock that opens a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    pub kind: WindowKind,
    pub label: &'static str,
}

impl Launcher {
    const fn new(kind: WindowKind, label: &'static str) -> Self {
        Self { kind, label }
    }

    pub fn window_id(&self) -> Option<WindowId> {
        WindowId::fixed(self.kind)
    }

    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }
}

pub fn dock_items() -> Vec<Launcher> {
    vec![
        Launcher::new(WindowKind::Finder, "Finder"),
        Launcher::new(WindowKind::Projects, "Projects"),
    ]
}

pub fn desktop_shortcuts() -> Vec<(Launcher, ShortcutColumn)> {
    vec![
        (
            Launcher::new(WindowKind::Projects, "Projects"),
            ShortcutColumn::Left,
        ),
        (
            Launcher::new(WindowKind::Calculator, "Calculator"),
            ShortcutColumn::Right,
        ),
        (
            Launcher::new(WindowKind::Calendar, "Calendar"),
            ShortcutColumn::Right,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_launcher_targets_a_fixed_window() {
        let launchers = dock_items()
            .into_iter()
            .chain(desktop_shortcuts().into_iter().map(|(launcher, _)| launcher));
        for launcher in launchers {
            assert!(launcher.window_id().is_some(), "{} has no id", launcher.label);
        }
    }

    #[test]
    fn projects_sits_alone_on_the_left() {
        let left: Vec<_> = desktop_shortcuts()
            .into_iter()
            .filter(|(_, column)| *column == ShortcutColumn::Left)
            .map(|(launcher, _)| launcher.kind)
            .collect();
        assert_eq!(left, vec![WindowKind::Projects]);
    }
}
