//! Right-click context menu, drawn as an egui overlay.
//!
//! The menu model (open flag + anchor position) lives here; the four
//! entries and their dispatch live in [`crate::input`], shared with the
//! keyboard shortcuts.

use glam::Vec2;

use crate::input::MenuCommand;

/// State of the popup menu attached to the right mouse button.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    open: bool,
    anchor: Vec2,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the menu at a window-space cursor position.
    pub fn open_at(&mut self, position: Vec2) {
        self.open = true;
        self.anchor = position;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Draws the menu and returns the entry clicked this frame, if any.
    ///
    /// Clicking an entry or anywhere outside the popup closes it.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<MenuCommand> {
        if !self.open {
            return None;
        }
        let mut selected = None;
        let response = egui::Area::new(egui::Id::new("context-menu"))
            .fixed_pos(egui::pos2(self.anchor.x, self.anchor.y))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::menu(ui.style()).show(ui, |ui| {
                    ui.set_min_width(170.0);
                    for command in MenuCommand::ALL {
                        let entry = format!("{}\t{}", command.label(), command.shortcut());
                        if ui.button(entry).clicked() {
                            selected = Some(command);
                        }
                    }
                });
            })
            .response;
        if selected.is_some() || response.clicked_elsewhere() {
            self.close();
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_the_cursor_and_closes() {
        let mut menu = ContextMenu::new();
        assert!(!menu.is_open());
        menu.open_at(Vec2::new(40.0, 60.0));
        assert!(menu.is_open());
        assert_eq!(menu.anchor(), Vec2::new(40.0, 60.0));
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn reopening_moves_the_anchor() {
        let mut menu = ContextMenu::new();
        menu.open_at(Vec2::new(1.0, 2.0));
        menu.open_at(Vec2::new(3.0, 4.0));
        assert_eq!(menu.anchor(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn closed_menu_draws_nothing() {
        let mut menu = ContextMenu::new();
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            assert_eq!(menu.ui(ctx), None);
        });
        assert!(output.shapes.is_empty());
    }

    #[test]
    fn open_menu_emits_shapes() {
        let mut menu = ContextMenu::new();
        menu.open_at(Vec2::new(10.0, 10.0));
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            menu.ui(ctx);
        });
        assert!(!output.shapes.is_empty());
        assert!(menu.is_open());
    }
}
