//! Maps keyboard, mouse, and menu events onto scene-state mutations.
//!
//! Every handler is a pure function over [`SceneState`]; the returned
//! directive tells the windowing shell what to do next. Keeping the
//! mapping free of toolkit types makes the whole event surface testable
//! without a window.

use crate::scene::{Axis, SceneState};

/// A key press as the shell reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKey {
    /// A printable character; letters may arrive in either case.
    Char(char),
    Escape,
}

/// What the shell must do after a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Event did not match a binding; nothing to do.
    Ignored,
    /// Scene changed; request a redraw.
    Redraw,
    /// Field of view changed; the projection depends on it.
    Reproject,
    /// Terminate the event loop (process exits 0).
    Exit,
}

/// Entries of the right-click context menu, also reachable from the
/// keyboard shortcuts `l`, `p`, `t`, and Escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ToggleLighting,
    TogglePolygonFill,
    ToggleTexturing,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 4] = [
        MenuCommand::ToggleLighting,
        MenuCommand::TogglePolygonFill,
        MenuCommand::ToggleTexturing,
        MenuCommand::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::ToggleLighting => "Toggle lighting",
            MenuCommand::TogglePolygonFill => "Toggle polygon fill",
            MenuCommand::ToggleTexturing => "Toggle texturing",
            MenuCommand::Exit => "Exit demo",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            MenuCommand::ToggleLighting => "l",
            MenuCommand::TogglePolygonFill => "p",
            MenuCommand::ToggleTexturing => "t",
            MenuCommand::Exit => "Esc",
        }
    }
}

/// Applies a context-menu selection.
pub fn select_from_menu(scene: &mut SceneState, command: MenuCommand) -> Directive {
    match command {
        MenuCommand::ToggleLighting => {
            scene.toggle_lighting();
        }
        MenuCommand::TogglePolygonFill => {
            scene.toggle_fill_polygons();
        }
        MenuCommand::ToggleTexturing => {
            scene.toggle_texturing();
        }
        MenuCommand::Exit => return Directive::Exit,
    }
    Directive::Redraw
}

/// Applies a key press to the scene.
pub fn apply_key(scene: &mut SceneState, key: DemoKey) -> Directive {
    let ch = match key {
        DemoKey::Escape => return Directive::Exit,
        DemoKey::Char(ch) => ch.to_ascii_lowercase(),
    };
    match ch {
        // Camera-center pan.
        'w' => scene.pan_camera(0.0, 1.0),
        'a' => scene.pan_camera(-1.0, 0.0),
        's' => scene.pan_camera(0.0, -1.0),
        'd' => scene.pan_camera(1.0, 0.0),
        // Teapot translation.
        'u' => scene.move_teapot(Axis::Y, 1.0),
        'h' => scene.move_teapot(Axis::X, -1.0),
        'j' => scene.move_teapot(Axis::Y, -1.0),
        'k' => scene.move_teapot(Axis::X, 1.0),
        'y' => scene.move_teapot(Axis::Z, -1.0),
        'i' => scene.move_teapot(Axis::Z, 1.0),
        // Teapot rotation, one Euler axis per key pair.
        '3' => scene.rotate_teapot(Axis::X, -1.0),
        '4' => scene.rotate_teapot(Axis::X, 1.0),
        '5' => scene.rotate_teapot(Axis::Y, -1.0),
        '6' => scene.rotate_teapot(Axis::Y, 1.0),
        '7' => scene.rotate_teapot(Axis::Z, -1.0),
        '8' => scene.rotate_teapot(Axis::Z, 1.0),
        // Field of view; narrower on '+', wider on '-'.
        '+' => {
            scene.adjust_fov(-1.0);
            return Directive::Reproject;
        }
        '-' => {
            scene.adjust_fov(1.0);
            return Directive::Reproject;
        }
        '1' => {
            scene.toggle_look_target();
        }
        'l' => return select_from_menu(scene, MenuCommand::ToggleLighting),
        'p' => return select_from_menu(scene, MenuCommand::TogglePolygonFill),
        't' => return select_from_menu(scene, MenuCommand::ToggleTexturing),
        _ => return Directive::Ignored,
    }
    Directive::Redraw
}

/// Handles a primary-mouse-button edge at window-space `y`.
pub fn primary_button(scene: &mut SceneState, pressed: bool, y: f32) {
    scene.set_drag(pressed, y);
}

/// Handles cursor motion; returns true when a redraw is due.
pub fn cursor_moved(scene: &mut SceneState, y: f32) -> bool {
    scene.drag_to(y)
}
