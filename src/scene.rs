use glam::Vec3;

/// Closest the camera may get to its target, in world units.
pub const VIEW_DISTANCE_MIN: f32 = 1.5;

/// Mouse-y to view-distance scale used by the drag-to-zoom gesture.
pub const DRAG_SCALE: f32 = 3.0;

/// Mutable state of the demo scene.
///
/// One instance is owned by the application object and handed by
/// reference to the input handlers and the renderer; every mutation is
/// synchronous and visible to the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    /// Look-at target offset while the camera watches the cube.
    pub camera_center: Vec3,
    pub teapot_position: Vec3,
    /// Euler angles in degrees, each kept in [0, 360).
    pub teapot_rotation: Vec3,
    /// Distance from the eye to the target along the depth axis.
    pub view_distance: f32,
    pub fov_degrees: f32,
    pub lighting: bool,
    pub fill_polygons: bool,
    pub texturing: bool,
    /// true: orbit the cube; false: follow the teapot.
    pub look_at_cube: bool,
    /// Step applied per translation key press.
    pub move_step: f32,
    /// Degrees applied per rotation key press.
    pub rotate_step: f32,
    /// Degrees applied per field-of-view key press.
    pub fov_step: f32,
    drag_active: bool,
    drag_anchor_y: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            camera_center: Vec3::ZERO,
            teapot_position: Vec3::ZERO,
            teapot_rotation: Vec3::new(45.0, 0.0, 0.0),
            view_distance: 3.0 * VIEW_DISTANCE_MIN,
            fov_degrees: 65.0,
            lighting: true,
            fill_polygons: true,
            texturing: true,
            look_at_cube: true,
            move_step: 0.1,
            rotate_step: 3.0,
            fov_step: 2.5,
            drag_active: false,
            drag_anchor_y: 0.0,
        }
    }
}

/// Axis selector for the teapot translation and rotation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the camera-center offset by a signed number of steps on x/y.
    pub fn pan_camera(&mut self, steps_x: f32, steps_y: f32) {
        self.camera_center.x += steps_x * self.move_step;
        self.camera_center.y += steps_y * self.move_step;
    }

    /// Moves the teapot by a signed number of steps along one axis.
    pub fn move_teapot(&mut self, axis: Axis, steps: f32) {
        let delta = steps * self.move_step;
        match axis {
            Axis::X => self.teapot_position.x += delta,
            Axis::Y => self.teapot_position.y += delta,
            Axis::Z => self.teapot_position.z += delta,
        }
    }

    /// Rotates the teapot about one axis, wrapping into [0, 360).
    pub fn rotate_teapot(&mut self, axis: Axis, steps: f32) {
        let delta = steps * self.rotate_step;
        let angle = match axis {
            Axis::X => &mut self.teapot_rotation.x,
            Axis::Y => &mut self.teapot_rotation.y,
            Axis::Z => &mut self.teapot_rotation.z,
        };
        *angle = wrap_degrees(*angle + delta);
    }

    /// Changes the field of view; the projection must be recomputed after.
    pub fn adjust_fov(&mut self, steps: f32) {
        self.fov_degrees += steps * self.fov_step;
    }

    pub fn toggle_lighting(&mut self) -> bool {
        self.lighting = !self.lighting;
        self.lighting
    }

    pub fn toggle_fill_polygons(&mut self) -> bool {
        self.fill_polygons = !self.fill_polygons;
        self.fill_polygons
    }

    pub fn toggle_texturing(&mut self) -> bool {
        self.texturing = !self.texturing;
        self.texturing
    }

    pub fn toggle_look_target(&mut self) -> bool {
        self.look_at_cube = !self.look_at_cube;
        self.look_at_cube
    }

    /// Records a primary-button edge at the given window-space y.
    ///
    /// The anchor is refreshed on both press and release so a new drag
    /// always measures from the current view distance.
    pub fn set_drag(&mut self, pressed: bool, y: f32) {
        self.drag_active = pressed;
        self.drag_anchor_y = y - DRAG_SCALE * self.view_distance;
    }

    /// Updates the view distance from a mouse move while dragging.
    ///
    /// Returns true when the scene changed and a redraw is due.
    pub fn drag_to(&mut self, y: f32) -> bool {
        if !self.drag_active {
            return false;
        }
        self.view_distance = ((y - self.drag_anchor_y) / DRAG_SCALE).max(VIEW_DISTANCE_MIN);
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_active
    }
}

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_startup_state() {
        let scene = SceneState::default();
        assert_eq!(scene.teapot_rotation, Vec3::new(45.0, 0.0, 0.0));
        assert_eq!(scene.view_distance, 4.5);
        assert_eq!(scene.fov_degrees, 65.0);
        assert!(scene.lighting && scene.fill_polygons && scene.texturing);
        assert!(scene.look_at_cube);
        assert!(!scene.is_dragging());
    }

    #[test]
    fn rotation_wraps_into_half_open_range() {
        let mut scene = SceneState::default();
        scene.teapot_rotation.x = 0.0;
        scene.rotate_teapot(Axis::X, -1.0);
        assert_eq!(scene.teapot_rotation.x, 357.0);
        scene.rotate_teapot(Axis::X, 1.0);
        assert_eq!(scene.teapot_rotation.x, 0.0);
    }

    #[test]
    fn repeated_rotation_is_modular() {
        let mut scene = SceneState::default();
        scene.teapot_rotation.y = 0.0;
        for _ in 0..150 {
            scene.rotate_teapot(Axis::Y, 1.0);
        }
        let expected = (150.0 * scene.rotate_step) % 360.0;
        assert!((scene.teapot_rotation.y - expected).abs() < 1e-3);
        assert!(scene.teapot_rotation.y >= 0.0 && scene.teapot_rotation.y < 360.0);
    }

    #[test]
    fn drag_clamps_view_distance() {
        let mut scene = SceneState::default();
        scene.set_drag(true, 100.0);
        assert!(scene.drag_to(-10_000.0));
        assert_eq!(scene.view_distance, VIEW_DISTANCE_MIN);
    }

    #[test]
    fn drag_recovers_current_distance_at_anchor() {
        let mut scene = SceneState::default();
        let before = scene.view_distance;
        scene.set_drag(true, 240.0);
        // No motion yet: dragging back to the press position is a no-op.
        assert!(scene.drag_to(240.0));
        assert!((scene.view_distance - before).abs() < 1e-5);
    }

    #[test]
    fn motion_without_button_is_ignored() {
        let mut scene = SceneState::default();
        scene.set_drag(true, 10.0);
        scene.set_drag(false, 10.0);
        assert!(!scene.drag_to(500.0));
        assert_eq!(scene.view_distance, 4.5);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut scene = SceneState::default();
        let before = scene.clone();
        scene.toggle_lighting();
        scene.toggle_lighting();
        scene.toggle_fill_polygons();
        scene.toggle_fill_polygons();
        scene.toggle_texturing();
        scene.toggle_texturing();
        scene.toggle_look_target();
        scene.toggle_look_target();
        assert_eq!(scene, before);
    }

    #[test]
    fn wrap_degrees_handles_negatives() {
        assert_eq!(wrap_degrees(-3.0), 357.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }
}
