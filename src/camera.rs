use glam::{Mat4, Vec3};

use crate::scene::SceneState;

pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 1000.0;

/// Fixed world-space position of the single light, set every frame.
pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 30.0, 10.0);

/// Eye offset relative to the watched object on x/y.
const EYE_OFFSET_X: f32 = 2.0;
const EYE_OFFSET_Y: f32 = 1.0;

/// Camera parameters consumed by the renderer's uniform buffer.
#[derive(Clone, Debug)]
pub struct CameraParams {
    pub view_proj: Mat4,
    pub position: Vec3,
}

/// Lighting state consumed by the renderer's uniform buffer.
#[derive(Clone, Debug)]
pub struct LightParams {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            position: LIGHT_POSITION,
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// Eye position for the current look-at selector.
pub fn eye_position(scene: &SceneState) -> Vec3 {
    let base = if scene.look_at_cube {
        Vec3::ZERO
    } else {
        scene.teapot_position
    };
    base + Vec3::new(EYE_OFFSET_X, EYE_OFFSET_Y, scene.view_distance)
}

/// Look-at target for the current selector.
///
/// Watching the cube the camera aims at the adjustable center offset;
/// following the teapot it aims at the teapot shifted by the same x
/// offset the eye carries.
pub fn look_target(scene: &SceneState) -> Vec3 {
    if scene.look_at_cube {
        scene.camera_center
    } else {
        scene.teapot_position + Vec3::new(EYE_OFFSET_X, 0.0, 0.0)
    }
}

/// View matrix for the current scene state, up vector +Y.
pub fn view_matrix(scene: &SceneState) -> Mat4 {
    Mat4::look_at_rh(eye_position(scene), look_target(scene), Vec3::Y)
}

/// Perspective projection from the current field of view and viewport
/// aspect ratio, with the fixed near/far planes.
pub fn projection_matrix(fov_degrees: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(
        fov_degrees.to_radians(),
        aspect.max(0.01),
        NEAR_PLANE,
        FAR_PLANE,
    )
}

/// Combined camera parameters for one frame.
pub fn camera_params(scene: &SceneState, aspect: f32) -> CameraParams {
    let view = view_matrix(scene);
    let projection = projection_matrix(scene.fov_degrees, aspect);
    CameraParams {
        view_proj: projection * view,
        position: eye_position(scene),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn cube_view_uses_center_offset() {
        let mut scene = SceneState::default();
        scene.camera_center = Vec3::new(0.5, -0.25, 0.0);
        assert_eq!(eye_position(&scene), Vec3::new(2.0, 1.0, 4.5));
        assert_eq!(look_target(&scene), scene.camera_center);
    }

    #[test]
    fn teapot_view_follows_the_teapot() {
        let mut scene = SceneState::default();
        scene.look_at_cube = false;
        scene.teapot_position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(eye_position(&scene), Vec3::new(3.0, 3.0, 3.0 + 4.5));
        assert_eq!(look_target(&scene), Vec3::new(3.0, 2.0, 3.0));
    }

    #[test]
    fn view_matrix_centers_the_target() {
        let scene = SceneState::default();
        let view = view_matrix(&scene);
        let target = look_target(&scene).extend(1.0);
        let in_view = view * target;
        // The target sits on the view-space -Z axis.
        assert!(in_view.x.abs() < 1e-5);
        assert!(in_view.y.abs() < 1e-5);
        assert!(in_view.z < 0.0);
    }

    #[test]
    fn projection_depends_only_on_fov_and_aspect() {
        // Resize-then-fov and fov-then-resize reach the same matrix.
        let a = projection_matrix(65.0 - 2.5, 800.0 / 600.0);
        let b = projection_matrix(62.5, 800.0 / 600.0);
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let projection = projection_matrix(65.0, 1.0);
        let on_near = projection * Vec4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
        assert!((on_near.z / on_near.w).abs() < 1e-5);
    }
}
