//! CPU-side mesh builders for the two objects in the scene.
//!
//! The cube carries per-face texture coordinates spanning [0, 1]^2; the
//! teapot stands in for a toolkit solid primitive and is generated from
//! a Bezier profile of revolution (body, lid) plus two swept tubes
//! (spout, handle). Everything is deterministic and built once at
//! startup.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use std::f32::consts::TAU;

/// Vertex layout shared by every mesh the renderer draws.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Appends another mesh, rebasing its indices.
    pub fn merge(&mut self, other: Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Scales every vertex position about the origin.
    pub fn scaled(mut self, factor: f32) -> Self {
        for vertex in &mut self.vertices {
            for component in &mut vertex.position {
                *component *= factor;
            }
        }
        self
    }
}

/// Axis-aligned cube centered on the origin.
///
/// Six quads of four vertices each so every face gets its own normals
/// and a full [0, 1]^2 texture-coordinate patch.
pub fn cube(size: f32) -> Mesh {
    let h = size / 2.0;
    // (corner positions, outward normal) per face; corners wind
    // counter-clockwise seen from outside, uv follows the winding.
    let faces: [([Vec3; 4], Vec3); 6] = [
        (
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
            Vec3::Z,
        ),
        (
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
            Vec3::NEG_Z,
        ),
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::NEG_X,
        ),
        (
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
            Vec3::X,
        ),
        (
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::Y,
        ),
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
            Vec3::NEG_Y,
        ),
    ];
    const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::default();
    for (corners, normal) in faces {
        let base = mesh.vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(FACE_UVS) {
            mesh.vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
                uv,
            });
        }
        mesh.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Procedural solid teapot of roughly unit body radius, sitting on y = 0,
/// scaled by `size`.
pub fn teapot(size: f32) -> Mesh {
    let mut mesh = body();
    mesh.merge(lid());
    mesh.merge(spout());
    mesh.merge(handle());
    mesh.scaled(size)
}

const REVOLVE_SEGMENTS: u32 = 32;
const PROFILE_SEGMENTS: u32 = 24;
const TUBE_SEGMENTS: u32 = 16;
const SWEEP_SEGMENTS: u32 = 16;

/// Pot body: rounded belly from base to rim, revolved about +Y.
fn body() -> Mesh {
    let profile = Profile(vec![
        [
            Vec2::new(0.001, 0.0),
            Vec2::new(0.55, 0.0),
            Vec2::new(1.05, 0.2),
            Vec2::new(1.0, 0.6),
        ],
        [
            Vec2::new(1.0, 0.6),
            Vec2::new(0.95, 1.0),
            Vec2::new(0.65, 1.08),
            Vec2::new(0.6, 1.15),
        ],
    ]);
    revolve(&profile)
}

/// Lid sloping inward from the rim up to the knob tip.
fn lid() -> Mesh {
    let profile = Profile(vec![
        [
            Vec2::new(0.6, 1.15),
            Vec2::new(0.35, 1.22),
            Vec2::new(0.2, 1.2),
            Vec2::new(0.15, 1.3),
        ],
        [
            Vec2::new(0.15, 1.3),
            Vec2::new(0.12, 1.36),
            Vec2::new(0.1, 1.38),
            Vec2::new(0.001, 1.45),
        ],
    ]);
    revolve(&profile)
}

fn spout() -> Mesh {
    let path = [
        Vec3::new(0.95, 0.45, 0.0),
        Vec3::new(1.5, 0.5, 0.0),
        Vec3::new(1.6, 0.85, 0.0),
        Vec3::new(1.85, 1.05, 0.0),
    ];
    sweep_tube(path, 0.16, 0.07)
}

fn handle() -> Mesh {
    let path = [
        Vec3::new(-0.9, 0.95, 0.0),
        Vec3::new(-1.45, 1.1, 0.0),
        Vec3::new(-1.55, 0.45, 0.0),
        Vec3::new(-0.92, 0.35, 0.0),
    ];
    sweep_tube(path, 0.08, 0.06)
}

/// Piecewise cubic Bezier profile in (radius, height) coordinates.
struct Profile(Vec<[Vec2; 4]>);

impl Profile {
    /// Evaluates the chained segments for t in [0, 1].
    fn at(&self, t: f32) -> Vec2 {
        let count = self.0.len() as f32;
        let scaled = (t.clamp(0.0, 1.0) * count).min(count - 1e-4);
        let segment = scaled.floor() as usize;
        cubic_bezier(&self.0[segment], scaled - segment as f32)
    }
}

fn cubic_bezier(p: &[Vec2; 4], t: f32) -> Vec2 {
    let s = 1.0 - t;
    p[0] * (s * s * s) + p[1] * (3.0 * s * s * t) + p[2] * (3.0 * s * t * t) + p[3] * (t * t * t)
}

fn cubic_bezier3(p: &[Vec3; 4], t: f32) -> Vec3 {
    let s = 1.0 - t;
    p[0] * (s * s * s) + p[1] * (3.0 * s * s * t) + p[2] * (3.0 * s * t * t) + p[3] * (t * t * t)
}

fn cubic_bezier3_tangent(p: &[Vec3; 4], t: f32) -> Vec3 {
    let s = 1.0 - t;
    (p[1] - p[0]) * (3.0 * s * s) + (p[2] - p[1]) * (6.0 * s * t) + (p[3] - p[2]) * (3.0 * t * t)
}

/// Revolves a profile about the +Y axis into a closed surface.
fn revolve(profile: &Profile) -> Mesh {
    parametric_grid(REVOLVE_SEGMENTS, PROFILE_SEGMENTS, |u, v| {
        let angle = u * TAU;
        let point = profile.at(v);
        Vec3::new(point.x * angle.cos(), point.y, point.x * angle.sin())
    })
}

/// Sweeps a circular cross-section along a Bezier path lying in the
/// xy-plane, tapering the radius from `r0` to `r1`.
fn sweep_tube(path: [Vec3; 4], r0: f32, r1: f32) -> Mesh {
    parametric_grid(TUBE_SEGMENTS, SWEEP_SEGMENTS, move |u, v| {
        let center = cubic_bezier3(&path, v);
        let tangent = cubic_bezier3_tangent(&path, v).normalize();
        // The path never runs parallel to z, so this frame is stable.
        let side = tangent.cross(Vec3::Z).normalize();
        let radius = r0 + (r1 - r0) * v;
        let angle = u * TAU;
        center + (side * angle.cos() + Vec3::Z * angle.sin()) * radius
    })
}

/// Tessellates a parametric surface over [0, 1]^2 into an indexed grid.
///
/// Normals come from the cross product of finite-difference partials,
/// so the callback must be smooth and free of degenerate points.
fn parametric_grid(u_segments: u32, v_segments: u32, f: impl Fn(f32, f32) -> Vec3) -> Mesh {
    const EPS: f32 = 1e-3;
    let mut mesh = Mesh::default();

    for vi in 0..=v_segments {
        let v = vi as f32 / v_segments as f32;
        for ui in 0..=u_segments {
            let u = ui as f32 / u_segments as f32;
            let du = f(u + EPS, v) - f(u - EPS, v);
            let dv = f(u, (v + EPS).min(1.0)) - f(u, (v - EPS).max(0.0));
            let normal = dv.cross(du).normalize_or(Vec3::Y);
            mesh.vertices.push(Vertex {
                position: f(u, v).to_array(),
                normal: normal.to_array(),
                uv: [u, v],
            });
        }
    }

    let stride = u_segments + 1;
    for vi in 0..v_segments {
        for ui in 0..u_segments {
            let a = vi * stride + ui;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            mesh.indices.extend([a, c, b, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_range(mesh: &Mesh) {
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn cube_has_six_quads() {
        let mesh = cube(1.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn cube_positions_span_the_unit_box() {
        let mesh = cube(1.0);
        for vertex in &mesh.vertices {
            for component in vertex.position {
                assert!((component.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn every_cube_face_covers_the_full_uv_patch() {
        let mesh = cube(1.0);
        for face in mesh.vertices.chunks(4) {
            let us: Vec<f32> = face.iter().map(|v| v.uv[0]).collect();
            let vs: Vec<f32> = face.iter().map(|v| v.uv[1]).collect();
            assert_eq!(us.iter().cloned().fold(f32::MAX, f32::min), 0.0);
            assert_eq!(us.iter().cloned().fold(f32::MIN, f32::max), 1.0);
            assert_eq!(vs.iter().cloned().fold(f32::MAX, f32::min), 0.0);
            assert_eq!(vs.iter().cloned().fold(f32::MIN, f32::max), 1.0);
        }
    }

    #[test]
    fn cube_normals_match_their_face() {
        let mesh = cube(2.0);
        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            // The face's outward axis is also the largest position axis.
            let p = Vec3::from_array(vertex.position);
            assert!((p.dot(n) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn teapot_is_well_formed() {
        let mesh = teapot(0.3);
        assert!(!mesh.vertices.is_empty());
        assert_indices_in_range(&mesh);
        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-3, "normal {n:?}");
        }
    }

    #[test]
    fn teapot_has_spout_and_handle() {
        let mesh = teapot(1.0);
        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        let min_x = mesh
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert!(max_x > 1.5, "spout should reach past the body, got {max_x}");
        assert!(min_x < -1.3, "handle should reach out back, got {min_x}");
    }

    #[test]
    fn teapot_sits_on_the_ground_plane() {
        let mesh = teapot(1.0);
        let min_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min);
        assert!(min_y > -1e-3);
    }

    #[test]
    fn teapot_generation_is_deterministic() {
        assert_eq!(teapot(0.3), teapot(0.3));
    }
}
