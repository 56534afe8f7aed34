//! # Primitive Shape Generation
//!
//! Generators for the primitive shapes the scene is assembled from. Rings are
//! sampled at `2π·i/N` for `i` in `[0, N]`, so a ring of `N` segments carries
//! `N + 1` samples and its first and last samples coincide.

use super::{color::Color, Mesh, Topology};
use crate::error::GeometryError;
use std::f64::consts::PI;

/// Segment count used for every disk and cylinder ring in the scene.
pub const RING_SEGMENTS: u32 = 64;

/// Order in which rim samples are emitted around a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RimWinding {
    /// `i` ascending, facing `+z`
    CounterClockwise,
    /// `i` descending, facing `-z`
    Clockwise,
}

/// Coloring rule for a disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiskStyle {
    /// Every vertex has the same color.
    Plain(Color),
    /// Rim sample `i` gets hue `i/N`.
    Rainbow { center: Color },
    /// Rim sample `i` gets hue `i + offset`, so only the offset's fraction shows.
    OffsetHue { center: Color, offset: f32 },
}

impl DiskStyle {
    fn center(&self) -> Color {
        match *self {
            DiskStyle::Plain(color) => color,
            DiskStyle::Rainbow { center } | DiskStyle::OffsetHue { center, .. } => center,
        }
    }

    /// Color of rim sample `i` out of `segments`.
    pub fn rim(&self, i: u32, segments: u32) -> Color {
        match *self {
            DiskStyle::Plain(color) => color,
            DiskStyle::Rainbow { .. } => Color::hue(ring_hue(i, segments)),
            DiskStyle::OffsetHue { offset, .. } => Color::hue(i as f32 + offset),
        }
    }
}

/// Hue of ring sample `i`: one full cycle around the ring.
pub fn ring_hue(i: u32, segments: u32) -> f32 {
    i as f32 / segments as f32
}

/// Unit-circle point of ring sample `i`.
pub fn ring_point(i: u32, segments: u32) -> (f32, f32) {
    let angle = 2.0 * PI * i as f64 / segments as f64;
    (angle.cos() as f32, angle.sin() as f32)
}

fn validate(radius: f32, segments: u32) -> Result<(), GeometryError> {
    if segments == 0 {
        return Err(GeometryError::ZeroSegments);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::DegenerateRadius(radius));
    }
    Ok(())
}

/// Generate a disk as a triangle fan in the plane `z`
///
/// # Arguments
/// * `radius` - Rim radius
/// * `segments` - Number of rim segments; the rim carries `segments + 1` samples
/// * `z` - Height of the disk plane
/// * `winding` - Emission order of the rim samples
/// * `style` - Center and rim coloring
///
/// Returns a fan whose first vertex is the center.
pub fn generate_disk(
    radius: f32,
    segments: u32,
    z: f32,
    winding: RimWinding,
    style: DiskStyle,
) -> Result<Mesh, GeometryError> {
    validate(radius, segments)?;

    let normal = match winding {
        RimWinding::CounterClockwise => [0.0, 0.0, 1.0],
        RimWinding::Clockwise => [0.0, 0.0, -1.0],
    };

    let mut mesh = Mesh::new(Topology::TriangleFan);
    mesh.push_colored([0.0, 0.0, z], normal, style.center());

    let mut emit = |i: u32| {
        let (x, y) = ring_point(i, segments);
        mesh.push_colored([radius * x, radius * y, z], normal, style.rim(i, segments));
    };
    match winding {
        RimWinding::CounterClockwise => (0..=segments).for_each(&mut emit),
        RimWinding::Clockwise => (0..=segments).rev().for_each(&mut emit),
    }

    Ok(mesh)
}

/// The three parts of a capped cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderGeometry {
    /// White side wall
    pub side: Mesh,
    /// Rainbow cap at `z = 1` with a yellow center
    pub top: Mesh,
    /// Plain white cap at `z = -1`
    pub bottom: Mesh,
}

/// Generate a capped cylinder spanning `z = -1` to `z = 1`
///
/// The side wall is a strip of `segments + 1` top/bottom pairs with outward
/// radial normals. Non-uniform sizing is left to the enclosing transform.
pub fn generate_cylinder(radius: f32, segments: u32) -> Result<CylinderGeometry, GeometryError> {
    validate(radius, segments)?;

    let mut side = Mesh::new(Topology::TriangleStrip);
    for i in 0..=segments {
        let (x, y) = ring_point(i, segments);
        let normal = [x, y, 0.0];
        side.push_colored([radius * x, radius * y, 1.0], normal, Color::WHITE);
        side.push_colored([radius * x, radius * y, -1.0], normal, Color::WHITE);
    }

    let top = generate_disk(
        radius,
        segments,
        1.0,
        RimWinding::CounterClockwise,
        DiskStyle::Rainbow {
            center: Color::YELLOW,
        },
    )?;
    let bottom = generate_disk(
        radius,
        segments,
        -1.0,
        RimWinding::Clockwise,
        DiskStyle::Plain(Color::WHITE),
    )?;

    Ok(CylinderGeometry { side, top, bottom })
}

/// Generate an axis-aligned quad spanning `±half_extent` in the plane `z`
///
/// The quad carries no colors of its own; it takes the draw call's color.
pub fn generate_quad(half_extent: f32, z: f32) -> Result<Mesh, GeometryError> {
    validate(half_extent, 1)?;
    Ok(quad(half_extent, z))
}

/// Unit square at `z = 0.5`, used for legs and windows.
pub fn generate_square() -> Mesh {
    quad(0.5, 0.5)
}

/// Quad spanning `±1` at `z = 1`, used for the ground.
pub fn generate_flat() -> Mesh {
    quad(1.0, 1.0)
}

/// Uncolored fan over `points` in the order given.
///
/// All vertices share the polygon's Newell normal; degenerate polygons fall
/// back to `+z`.
pub fn generate_polygon(points: &[[f32; 3]]) -> Mesh {
    let mut n = [0.0f32; 3];
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        n[0] += (a[1] - b[1]) * (a[2] + b[2]);
        n[1] += (a[2] - b[2]) * (a[0] + b[0]);
        n[2] += (a[0] - b[0]) * (a[1] + b[1]);
    }
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    let normal = if len > f32::EPSILON {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, 1.0]
    };

    let mut mesh = Mesh::new(Topology::TriangleFan);
    for &p in points {
        mesh.push(p, normal);
    }
    mesh
}

fn quad(half_extent: f32, z: f32) -> Mesh {
    let h = half_extent;
    let mut mesh = Mesh::new(Topology::TriangleFan);
    for [x, y] in [[-h, -h], [h, -h], [h, h], [-h, h]] {
        mesh.push([x, y, z], [0.0, 0.0, 1.0]);
    }
    mesh
}

/// Parameters of a solid sphere: radius plus slice and stack subdivisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSpec {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
}

impl SphereSpec {
    pub fn new(radius: f32, slices: u32, stacks: u32) -> Result<Self, GeometryError> {
        validate(radius, slices.min(stacks))?;
        Ok(Self {
            radius,
            slices,
            stacks,
        })
    }
}

/// Indexed triangle-list geometry of a unit sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

/// Generate a unit UV sphere with its poles on the z axis
///
/// # Arguments
/// * `slices` - Number of subdivisions around the z axis
/// * `stacks` - Number of subdivisions along the z axis
pub fn generate_sphere(slices: u32, stacks: u32) -> Result<SphereGeometry, GeometryError> {
    if slices == 0 || stacks == 0 {
        return Err(GeometryError::ZeroSegments);
    }

    let mut data = SphereGeometry {
        positions: Vec::new(),
        normals: Vec::new(),
        indices: Vec::new(),
    };

    for stack in 0..=stacks {
        let theta = PI * stack as f64 / stacks as f64;
        let (ring, z) = (theta.sin(), theta.cos());
        for slice in 0..=slices {
            let phi = 2.0 * PI * slice as f64 / slices as f64;
            let p = [
                (ring * phi.cos()) as f32,
                (ring * phi.sin()) as f32,
                z as f32,
            ];
            data.positions.push(p);
            data.normals.push(p);
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let first = stack * (slices + 1) + slice;
            let second = first + slices + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    Ok(data)
}
