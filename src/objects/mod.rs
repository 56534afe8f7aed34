//! # Composite Objects
//!
//! Builders that assemble primitives into the recognizable objects of the
//! scene. Every builder draws at the transform it is handed and derives its
//! children's transforms from it, so nothing it does is visible to the
//! caller or to siblings drawn afterwards.
//!
//! The meshes builders share are generated once into a [`MeshLibrary`];
//! builders themselves only hold `Arc` handles and sphere parameters, which
//! keeps drawing a frame infallible.

pub mod alien;
pub mod cow;
pub mod house;
pub mod props;
pub mod ufo;

use std::sync::Arc;

use crate::error::SceneError;
use crate::gfx::geometry::{
    generate_cylinder, generate_disk, generate_flat, generate_square, Color, DiskStyle, Mesh,
    RimWinding, RING_SEGMENTS,
};

pub use alien::Alien;
pub use cow::{Cow, Facing};
pub use house::Building;
pub use props::{Prop, PropStyle};
pub use ufo::Ufo;

/// Prebuilt meshes shared by the builders.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    /// Unit disk at `z = -1`, rainbow rim, white center. Used for cow spots and stars.
    pub spot: Arc<Mesh>,
    /// Unit square at `z = 0.5`
    pub square: Arc<Mesh>,
    /// Ground quad at `z = 1`
    pub flat: Arc<Mesh>,
    pub cylinder_side: Arc<Mesh>,
    pub cylinder_top: Arc<Mesh>,
    pub cylinder_bottom: Arc<Mesh>,
}

impl MeshLibrary {
    pub fn new() -> Result<Self, SceneError> {
        let spot = generate_disk(
            1.0,
            RING_SEGMENTS,
            -1.0,
            RimWinding::Clockwise,
            DiskStyle::Rainbow {
                center: Color::WHITE,
            },
        )?;
        let cylinder = generate_cylinder(1.0, RING_SEGMENTS)?;

        Ok(Self {
            spot: Arc::new(spot),
            square: Arc::new(generate_square()),
            flat: Arc::new(generate_flat()),
            cylinder_side: Arc::new(cylinder.side),
            cylinder_top: Arc::new(cylinder.top),
            cylinder_bottom: Arc::new(cylinder.bottom),
        })
    }
}
