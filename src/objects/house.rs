//! # Buildings
//!
//! A building is described by three tables: vertex positions, faces as lists
//! of vertex indices, and one color per face. The tables are validated when
//! the building is constructed and every face is turned into a fan mesh, so a
//! malformed table is reported before anything is drawn.

use std::sync::Arc;

use super::MeshLibrary;
use crate::error::SceneError;
use crate::gfx::geometry::{generate_polygon, Color, Mesh};
use crate::gfx::scene::{RenderSink, Transform};

pub const HOUSE_VERTICES: [[f32; 3]; 10] = [
    [2.0, -1.0, 2.0],
    [2.0, -1.0, -2.0],
    [2.0, 1.0, -2.0],
    [2.0, 1.0, 2.0],
    [1.5, 1.5, 0.0],
    [-1.5, 1.5, 0.0],
    [-2.0, -1.0, 2.0],
    [-2.0, 1.0, 2.0],
    [-2.0, 1.0, -2.0],
    [-2.0, -1.0, -2.0],
];

pub const HOUSE_FACES: [&[usize]; 9] = [
    &[0, 1, 2, 3],
    &[3, 2, 4],
    &[7, 3, 4, 5],
    &[2, 8, 5, 4],
    &[5, 8, 7],
    &[0, 3, 7, 6],
    &[0, 6, 9, 1],
    &[2, 1, 9, 8],
    &[6, 7, 8, 9],
];

pub const HOUSE_COLORS: [[f32; 3]; 9] = [
    [1.0, 0.8, 0.8],
    [0.7, 0.7, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 0.7],
    [0.7, 0.7, 1.0],
    [1.0, 0.0, 0.0],
    [0.4, 0.4, 0.4],
    [1.0, 0.0, 0.0],
    [1.0, 0.8, 0.8],
];

const TURN_DEGREES: f32 = 85.0;
const SIZE: f32 = 4.0;
const WINDOW_OFFSET: [f32; 3] = [1.5, 0.0, 0.0];

#[derive(Debug, Clone)]
struct Face {
    mesh: Arc<Mesh>,
    color: Color,
}

#[derive(Debug, Clone)]
pub struct Building {
    faces: Vec<Face>,
    window: Arc<Mesh>,
}

impl Building {
    /// Validates the tables and prebuilds one fan per face.
    pub fn new(
        vertices: &[[f32; 3]],
        faces: &[&[usize]],
        colors: &[[f32; 3]],
        library: &MeshLibrary,
    ) -> Result<Self, SceneError> {
        if faces.len() != colors.len() {
            return Err(SceneError::TableMismatch {
                faces: faces.len(),
                colors: colors.len(),
            });
        }

        let faces = faces
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(face, (indices, &color))| -> Result<Face, SceneError> {
                if indices.len() < 3 {
                    return Err(SceneError::EmptyFace { face });
                }
                let points = indices
                    .iter()
                    .map(|&index| {
                        vertices
                            .get(index)
                            .copied()
                            .ok_or(SceneError::InvalidFaceIndex {
                                face,
                                index,
                                vertex_count: vertices.len(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Face {
                    mesh: Arc::new(generate_polygon(&points)),
                    color: Color::from(color),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            faces,
            window: Arc::clone(&library.square),
        })
    }

    /// The house of the pasture scene.
    pub fn standard(library: &MeshLibrary) -> Result<Self, SceneError> {
        Self::new(&HOUSE_VERTICES, &HOUSE_FACES, &HOUSE_COLORS, library)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn draw(&self, sink: &mut dyn RenderSink, at: &Transform) {
        let body = at
            .rotate(TURN_DEGREES, [0.0, 1.0, 0.0])
            .uniform_scale(SIZE);

        let [x, y, z] = WINDOW_OFFSET;
        let window = body.translate(x, y, z).rotate(90.0, [0.0, 1.0, 0.0]);

        for face in &self.faces {
            sink.draw_mesh(&window, &self.window, Color::WHITE, "building window");
            sink.draw_mesh(&body, &face.mesh, face.color, "building face");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{DrawCommand, DrawList};

    fn library() -> MeshLibrary {
        MeshLibrary::new().unwrap()
    }

    #[test]
    fn standard_house_draws_nine_faces_and_windows() {
        let house = Building::standard(&library()).unwrap();
        assert_eq!(house.face_count(), 9);

        let mut list = DrawList::new();
        house.draw(&mut list, &Transform::identity());
        assert_eq!(list.count_labeled("building face"), 9);
        assert_eq!(list.count_labeled("building window"), 9);

        // windows and faces alternate, window first
        let labels: Vec<_> = list.commands().iter().map(|c| c.label()).collect();
        assert_eq!(labels[0], "building window");
        assert_eq!(labels[1], "building face");
    }

    #[test]
    fn faces_keep_table_vertices_and_colors() {
        let house = Building::standard(&library()).unwrap();
        let mut list = DrawList::new();
        house.draw(&mut list, &Transform::identity());

        let faces: Vec<_> = list.labeled("building face").collect();
        for (i, command) in faces.iter().enumerate() {
            let DrawCommand::Mesh { mesh, paint, .. } = command else {
                panic!("faces are meshes");
            };
            assert_eq!(*paint, Color::from(HOUSE_COLORS[i]));
            let expected: Vec<_> = HOUSE_FACES[i].iter().map(|&v| HOUSE_VERTICES[v]).collect();
            assert_eq!(mesh.positions, expected);
        }
    }

    #[test]
    fn invalid_index_is_rejected() {
        let faces: [&[usize]; 2] = [&[0, 1, 2], &[0, 1, 10]];
        let result = Building::new(&HOUSE_VERTICES, &faces, &HOUSE_COLORS[..2], &library());
        assert_eq!(
            result.err(),
            Some(SceneError::InvalidFaceIndex {
                face: 1,
                index: 10,
                vertex_count: 10,
            })
        );
    }

    #[test]
    fn short_faces_and_mismatched_tables() {
        let faces: [&[usize]; 1] = [&[0, 1]];
        let result = Building::new(&HOUSE_VERTICES, &faces, &HOUSE_COLORS[..1], &library());
        assert_eq!(result.err(), Some(SceneError::EmptyFace { face: 0 }));

        let result = Building::new(&HOUSE_VERTICES, &HOUSE_FACES, &HOUSE_COLORS[..8], &library());
        assert_eq!(
            result.err(),
            Some(SceneError::TableMismatch {
                faces: 9,
                colors: 8
            })
        );
    }

    #[test]
    fn nested_windows_leave_parent_untouched() {
        let library = library();
        let house = Building::standard(&library).unwrap();
        let parent = Transform::identity()
            .translate(-4.0, 0.0, 2.0)
            .rotate(-30.0, [0.0, 1.0, 0.0])
            .uniform_scale(1.5);

        let mut local = DrawList::new();
        house.draw(&mut local, &Transform::identity());
        let mut placed = DrawList::new();
        house.draw(&mut placed, &parent);
        placed.draw_mesh(&parent, &library.square, Color::WHITE, "sibling");

        assert_eq!(local.len(), 18);
        assert_eq!(placed.len(), 19);
        for (a, b) in local.commands().iter().zip(placed.commands()) {
            let expected = parent.then(a.transform().matrix());
            for p in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]] {
                let (got, want) = (b.transform().transform_point(p), expected.transform_point(p));
                for i in 0..3 {
                    assert!((got[i] - want[i]).abs() < 1e-3, "{got:?} != {want:?}");
                }
            }
        }
        assert_eq!(*placed.labeled("sibling").next().unwrap().transform(), parent);
    }
}
