//! Primitive mesh generation
//!
//! Generates the subdivided cube used for both the magma ball and its fire
//! shell:
//! - Face: the six cube faces and their in-plane grid directions
//! - MeshData: single-allocation storage for indices, positions and normals
//! - Cube: the generator itself and the [`CubeMesh`] lifecycle wrapper

mod cube;
mod face;
mod mesh_data;

pub use cube::{
    CubeMesh, build_cube_mesh, cells_per_edge, cube_layout, subdivision_level,
};
pub(crate) use cube::validate_size;
pub use face::{Face, basis_for};
pub use mesh_data::{MeshData, MeshLayout};

/// Errors that can occur while generating a mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Failed to allocate mesh for subdivision level {subdivisions}: {reason}")]
    AllocationFailure { subdivisions: u32, reason: String },
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Vec3, Vec4};

    use super::*;

    fn vertex_position(mesh: &MeshData, index: u32) -> Vec3 {
        Vec4::from_array(mesh.position(index as usize).unwrap()).truncate()
    }

    fn vertex_normal(mesh: &MeshData, index: u32) -> Vec3 {
        Vec4::from_array(mesh.normal(index as usize).unwrap()).truncate()
    }

    fn vertices_per_face(subdivisions: u32) -> u32 {
        let row = cells_per_edge(subdivisions).unwrap() + 1;
        row * row
    }

    #[test]
    fn test_counts_match_layout() {
        for s in 0..=5 {
            let mesh = build_cube_mesh(Vec3::ZERO, 1.0, s).unwrap();
            let cells = 1u32 << s;
            assert_eq!(mesh.vertex_count(), 6 * (cells + 1) * (cells + 1));
            assert_eq!(mesh.triangle_count(), 2 * 6 * 4u32.pow(s));
            assert_eq!(mesh.indices().len(), 3 * mesh.triangle_count() as usize);
            assert_eq!(mesh.positions().len(), 4 * mesh.vertex_count() as usize);
            assert_eq!(mesh.normals().len(), 4 * mesh.vertex_count() as usize);
            assert_eq!(mesh.layout(), cube_layout(s).unwrap());
        }
    }

    #[test]
    fn test_normals_are_face_axes() {
        for s in 0..=3 {
            let mesh = build_cube_mesh(Vec3::new(0.5, -1.0, 2.0), 1.5, s).unwrap();
            let per_face = vertices_per_face(s);
            for v in 0..mesh.vertex_count() {
                let normal = mesh.normal(v as usize).unwrap();
                assert_eq!(normal[3], 0.0);
                let normal = vertex_normal(&mesh, v);
                assert_eq!(normal.length(), 1.0);
                let face = Face::from_normal(normal).expect("normal must be a face axis");
                assert_eq!(face, Face::ALL[(v / per_face) as usize]);
                assert_eq!(mesh.position(v as usize).unwrap()[3], 1.0);
            }
        }
    }

    #[test]
    fn test_triangles_stay_within_face() {
        for s in 0..=4 {
            let mesh = build_cube_mesh(Vec3::ZERO, 1.0, s).unwrap();
            let per_face = vertices_per_face(s);
            for triangle in mesh.triangles() {
                assert!(triangle.iter().all(|&i| i < mesh.vertex_count()));
                let face = triangle[0] / per_face;
                assert!(triangle.iter().all(|&i| i / per_face == face));
            }
        }
    }

    #[test]
    fn test_every_vertex_is_used() {
        let mesh = build_cube_mesh(Vec3::ZERO, 1.0, 2).unwrap();
        let mut used = vec![false; mesh.vertex_count() as usize];
        for &i in mesh.indices() {
            used[i as usize] = true;
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_winding_faces_outward() {
        let centers = [Vec3::ZERO, Vec3::new(3.0, -2.0, 0.25)];
        let sizes = [0.5, 1.0, 3.7];
        for s in 0..=4 {
            for center in centers {
                for size in sizes {
                    let mesh = build_cube_mesh(center, size, s).unwrap();
                    for [i0, i1, i2] in mesh.triangles() {
                        let p0 = vertex_position(&mesh, i0);
                        let p1 = vertex_position(&mesh, i1);
                        let p2 = vertex_position(&mesh, i2);
                        let normal = vertex_normal(&mesh, i0);
                        let signed_area = (p1 - p0).cross(p2 - p0).dot(normal);
                        assert!(
                            signed_area > 0.0,
                            "inward triangle ({i0}, {i1}, {i2}) at s={s}, size={size}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_level_zero_is_unit_cube_surface() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let size = 3.0;
        let half = size / 2.0;
        let mesh = build_cube_mesh(center, size, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);

        for v in 0..mesh.vertex_count() {
            let offset = vertex_position(&mesh, v) - center;
            let normal = vertex_normal(&mesh, v);
            let axis = Face::from_normal(normal).unwrap().axis();
            assert_relative_eq!(offset[axis], normal[axis] * half);
            for other in (0..3).filter(|&a| a != axis) {
                assert_relative_eq!(offset[other].abs(), half);
            }
        }
    }

    #[test]
    fn test_face_edges_meet() {
        let mesh = build_cube_mesh(Vec3::ZERO, 2.0, 2).unwrap();
        let per_face = vertices_per_face(2);
        for v in 0..mesh.vertex_count() {
            let p = vertex_position(&mesh, v);
            let on_edge = p.to_array().iter().filter(|c| c.abs() == 1.0).count() >= 2;
            if !on_edge {
                continue;
            }
            let shared = (0..mesh.vertex_count())
                .filter(|&u| u / per_face != v / per_face)
                .any(|u| vertex_position(&mesh, u) == p);
            assert!(shared, "edge vertex {v} at {p} has no twin on another face");
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let center = Vec3::new(0.1, 0.2, 0.3);
        let a = build_cube_mesh(center, 1.3, 3).unwrap();
        let b = build_cube_mesh(center, 1.3, 3).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_size_scales_offsets() {
        let small = build_cube_mesh(Vec3::ZERO, 1.5, 2).unwrap();
        let large = build_cube_mesh(Vec3::ZERO, 3.0, 2).unwrap();
        for v in 0..small.vertex_count() {
            assert_eq!(vertex_position(&large, v), vertex_position(&small, v) * 2.0);
        }
        assert_eq!(small.normals(), large.normals());

        let center = Vec3::new(-4.0, 0.5, 7.0);
        let small = build_cube_mesh(center, 1.5, 1).unwrap();
        let large = build_cube_mesh(center, 3.0, 1).unwrap();
        for v in 0..small.vertex_count() {
            let expected = (vertex_position(&small, v) - center) * 2.0;
            let actual = vertex_position(&large, v) - center;
            assert!(actual.abs_diff_eq(expected, 1e-5), "{actual} != {expected}");
        }
    }

    #[test]
    fn test_size_two_level_one() {
        let mesh = build_cube_mesh(Vec3::ZERO, 2.0, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 54);
        assert_eq!(mesh.triangle_count(), 48);

        for v in 0..mesh.vertex_count() {
            let p = vertex_position(&mesh, v);
            let axis = Face::from_normal(vertex_normal(&mesh, v)).unwrap().axis();
            assert_eq!(p.abs().max_element(), 1.0);
            assert_eq!(p[axis].abs(), 1.0);
            for other in (0..3).filter(|&a| a != axis) {
                assert!([-1.0, 0.0, 1.0].contains(&p[other]), "{p}");
            }
        }
        assert_eq!(mesh.bounds(), ([-1.0; 3], [1.0; 3]));
    }

    #[test]
    fn test_first_face_layout() {
        // +X face at level 0: dir1 = +Y, dir2 = +Z, grid origin at (0.5, -0.5, -0.5)
        let mesh = build_cube_mesh(Vec3::ZERO, 1.0, 0).unwrap();
        assert_eq!(mesh.position(0), Some([0.5, -0.5, -0.5, 1.0]));
        assert_eq!(mesh.position(1), Some([0.5, -0.5, 0.5, 1.0]));
        assert_eq!(mesh.position(2), Some([0.5, 0.5, -0.5, 1.0]));
        assert_eq!(mesh.position(3), Some([0.5, 0.5, 0.5, 1.0]));
        assert_eq!(&mesh.indices()[..6], &[0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = build_cube_mesh(Vec3::ZERO, size, 1);
            assert!(
                matches!(result, Err(MeshError::InvalidParameter { name: "size", .. })),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_subdivisions() {
        assert_eq!(subdivision_level(3), Ok(3));
        assert!(matches!(
            subdivision_level(-1),
            Err(MeshError::InvalidParameter {
                name: "subdivisions",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_level_fails_before_allocating() {
        assert!(cube_layout(13).is_ok());
        for s in [14, 15, 16, 17, 29, 30, 31, 32, 33, u32::MAX] {
            assert!(matches!(
                cube_layout(s),
                Err(MeshError::AllocationFailure { subdivisions, .. }) if subdivisions == s
            ));
        }
        for s in [30, 31, 40] {
            assert!(matches!(
                build_cube_mesh(Vec3::ZERO, 1.0, s),
                Err(MeshError::AllocationFailure { .. })
            ));
        }
    }

    #[test]
    fn test_cube_mesh_lifecycle() {
        let mut cube = CubeMesh::new(Vec3::ZERO, 1.0, 1);
        assert!(!cube.is_built());
        assert!(cube.data().is_none());

        assert_eq!(cube.create().unwrap().vertex_count(), 54);
        assert!(cube.is_built());

        let rebuilt = cube.rebuild(Vec3::ONE, 2.0, 2).unwrap();
        assert_eq!(rebuilt.vertex_count(), 150);
        assert_eq!(cube.size(), 2.0);
        assert_eq!(cube.subdivisions(), 2);
        assert_eq!(cube.center(), Vec3::ONE);

        // A failed rebuild keeps the previous mesh and parameters
        assert!(cube.rebuild(Vec3::ZERO, -1.0, 0).is_err());
        assert_eq!(cube.size(), 2.0);
        assert_eq!(cube.data().map(MeshData::vertex_count), Some(150));
    }
}
