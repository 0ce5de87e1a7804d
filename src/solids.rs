use std::f32::consts::{PI, TAU};

/// Default tessellation for curved solids.
pub const SLICES: u32 = 20;
/// Default stack count for spheres.
pub const STACKS: u32 = 20;

/// Vertex and index data for one primitive solid.
///
/// Vertices are interleaved as `position.xyz` followed by `normal.xyz`,
/// the layout the render pipeline's vertex buffer expects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolidMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl SolidMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 6
    }

    fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.vertices.extend_from_slice(&position);
        self.vertices.extend_from_slice(&normal);
    }
}

/// Axis-aligned unit cube centered on the origin.
///
/// Each face owns its four vertices so normals stay flat.
pub fn unit_cube() -> SolidMesh {
    let mut mesh = SolidMesh::default();
    // (axis, sign): +Z -Z +X -X +Y -Y
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];

    for (normal, tangent, bitangent) in faces {
        let base = mesh.vertex_count() as u32;
        for (u, v) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = [
                normal[0] * 0.5 + tangent[0] * u + bitangent[0] * v,
                normal[1] * 0.5 + tangent[1] * u + bitangent[1] * v,
                normal[2] * 0.5 + tangent[2] * u + bitangent[2] * v,
            ];
            mesh.push_vertex(position, normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// UV sphere of radius one centered on the origin, poles on the Z axis.
pub fn unit_sphere(slices: u32, stacks: u32) -> SolidMesh {
    let mut mesh = SolidMesh::default();

    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        let (ring, z) = (phi.sin(), phi.cos());
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            let direction = [ring * theta.cos(), ring * theta.sin(), z];
            mesh.push_vertex(direction, direction);
        }
    }

    let ring_stride = slices + 1;
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring_stride + slice;
            let b = a + ring_stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Capped cylinder of radius one, running from z = 0 to z = 1.
///
/// The side wall gets radial normals; each cap is a triangle fan around
/// a center vertex with an axial normal.
pub fn unit_cylinder(slices: u32) -> SolidMesh {
    let mut mesh = SolidMesh::default();

    // Side wall: two rings sharing radial normals.
    for z in [0.0, 1.0] {
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            let (x, y) = (theta.cos(), theta.sin());
            mesh.push_vertex([x, y, z], [x, y, 0.0]);
        }
    }
    let ring_stride = slices + 1;
    for slice in 0..slices {
        let a = slice;
        let b = slice + ring_stride;
        mesh.indices.extend_from_slice(&[a, b, a + 1]);
        mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
    }

    // Caps.
    for (z, normal) in [(0.0, [0.0, 0.0, -1.0f32]), (1.0, [0.0, 0.0, 1.0f32])] {
        let center = mesh.vertex_count() as u32;
        mesh.push_vertex([0.0, 0.0, z], normal);
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            mesh.push_vertex([theta.cos(), theta.sin(), z], normal);
        }
        for slice in 0..slices {
            let rim = center + 1 + slice;
            mesh.indices.extend_from_slice(&[center, rim, rim + 1]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &SolidMesh) {
        for vertex in mesh.vertices.chunks_exact(6) {
            let n = [vertex[3], vertex[4], vertex[5]];
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    fn assert_indices_in_range(mesh: &SolidMesh) {
        let count = mesh.vertex_count() as u32;
        assert_eq!(mesh.indices.len() % 3, 0);
        for &index in &mesh.indices {
            assert!(index < count);
        }
    }

    #[test]
    fn cube_has_flat_shaded_faces() {
        let cube = unit_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.indices.len(), 36);
        assert_unit_normals(&cube);
        assert_indices_in_range(&cube);
        // Every coordinate lies on the half-unit envelope.
        for vertex in cube.vertices.chunks_exact(6) {
            for coordinate in &vertex[..3] {
                assert!(coordinate.abs() <= 0.5 + f32::EPSILON);
            }
        }
    }

    #[test]
    fn sphere_tessellation_matches_request() {
        let sphere = unit_sphere(SLICES, STACKS);
        assert_eq!(sphere.vertex_count(), ((SLICES + 1) * (STACKS + 1)) as usize);
        assert_eq!(sphere.indices.len(), (SLICES * STACKS * 6) as usize);
        assert_unit_normals(&sphere);
        assert_indices_in_range(&sphere);
        // Positions sit on the unit sphere and double as normals.
        for vertex in sphere.vertices.chunks_exact(6) {
            assert_eq!(vertex[..3], vertex[3..]);
        }
    }

    #[test]
    fn cylinder_spans_zero_to_one_along_z() {
        let cylinder = unit_cylinder(SLICES);
        assert_unit_normals(&cylinder);
        assert_indices_in_range(&cylinder);
        let expected_vertices = 2 * (SLICES + 1) + 2 * (SLICES + 2);
        assert_eq!(cylinder.vertex_count(), expected_vertices as usize);
        for vertex in cylinder.vertices.chunks_exact(6) {
            assert!(vertex[2] == 0.0 || vertex[2] == 1.0);
        }
    }
}
