//! Triangle mesh extraction for rendering.

use crate::grid::ClothGrid;
use crate::vec::{TexCoord, Vec3};
use alloc::vec::Vec as AllocVec;

/// A renderable vertex: current position plus its fixed texture coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub tex_coord: TexCoord,
}

/// Indexed triangle list snapshot of a cloth.
///
/// `vertices` is index-aligned with the grid's particles. Each cell
/// `(c, r)` contributes `[i0, i1, i2]` and `[i0, i2, i3]` where
/// `i0 = (c, r)`, `i1 = (c + 1, r)`, `i2 = (c + 1, r + 1)`, `i3 = (c, r + 1)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClothMesh {
    pub vertices: AllocVec<MeshVertex>,
    pub triangles: AllocVec<[u32; 3]>,
}

impl ClothMesh {
    /// Snapshot the grid as it is now. Call after the frame's step and relax.
    pub fn extract(grid: &ClothGrid) -> Self {
        let vertices = grid
            .particles()
            .iter()
            .map(|p| MeshVertex { position: p.pos, tex_coord: p.tex_coord() })
            .collect();

        // ClothGrid::new caps the particle count at MAX_PARTICLES, so every
        // index fits in a u32.
        let topology = grid.topology();
        let mut triangles = AllocVec::with_capacity(topology.cell_count() * 2);
        for r in 0..topology.rows() - 1 {
            for c in 0..topology.cols() - 1 {
                let i0 = topology.index(c, r) as u32;
                let i1 = topology.index(c + 1, r) as u32;
                let i2 = topology.index(c + 1, r + 1) as u32;
                let i3 = topology.index(c, r + 1) as u32;
                triangles.push([i0, i1, i2]);
                triangles.push([i0, i2, i3]);
            }
        }

        ClothMesh { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Triangles expanded to vertex triples, in draw order.
    pub fn triangle_vertices(&self) -> impl Iterator<Item = [MeshVertex; 3]> + '_ {
        self.triangles
            .iter()
            .map(move |t| t.map(|i| self.vertices[i as usize]))
    }

    /// Flat `[x, y, z, u, v]` stream of `triangle_vertices`.
    pub fn interleaved(&self) -> AllocVec<f32> {
        let mut out = AllocVec::with_capacity(self.triangle_count() * 15);
        for tri in self.triangle_vertices() {
            for v in tri {
                out.extend_from_slice(&[
                    v.position.x,
                    v.position.y,
                    v.position.z,
                    v.tex_coord.u,
                    v.tex_coord.v,
                ]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    #[test]
    fn single_cell_winding() {
        let grid = ClothGrid::new(&GridConfig::new(2, 2, 1.0)).unwrap();
        let mesh = ClothMesh::extract(&grid);
        assert_eq!(mesh.triangles, [[0, 1, 3], [0, 3, 2]]);
    }

    #[test]
    fn interleaved_length() {
        let grid = ClothGrid::new(&GridConfig::new(3, 2, 1.0)).unwrap();
        let mesh = ClothMesh::extract(&grid);
        assert_eq!(mesh.interleaved().len(), mesh.triangle_count() * 3 * 5);
    }

    #[test]
    fn triangle_vertices_carry_tex_coords() {
        let grid = ClothGrid::new(&GridConfig::new(2, 2, 1.0)).unwrap();
        let mesh = ClothMesh::extract(&grid);
        let first = mesh.triangle_vertices().next().unwrap();
        assert_eq!(first[0].tex_coord, TexCoord::new(0.0, 0.0));
        assert_eq!(first[1].tex_coord, TexCoord::new(1.0, 0.0));
        assert_eq!(first[2].tex_coord, TexCoord::new(1.0, 1.0));
    }
}
