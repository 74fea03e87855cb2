use drape::{ClothGrid, ClothMesh, ConstraintSolver, GridConfig, Integrator, PhysicsConfig, Vec3};

#[test]
fn triangle_count_covers_every_cell() {
    for (cols, rows) in [(2, 2), (3, 5), (10, 4), (20, 20)] {
        let grid = ClothGrid::new(&GridConfig::new(cols, rows, 1.0)).unwrap();
        let mesh = ClothMesh::extract(&grid);
        assert_eq!(mesh.triangle_count(), 2 * (cols - 1) * (rows - 1));
        assert_eq!(mesh.vertex_count(), cols * rows);
        for tri in &mesh.triangles {
            assert!(tri.iter().all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }
}

#[test]
fn winding_is_consistent_across_cells() {
    let grid = ClothGrid::new(&GridConfig::new(6, 4, 2.0)).unwrap();
    let mesh = ClothMesh::extract(&grid);

    let normal = |t: &[u32; 3]| {
        let [a, b, c] = t.map(|i| mesh.vertices[i as usize].position);
        (b - a).cross(c - a)
    };

    let reference = normal(&mesh.triangles[0]);
    assert!(reference.length() > 0.0);
    for tri in &mesh.triangles {
        assert!(normal(tri).dot(reference) > 0.0, "triangle {:?} flipped", tri);
    }
}

#[test]
fn cell_triangles_follow_quad_corners() {
    let grid = ClothGrid::new(&GridConfig::new(4, 3, 1.0)).unwrap();
    let mesh = ClothMesh::extract(&grid);
    // Cell (1, 1): i0 = 5, i1 = 6, i2 = 10, i3 = 9; it is the 5th cell.
    assert_eq!(mesh.triangles[8], [5, 6, 10]);
    assert_eq!(mesh.triangles[9], [5, 10, 9]);
}

#[test]
fn mesh_reflects_post_relax_state() {
    let mut grid = ClothGrid::new(&GridConfig::banner()).unwrap();
    grid.pin_top_edge();
    let config = PhysicsConfig::banner();

    let stale = ClothMesh::extract(&grid);
    Integrator::step(&mut grid, &config, 0.016);
    ConstraintSolver::relax(&mut grid, config.iterations);
    let fresh = ClothMesh::extract(&grid);

    assert_ne!(stale, fresh);
    for (v, p) in fresh.vertices.iter().zip(grid.particles()) {
        assert_eq!(v.position, p.pos);
        assert_eq!(v.tex_coord, p.tex_coord());
    }
    assert_eq!(stale.triangles, fresh.triangles);
}

#[test]
fn extraction_is_read_only() {
    let mut grid = ClothGrid::new(&GridConfig::new(3, 3, 1.0)).unwrap();
    let idx = grid.index(1, 1);
    grid.particle_mut(idx).pos = Vec3::new(9.0, 9.0, 9.0);
    let before = grid.positions();
    let a = ClothMesh::extract(&grid);
    let b = ClothMesh::extract(&grid);
    assert_eq!(a, b);
    assert_eq!(grid.positions(), before);
}
