use drape::{ClothError, ClothGrid, GridConfig, PhysicsConfig, TexCoord, Vec3};
use drape::{ConstraintSolver, Integrator};

#[test]
fn creation_yields_full_grid_with_unit_tex_coords() {
    for (cols, rows, spacing) in [(2, 2, 1.0), (4, 3, 10.0), (7, 11, 0.25), (20, 20, 10.0)] {
        let grid = ClothGrid::new(&GridConfig::new(cols, rows, spacing)).unwrap();
        assert_eq!(grid.particle_count(), cols * rows);

        for p in grid.particles() {
            let tc = p.tex_coord();
            assert!((0.0..=1.0).contains(&tc.u) && (0.0..=1.0).contains(&tc.v));
            assert_eq!(p.pos, p.prev_pos, "particles start at rest");
        }

        assert_eq!(grid.tex_coord_at(0, 0), TexCoord::new(0.0, 0.0));
        assert_eq!(grid.tex_coord_at(cols - 1, rows - 1), TexCoord::new(1.0, 1.0));
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    assert!(matches!(
        ClothGrid::new(&GridConfig::new(1, 1, 1.0)),
        Err(ClothError::InvalidGridDimensions { cols: 1, rows: 1 })
    ));
    assert!(matches!(
        ClothGrid::new(&GridConfig::new(4, 4, -3.0)),
        Err(ClothError::InvalidSpacing(_))
    ));
}

#[test]
fn tex_coords_never_drift() {
    let mut grid = ClothGrid::new(&GridConfig::banner()).unwrap();
    grid.pin_top_edge();
    let before: Vec<_> = grid.particles().iter().map(|p| p.tex_coord()).collect();

    let config = PhysicsConfig::banner();
    for _ in 0..60 {
        Integrator::step(&mut grid, &config, 1.0 / 60.0);
        ConstraintSolver::relax(&mut grid, config.iterations);
    }

    let after: Vec<_> = grid.particles().iter().map(|p| p.tex_coord()).collect();
    assert_eq!(before, after);
}

#[test]
fn pinned_top_edge_drapes_under_gravity() {
    let mut grid = ClothGrid::new(&GridConfig::new(5, 5, 1.0)).unwrap();

    let top_initial: Vec<Vec3> = (0..grid.cols()).map(|c| grid.position_at(c, 0)).collect();
    let bottom_row = grid.rows() - 1;
    let bottom_initial: Vec<Vec3> = (0..grid.cols()).map(|c| grid.position_at(c, bottom_row)).collect();

    grid.pin_top_edge();

    let config = PhysicsConfig::new()
        .with_gravity(Vec3::new(0.0, 9.81, 0.0))
        .with_iterations(8);

    // Simulate for 120 steps (~2 seconds at 60 Hz).
    for _ in 0..120 {
        Integrator::step(&mut grid, &config, 1.0 / 60.0);
        ConstraintSolver::relax(&mut grid, config.iterations);
    }

    for col in 0..grid.cols() {
        assert_eq!(grid.position_at(col, 0), top_initial[col], "top row col {} moved", col);
    }

    // Rows grow along +Y and gravity points along +Y, so the cloth first
    // stretches before the constraints pull it back; it must stay bounded.
    for col in 0..grid.cols() {
        let pos = grid.position_at(col, bottom_row);
        assert!(pos.is_finite());
        assert!((pos.y - bottom_initial[col].y).abs() < 2.0, "bottom col {} ran away: {:?}", col, pos);
    }
}

#[test]
fn corners_only_lets_the_middle_sag() {
    let config = GridConfig::new(9, 5, 1.0).with_axes(Vec3::X, -Vec3::Z);
    let mut grid = ClothGrid::new(&config).unwrap();
    grid.pin_corners();
    let mid_top = grid.position_at(4, 0);

    let physics = PhysicsConfig::new().with_gravity(Vec3::new(0.0, 0.0, -9.81));
    for _ in 0..60 {
        Integrator::step(&mut grid, &physics, 1.0 / 60.0);
        ConstraintSolver::relax(&mut grid, physics.iterations);
    }

    assert_eq!(grid.position_at(0, 0), Vec3::ZERO);
    assert_eq!(grid.position_at(8, 0), Vec3::new(8.0, 0.0, 0.0));
    assert!(grid.position_at(4, 0).z < mid_top.z, "unpinned top edge should sag");
}
