// Host-side tests for the terrain height field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod terrain {
    include!("../src/core/terrain.rs");
}

use terrain::*;

#[test]
fn height_is_deterministic() {
    for &(x, y, t) in &[(0.0, 0.0, 0.0), (3.5, -12.0, 1.25), (-29.0, 29.0, 100.0)] {
        assert_eq!(height(x, y, t), height(x, y, t));
    }
}

#[test]
fn height_matches_closed_form_at_origin() {
    // sin(0) + cos(0) = 1 for both octaves, no ridge at y = 0
    let h = height(0.0, 0.0, 0.0);
    assert!((h - (1.5 + 0.4)).abs() < 1e-6);
}

#[test]
fn ridge_is_continuous_at_threshold() {
    let eps = 1e-4;
    let below = ridge(10.0 - eps);
    let at = ridge(10.0);
    let above = ridge(10.0 + eps);
    assert_eq!(below, 0.0);
    assert_eq!(at, 0.0);
    assert!(above > 0.0 && above < 1e-3);

    let t = 0.7;
    let h_lo = height(2.0, 10.0 - eps, t);
    let h_hi = height(2.0, 10.0 + eps, t);
    assert!((h_lo - h_hi).abs() < 1e-2);
}

#[test]
fn ridge_rises_linearly_past_threshold() {
    assert!((ridge(20.0) - 6.0).abs() < 1e-5);
    assert!((ridge(30.0) - 12.0).abs() < 1e-5);
    assert_eq!(ridge(-30.0), 0.0);
}

#[test]
fn height_is_continuous_in_time() {
    let dt = 1e-4;
    for i in 0..50 {
        let t = i as f32 * 0.37;
        let a = height(1.3, 4.2, t);
        let b = height(1.3, 4.2, t + dt);
        assert!((a - b).abs() < 1e-2, "jump at t={}", t);
    }
}

#[test]
fn time_shift_equals_sampling_shift() {
    // Advancing time by dt samples the field 2*dt further along base y
    // (below the ridge, which is not time shifted).
    let a = height(0.5, 3.0, 1.0);
    let b = height(0.5, 5.0, 2.0);
    assert!((a - b).abs() < 1e-4);
}

#[test]
fn grid_has_expected_vertex_and_triangle_counts() {
    let field = TerrainField::new(60.0, 64);
    assert_eq!(field.segments(), 64);
    assert_eq!(field.vertices().len(), 65 * 65);
    assert_eq!(field.base_coords().len(), 65 * 65);
    assert_eq!(field.triangles().len(), 64 * 64 * 2);
}

#[test]
fn base_coordinates_span_the_plane() {
    let field = TerrainField::new(60.0, 4);
    let base = field.base_coords();
    assert_eq!(base[0], [-30.0, 30.0]);
    assert_eq!(base[base.len() - 1], [30.0, -30.0]);
}

#[test]
fn update_keeps_base_coordinates_fixed() {
    let mut field = TerrainField::new(20.0, 8);
    let before = field.base_coords().to_vec();
    for i in 0..10 {
        field.update(i as f32 * 0.5);
    }
    assert_eq!(field.base_coords(), &before[..]);
    for (v, b) in field.vertices().iter().zip(&before) {
        assert_eq!(v.position[0], b[0]);
        assert_eq!(v.position[1], b[1]);
    }
}

#[test]
fn update_writes_height_function() {
    let mut field = TerrainField::new(40.0, 16);
    let t = 3.3;
    field.update(t);
    for (v, b) in field.vertices().iter().zip(field.base_coords()) {
        assert_eq!(v.position[2], height(b[0], b[1], t));
    }
}

#[test]
fn normals_are_unit_length_and_face_up() {
    let mut field = TerrainField::new(60.0, 32);
    field.update(12.5);
    for v in field.vertices() {
        let [x, y, z] = v.normal;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
        // The height field is a function of (x, y), so no normal flips below the plane.
        assert!(z > 0.0);
    }
}

#[test]
fn normals_follow_the_slope() {
    // Where the surface rises with x, the normal must lean toward -x.
    let mut field = TerrainField::new(60.0, 64);
    field.update(0.0);
    let row = 65;
    let iy = 32;
    for ix in 1..64 {
        let i = ix + row * iy;
        let verts = field.vertices();
        let dh = verts[i + 1].position[2] - verts[i - 1].position[2];
        if dh > 0.2 {
            assert!(verts[i].normal[0] < 0.0);
        } else if dh < -0.2 {
            assert!(verts[i].normal[0] > 0.0);
        }
    }
}

#[test]
fn normals_change_when_heights_change() {
    let mut field = TerrainField::new(60.0, 16);
    field.update(0.0);
    let before: Vec<[f32; 3]> = field.vertices().iter().map(|v| v.normal).collect();
    field.update(1.0);
    let changed = field
        .vertices()
        .iter()
        .zip(&before)
        .filter(|(v, b)| v.normal != **b)
        .count();
    assert!(changed > 0);
}

#[test]
fn wireframe_covers_every_edge_once() {
    let seg = 8u32;
    let field = TerrainField::new(10.0, seg);
    let idx = field.wireframe_indices();
    let expected_edges = 2 * seg * (seg + 1) + seg * seg;
    assert_eq!(idx.len() as u32, expected_edges * 2);

    let n = field.vertices().len() as u32;
    assert!(idx.iter().all(|&i| i < n));

    let mut edges: Vec<(u32, u32)> = idx
        .chunks(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect();
    edges.sort_unstable();
    edges.dedup();
    assert_eq!(edges.len() as u32, expected_edges);

    // Every triangle edge appears in the wireframe
    for tri in field.triangles() {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let e = (a.min(b), a.max(b));
            assert!(edges.binary_search(&e).is_ok(), "missing edge {:?}", e);
        }
    }
}

#[test]
fn zero_segments_is_clamped_to_one() {
    let field = TerrainField::new(10.0, 0);
    assert_eq!(field.segments(), 1);
    assert_eq!(field.vertices().len(), 4);
}
