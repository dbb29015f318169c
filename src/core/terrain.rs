use crate::constants::{
    RIDGE_SLOPE, RIDGE_START, TERRAIN_AMP_BROAD, TERRAIN_AMP_DETAIL, TERRAIN_FREQ_BROAD,
    TERRAIN_FREQ_DETAIL, TERRAIN_SCROLL_SPEED,
};
use glam::Vec3;

/// Vertex layout uploaded to the terrain pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Extra height that lifts the far edge of the plane into a horizon ridge.
#[inline]
pub fn ridge(y_base: f32) -> f32 {
    if y_base > RIDGE_START {
        RIDGE_SLOPE * (y_base - RIDGE_START)
    } else {
        0.0
    }
}

/// Terrain elevation at base sampling coordinate `(x, y_base)` after `t` seconds.
///
/// Time shifts the sampled y coordinate only, so a fixed-size grid appears to
/// scroll forever. The ridge term is keyed on the unshifted `y_base` and stays put.
#[inline]
pub fn height(x: f32, y_base: f32, t: f32) -> f32 {
    let y = y_base - TERRAIN_SCROLL_SPEED * t;
    let broad = (TERRAIN_FREQ_BROAD * x).sin() + (TERRAIN_FREQ_BROAD * y).cos();
    let detail = (TERRAIN_FREQ_DETAIL * x).sin() + (TERRAIN_FREQ_DETAIL * y).cos();
    TERRAIN_AMP_BROAD * broad + TERRAIN_AMP_DETAIL * detail + ridge(y_base)
}

/// Height-field deformed plane with `(segments + 1)²` vertices.
///
/// Vertices live in the plane's local frame: `x` across, `y` along the depth
/// axis and `z` up. Row 0 sits at `+size/2` so the ridge (large `y`) is the
/// first row, matching the usual plane layout.
pub struct TerrainField {
    segments: u32,
    base: Vec<[f32; 2]>,
    vertices: Vec<TerrainVertex>,
    triangles: Vec<[u32; 3]>,
}

impl TerrainField {
    pub fn new(size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let row = segments + 1;
        let step = size / segments as f32;
        let half = size / 2.0;

        let mut base = Vec::with_capacity((row * row) as usize);
        for iy in 0..row {
            let y = half - iy as f32 * step;
            for ix in 0..row {
                let x = ix as f32 * step - half;
                base.push([x, y]);
            }
        }

        let mut triangles = Vec::with_capacity((segments * segments * 2) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = (ix + 1) + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                triangles.push([a, b, d]);
                triangles.push([b, c, d]);
            }
        }

        let vertices = base
            .iter()
            .map(|&[x, y]| TerrainVertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
            })
            .collect();

        let mut field = Self {
            segments,
            base,
            vertices,
            triangles,
        };
        field.update(0.0);
        field
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Immutable sampling coordinates, one per vertex.
    pub fn base_coords(&self) -> &[[f32; 2]] {
        &self.base
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Rewrite every height for time `t`, then rebuild all normals.
    pub fn update(&mut self, t: f32) {
        for (v, &[x, y]) in self.vertices.iter_mut().zip(&self.base) {
            v.position = [x, y, height(x, y, t)];
        }
        self.recompute_normals();
    }

    // Area-weighted face normals accumulated per vertex.
    fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for &[a, b, c] in &self.triangles {
            let pa = Vec3::from(self.vertices[a as usize].position);
            let pb = Vec3::from(self.vertices[b as usize].position);
            let pc = Vec3::from(self.vertices[c as usize].position);
            let n = (pb - pa).cross(pc - pa);
            acc[a as usize] += n;
            acc[b as usize] += n;
            acc[c as usize] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = n.normalize_or_zero().to_array();
        }
    }

    /// Line-list indices covering every grid edge once: rows, columns and
    /// the quad diagonals shared by each triangle pair.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let seg = self.segments;
        let row = seg + 1;
        let mut out = Vec::with_capacity(((2 * seg * row + seg * seg) * 2) as usize);
        for iy in 0..row {
            for ix in 0..seg {
                let i = ix + row * iy;
                out.extend_from_slice(&[i, i + 1]);
            }
        }
        for iy in 0..seg {
            for ix in 0..row {
                let i = ix + row * iy;
                out.extend_from_slice(&[i, i + row]);
            }
        }
        for iy in 0..seg {
            for ix in 0..seg {
                let b = ix + row * (iy + 1);
                let d = (ix + 1) + row * iy;
                out.extend_from_slice(&[b, d]);
            }
        }
        out
    }
}
