use crate::constants::{
    EMBER_RISE_MAX, EMBER_RISE_MIN, EMBER_SPREAD_X, EMBER_SWAY, EMBER_Y_CEIL, EMBER_Y_FLOOR,
    EMBER_Z_FAR, EMBER_Z_NEAR, STAR_DRIFT_PER_FRAME, STAR_ROLL_PER_SEC, STAR_SPREAD, STAR_Z_FAR,
    STAR_Z_NEAR,
};
use glam::{Quat, Vec3};
use rand::prelude::*;

/// Distant stars drifting toward the viewer inside a fixed depth band.
pub struct StarField {
    positions: Vec<Vec3>,
    roll: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = STAR_SPREAD / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(STAR_Z_FAR..STAR_Z_NEAR),
                )
            })
            .collect();
        Self {
            positions,
            roll: 0.0,
            rng,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current roll angle of the whole field, in radians.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Rigid rotation applied to the field as a whole at render time.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.roll)
    }

    pub fn update(&mut self, t: f32) {
        let half = STAR_SPREAD / 2.0;
        for p in self.positions.iter_mut() {
            p.z += STAR_DRIFT_PER_FRAME;
            if p.z > STAR_Z_NEAR {
                p.z = STAR_Z_FAR;
                p.x = self.rng.gen_range(-half..half);
                p.y = self.rng.gen_range(-half..half);
            }
        }
        self.roll = t * STAR_ROLL_PER_SEC;
    }
}

/// Glowing particles rising through a height band in fixed depth lanes.
pub struct EmberField {
    positions: Vec<Vec3>,
    rise: Vec<f32>,
    rng: StdRng,
}

impl EmberField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = EMBER_SPREAD_X / 2.0;
        let mut positions = Vec::with_capacity(count);
        let mut rise = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(EMBER_Y_FLOOR..EMBER_Y_CEIL),
                rng.gen_range(EMBER_Z_FAR..EMBER_Z_NEAR),
            ));
            rise.push(rng.gen_range(EMBER_RISE_MIN..EMBER_RISE_MAX));
        }
        Self {
            positions,
            rise,
            rng,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-particle rise speed, fixed at creation.
    pub fn rise_speeds(&self) -> &[f32] {
        &self.rise
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sway is integrated into `x` every tick, so it accumulates between resets.
    pub fn update(&mut self, t: f32) {
        let half = EMBER_SPREAD_X / 2.0;
        for (i, (p, rise)) in self.positions.iter_mut().zip(&self.rise).enumerate() {
            p.y += rise;
            p.x += (t + i as f32).sin() * EMBER_SWAY;
            if p.y > EMBER_Y_CEIL {
                p.y = EMBER_Y_FLOOR;
                p.x = self.rng.gen_range(-half..half);
            }
        }
    }
}
