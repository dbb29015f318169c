use crate::constants::{
    AMBIENT_COLOR, AMBIENT_INTENSITY, CURSOR_LIGHT_COLOR, CURSOR_LIGHT_HEIGHT,
    CURSOR_LIGHT_INTENSITY, CURSOR_LIGHT_RANGE, PEAK_LIGHT_COLOR, PEAK_LIGHT_INTENSITY,
    PEAK_LIGHT_POSITION, PEAK_LIGHT_RANGE,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Point light with a finite range; contribution falls to zero at `range`.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    /// Color pre-multiplied by intensity, as the shaders consume it.
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }
}

/// Ambient fill, a static light behind the ridge and one that follows the cursor.
#[derive(Clone, Debug)]
pub struct LightingRig {
    pub ambient: AmbientLight,
    pub peak: PointLight,
    pub cursor: PointLight,
}

impl Default for LightingRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vec3::from(AMBIENT_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            peak: PointLight {
                position: PEAK_LIGHT_POSITION,
                color: Vec3::from(PEAK_LIGHT_COLOR),
                intensity: PEAK_LIGHT_INTENSITY,
                range: PEAK_LIGHT_RANGE,
            },
            cursor: PointLight {
                position: Vec3::new(0.0, CURSOR_LIGHT_HEIGHT, 0.0),
                color: Vec3::from(CURSOR_LIGHT_COLOR),
                intensity: CURSOR_LIGHT_INTENSITY,
                range: CURSOR_LIGHT_RANGE,
            },
        }
    }
}

impl LightingRig {
    pub fn follow_cursor(&mut self, position: Vec3) {
        self.cursor.position = position;
    }
}
