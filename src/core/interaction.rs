use crate::constants::{
    CAMERA_BASE, CAMERA_DRIFT_X_RATE, CAMERA_DRIFT_Y_RATE, CAMERA_POINTER_GAIN, CAMERA_SMOOTHING,
    CURSOR_LIGHT_GAIN, CURSOR_LIGHT_HEIGHT, CURSOR_LIGHT_SMOOTHING, POINTER_SENSITIVITY,
    SCROLL_DEPTH_FACTOR,
};
use glam::{Vec2, Vec3};

/// One step of exponential smoothing: `value += (target - value) * factor`.
#[inline]
pub fn smooth_toward(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

/// Pointer offset from the viewport center, scaled by the fixed sensitivity.
#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (client_x - width / 2.0) * POINTER_SENSITIVITY,
        (client_y - height / 2.0) * POINTER_SENSITIVITY,
    )
}

/// Lateral/vertical camera target for pointer `offset` at time `t`.
///
/// The drift term keeps the view moving with no pointer input at all.
#[inline]
pub fn camera_target(offset: Vec2, t: f32) -> Vec2 {
    Vec2::new(
        CAMERA_BASE.x + offset.x * CAMERA_POINTER_GAIN + (t * CAMERA_DRIFT_X_RATE).sin(),
        CAMERA_BASE.y - offset.y * CAMERA_POINTER_GAIN + (t * CAMERA_DRIFT_Y_RATE).cos(),
    )
}

/// Camera depth for a page scrolled down by `scroll_y` pixels.
#[inline]
pub fn scroll_depth(scroll_y: f32) -> f32 {
    CAMERA_BASE.z - scroll_y * SCROLL_DEPTH_FACTOR
}

/// Pointer/scroll driven state shared between event callbacks and the frame loop.
///
/// Callbacks only write the raw `pointer` and `scroll_y`; `update` is the only
/// writer of the smoothed `camera` and `cursor_light` positions.
#[derive(Clone, Copy, Debug)]
pub struct InteractionState {
    pub camera: Vec3,
    pub cursor_light: Vec3,
    pub pointer: Vec2,
    pub scroll_y: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            camera: CAMERA_BASE,
            cursor_light: Vec3::new(0.0, CURSOR_LIGHT_HEIGHT, 0.0),
            pointer: Vec2::ZERO,
            scroll_y: 0.0,
        }
    }
}

impl InteractionState {
    pub fn set_pointer(&mut self, offset: Vec2) {
        self.pointer = offset;
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    pub fn update(&mut self, t: f32) {
        let target = camera_target(self.pointer, t);
        self.camera.x = smooth_toward(self.camera.x, target.x, CAMERA_SMOOTHING);
        self.camera.y = smooth_toward(self.camera.y, target.y, CAMERA_SMOOTHING);
        self.camera.z = scroll_depth(self.scroll_y);

        self.cursor_light.x = smooth_toward(
            self.cursor_light.x,
            self.pointer.x * CURSOR_LIGHT_GAIN,
            CURSOR_LIGHT_SMOOTHING,
        );
        self.cursor_light.z = smooth_toward(
            self.cursor_light.z,
            self.pointer.y * CURSOR_LIGHT_GAIN,
            CURSOR_LIGHT_SMOOTHING,
        );
        self.cursor_light.y = CURSOR_LIGHT_HEIGHT;
    }
}
