use crate::constants::{EMBER_COUNT, SEED_MIX, STAR_COUNT, TERRAIN_SEGMENTS, TERRAIN_SIZE};
use crate::core::camera::Camera;
use crate::core::interaction::InteractionState;
use crate::core::lighting::LightingRig;
use crate::core::particles::{EmberField, StarField};
use crate::core::terrain::TerrainField;

// Upper bounds for page-supplied overrides
const MAX_PARTICLES: usize = 20_000;
const MAX_SEGMENTS: u32 = 256;

/// Runtime knobs for building a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub star_count: usize,
    pub ember_count: usize,
    pub terrain_size: f32,
    pub terrain_segments: u32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            ember_count: EMBER_COUNT,
            terrain_size: TERRAIN_SIZE,
            terrain_segments: TERRAIN_SEGMENTS,
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Apply overrides looked up by key (`stars`, `embers`, `segments`).
    ///
    /// Values that fail to parse or fall outside the accepted range are
    /// logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(n) = parse_bounded::<usize>(&lookup, "stars", 0, MAX_PARTICLES) {
            self.star_count = n;
        }
        if let Some(n) = parse_bounded::<usize>(&lookup, "embers", 0, MAX_PARTICLES) {
            self.ember_count = n;
        }
        if let Some(n) = parse_bounded::<u32>(&lookup, "segments", 1, MAX_SEGMENTS) {
            self.terrain_segments = n;
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

fn parse_bounded<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, min: T, max: T) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Copy + std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) if v >= min && v <= max => Some(v),
        _ => {
            log::warn!("[config] ignoring {}={:?} (expected {}..={})", key, raw, min, max);
            None
        }
    }
}

/// Everything the renderer draws, owned in one place.
pub struct Scene {
    pub terrain: TerrainField,
    pub stars: StarField,
    pub embers: EmberField,
    pub lights: LightingRig,
    pub camera: Camera,
}

impl Scene {
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        Self {
            terrain: TerrainField::new(config.terrain_size, config.terrain_segments),
            stars: StarField::new(config.star_count, config.seed),
            embers: EmberField::new(config.ember_count, config.seed ^ SEED_MIX),
            lights: LightingRig::default(),
            camera: Camera::new(aspect),
        }
    }

    /// Run one frame's worth of updates for elapsed time `t`.
    ///
    /// Each step reads only `t` and state committed on earlier frames, so the
    /// order only has to finish before the frame is rendered.
    pub fn advance(&mut self, t: f32, interaction: &mut InteractionState) {
        self.terrain.update(t);

        interaction.update(t);
        self.camera.eye = interaction.camera;
        self.lights.follow_cursor(interaction.cursor_light);

        self.embers.update(t);
        self.stars.update(t);
    }
}
