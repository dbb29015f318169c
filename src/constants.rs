// Scene tuning constants shared by the simulation core and the web frontend.
//
// These constants express intended behavior (amplitudes, bands, smoothing
// factors, delays) and keep magic numbers out of the update code.
use glam::Vec3;

// Terrain height field
pub const TERRAIN_SIZE: f32 = 60.0; // plane width and depth in world units
pub const TERRAIN_SEGMENTS: u32 = 64; // subdivisions per side
pub const TERRAIN_AMP_BROAD: f32 = 1.5;
pub const TERRAIN_FREQ_BROAD: f32 = 0.3;
pub const TERRAIN_AMP_DETAIL: f32 = 0.4;
pub const TERRAIN_FREQ_DETAIL: f32 = 1.2;
pub const TERRAIN_SCROLL_SPEED: f32 = 2.0; // sampling shift along base y per second
pub const RIDGE_START: f32 = 10.0; // base y where the horizon ridge begins
pub const RIDGE_SLOPE: f32 = 0.6;
// World-space placement of the (flattened) terrain plane
pub const TERRAIN_OFFSET: Vec3 = Vec3::new(0.0, -2.0, -10.0);

// Star field
pub const STAR_COUNT: usize = 1500;
pub const STAR_SPREAD: f32 = 200.0; // lateral extent, centered on the view axis
pub const STAR_Z_FAR: f32 = -120.0;
pub const STAR_Z_NEAR: f32 = 10.0;
pub const STAR_DRIFT_PER_FRAME: f32 = 0.05;
pub const STAR_ROLL_PER_SEC: f32 = 0.02; // radians

// Ember field
pub const EMBER_COUNT: usize = 300;
pub const EMBER_SPREAD_X: f32 = 40.0;
pub const EMBER_Y_FLOOR: f32 = -2.0;
pub const EMBER_Y_CEIL: f32 = 10.0;
pub const EMBER_Z_NEAR: f32 = 5.0;
pub const EMBER_Z_FAR: f32 = -25.0;
pub const EMBER_RISE_MIN: f32 = 0.01;
pub const EMBER_RISE_MAX: f32 = 0.03;
pub const EMBER_SWAY: f32 = 0.01;

// Seed mixing for independent per-field RNG streams
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_BASE: Vec3 = Vec3::new(0.0, 2.0, 8.0); // rest position, z is the base depth
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 1.0, -5.0);
pub const CAMERA_POINTER_GAIN: f32 = 3.0;
pub const CAMERA_SMOOTHING: f32 = 0.03;
pub const CAMERA_DRIFT_X_RATE: f32 = 0.2;
pub const CAMERA_DRIFT_Y_RATE: f32 = 0.1;
pub const SCROLL_DEPTH_FACTOR: f32 = 0.005;

// Pointer
pub const POINTER_SENSITIVITY: f32 = 0.001; // pixels from center -> offset units

// Lighting
pub const AMBIENT_COLOR: [f32; 3] = [0.25, 0.2, 0.45];
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const PEAK_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 18.0, -45.0); // behind the ridge
pub const PEAK_LIGHT_COLOR: [f32; 3] = [1.0, 0.35, 0.75];
pub const PEAK_LIGHT_INTENSITY: f32 = 2.2;
pub const PEAK_LIGHT_RANGE: f32 = 120.0;
pub const CURSOR_LIGHT_COLOR: [f32; 3] = [0.3, 0.85, 1.0];
pub const CURSOR_LIGHT_INTENSITY: f32 = 2.5;
pub const CURSOR_LIGHT_RANGE: f32 = 25.0;
pub const CURSOR_LIGHT_GAIN: f32 = 5.0;
pub const CURSOR_LIGHT_SMOOTHING: f32 = 0.05;
pub const CURSOR_LIGHT_HEIGHT: f32 = -1.0; // just under the terrain crests
pub const LIGHT_DECAY: f32 = 2.0;

// Typewriter (milliseconds)
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

// Fade-in on scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Rendering
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.01, 0.05];
pub const TERRAIN_COLOR: [f32; 3] = [0.55, 0.35, 1.0];
pub const FOG_DENSITY: f32 = 0.025;
pub const STAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const STAR_SIZE: f32 = 0.35;
pub const STAR_OPACITY: f32 = 0.8;
pub const EMBER_COLOR: [f32; 3] = [1.0, 0.55, 0.2];
pub const EMBER_SIZE: f32 = 0.18;
pub const EMBER_OPACITY: f32 = 0.9;
pub const SPRITE_SIZE: u32 = 32; // texels per side
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Page contract
pub const CONTAINER_ID: &str = "scene-container";
pub const TYPEWRITER_ID: &str = "typewriter";
pub const REVEAL_SELECTOR: &str = ".fade-up";
pub const REVEAL_CLASS: &str = "visible";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
pub const CURSOR_CLASS: &str = "cursor";
