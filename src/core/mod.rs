pub mod camera;
pub mod interaction;
pub mod lighting;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod terrain;
pub mod typewriter;

pub use camera::Camera;
pub use interaction::{pointer_offset, InteractionState};
pub use reveal::RevealTracker;
pub use scene::{Scene, SceneConfig};
pub use terrain::TerrainVertex;
pub use typewriter::{parse_phrases, Typewriter, TypewriterTimings};

// Shaders bundled as string constants
pub static TERRAIN_WGSL: &str = include_str!("../../shaders/terrain.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
