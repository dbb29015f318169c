// Host-side tests for scene assembly, configuration and the per-frame update order.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
    pub mod lighting {
        include!("../src/core/lighting.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod terrain {
        include!("../src/core/terrain.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::interaction::InteractionState;
use crate::core::scene::{Scene, SceneConfig};
use constants::*;
use glam::Vec2;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn small_config() -> SceneConfig {
    SceneConfig {
        star_count: 50,
        ember_count: 20,
        terrain_size: 20.0,
        terrain_segments: 8,
        seed: 3,
    }
}

#[test]
fn default_config_matches_reference_counts() {
    let c = SceneConfig::default();
    assert_eq!(c.star_count, 1500);
    assert_eq!(c.ember_count, 300);
    assert_eq!(c.terrain_segments, 64);
}

#[test]
fn overrides_replace_valid_values() {
    let c = SceneConfig::default().with_overrides(lookup(&[
        ("stars", "800"),
        ("embers", " 120 "),
        ("segments", "32"),
    ]));
    assert_eq!(c.star_count, 800);
    assert_eq!(c.ember_count, 120);
    assert_eq!(c.terrain_segments, 32);
}

#[test]
fn invalid_overrides_keep_defaults() {
    let c = SceneConfig::default().with_overrides(lookup(&[
        ("stars", "lots"),
        ("embers", "-5"),
        ("segments", "0"),
    ]));
    assert_eq!(c, SceneConfig::default());

    let c = SceneConfig::default().with_overrides(lookup(&[("segments", "100000")]));
    assert_eq!(c.terrain_segments, TERRAIN_SEGMENTS);
}

#[test]
fn missing_overrides_keep_defaults() {
    let c = SceneConfig::default().with_overrides(lookup(&[]));
    assert_eq!(c, SceneConfig::default());
}

#[test]
fn scene_uses_configured_sizes() {
    let scene = Scene::new(&small_config(), 2.0);
    assert_eq!(scene.stars.len(), 50);
    assert_eq!(scene.embers.len(), 20);
    assert_eq!(scene.terrain.vertices().len(), 81);
    assert_eq!(scene.camera.aspect, 2.0);
}

#[test]
fn star_and_ember_streams_are_independent() {
    let scene = Scene::new(&small_config(), 1.0);
    let star_x: Vec<f32> = scene.stars.positions().iter().take(5).map(|p| p.x).collect();
    let ember_x: Vec<f32> = scene.embers.positions().iter().take(5).map(|p| p.x).collect();
    assert_ne!(star_x, ember_x);
}

#[test]
fn advance_updates_every_component() {
    let mut scene = Scene::new(&small_config(), 1.0);
    let mut interaction = InteractionState::default();
    interaction.set_pointer(Vec2::new(0.5, 0.5));
    interaction.set_scroll(400.0);

    let terrain_before = scene.terrain.vertices()[10].position;
    let stars_before = scene.stars.positions().to_vec();
    let embers_before = scene.embers.positions().to_vec();
    let light_before = scene.lights.cursor.position;

    scene.advance(1.5, &mut interaction);

    assert_ne!(scene.terrain.vertices()[10].position, terrain_before);
    assert_ne!(scene.stars.positions(), &stars_before[..]);
    assert_ne!(scene.embers.positions(), &embers_before[..]);
    assert_ne!(scene.lights.cursor.position, light_before);
    assert!((scene.stars.roll() - 1.5 * STAR_ROLL_PER_SEC).abs() < 1e-6);
}

#[test]
fn advance_copies_smoothed_state_into_camera_and_light() {
    let mut scene = Scene::new(&small_config(), 1.0);
    let mut interaction = InteractionState::default();
    interaction.set_pointer(Vec2::new(-0.4, 0.2));
    for f in 0..30 {
        scene.advance(f as f32 / 60.0, &mut interaction);
        assert_eq!(scene.camera.eye, interaction.camera);
        assert_eq!(scene.lights.cursor.position, interaction.cursor_light);
        assert_eq!(scene.camera.target, CAMERA_LOOK_AT);
    }
}

#[test]
fn peak_light_stays_put() {
    let mut scene = Scene::new(&small_config(), 1.0);
    let mut interaction = InteractionState::default();
    for f in 0..10 {
        interaction.set_pointer(Vec2::new(f as f32 * 0.1, 0.0));
        scene.advance(f as f32, &mut interaction);
    }
    assert_eq!(scene.lights.peak.position, PEAK_LIGHT_POSITION);
}
