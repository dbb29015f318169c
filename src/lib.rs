#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTAINER_ID, SPRITE_SIZE};
use crate::core::{InteractionState, Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ridgeline starting");

    // Page effects run whether or not the 3D scene comes up
    if let Some(document) = dom::window_document() {
        if let Err(e) = ui::reveal::start(&document) {
            log::warn!("[reveal] disabled: {:?}", e);
        }
        ui::typewriter::start(&document);
    }

    spawn_local(async move {
        if let Err(e) = init_scene().await {
            log::error!("scene init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init_scene() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::info!("no #{} element, background scene disabled", CONTAINER_ID);
        return Ok(());
    };

    // The sprite is a hard precondition for both particle layers
    let sprite = render::sprite::draw_soft_disc(&document, SPRITE_SIZE)?;

    let config = SceneConfig::default()
        .with_seed(rand::random())
        .with_overrides(|key| dom::data_attribute(&container, key));
    log::info!(
        "[scene] stars={} embers={} segments={}",
        config.star_count,
        config.ember_count,
        config.terrain_segments
    );

    let canvas = dom::mount_canvas(&document, &container)?;
    wire_canvas_resize(&canvas);

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let scene = Scene::new(&config, aspect);
    let gpu = render::GpuState::new(&canvas, &sprite, &scene).await?;

    let interaction = Rc::new(RefCell::new(InteractionState::default()));
    events::wire_pointermove(interaction.clone());
    events::wire_scroll(interaction.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        interaction,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
