use super::helpers;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// Square RGBA8 image (straight alpha) used as the point-sprite texture.
pub struct SpriteImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

/// Rasterize a soft white disc on an offscreen 2D canvas and read it back.
///
/// A missing 2D context is returned as an error: without the sprite no
/// particle layer can be drawn, so the caller abandons the scene.
pub fn draw_soft_disc(document: &web::Document, size: u32) -> anyhow::Result<SpriteImage> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2D canvas context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let c = size as f64 / 2.0;
    let gradient = ctx
        .create_radial_gradient(c, c, 0.0, c, c, c)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for (offset, color) in [
        (0.0, "rgba(255,255,255,1)"),
        (0.2, "rgba(255,255,255,0.8)"),
        (0.5, "rgba(255,255,255,0.25)"),
        (1.0, "rgba(255,255,255,0)"),
    ] {
        gradient
            .add_color_stop(offset, color)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(c, c, c, 0.0, std::f64::consts::TAU)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.fill();

    let Clamped(rgba) = ctx
        .get_image_data(0.0, 0.0, size as f64, size as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .data();
    Ok(SpriteImage { size, rgba })
}

/// Upload the sprite once; the returned view is shared by all particle layers.
pub(crate) fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &SpriteImage,
) -> wgpu::TextureView {
    let (tex, view) = helpers::create_texture(
        device,
        "sprite_tex",
        image.size,
        image.size,
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.size),
            rows_per_image: Some(image.size),
        },
        wgpu::Extent3d {
            width: image.size,
            height: image.size,
            depth_or_array_layers: 1,
        },
    );
    view
}
