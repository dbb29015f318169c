use crate::constants::CLEAR_COLOR;
use crate::core::Scene;
use glam::Mat4;
use web_sys as web;

mod helpers;
mod points;
pub mod sprite;
mod targets;
mod terrain;

use points::{PointFrame, PointLayer, PointPipeline};
use targets::DepthTarget;
use terrain::TerrainResources;

pub use sprite::SpriteImage;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    terrain: TerrainResources,
    points: PointPipeline,
    stars: PointLayer,
    embers: PointLayer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        sprite: &SpriteImage,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let terrain = terrain::create_terrain_resources(&device, format, &scene.terrain);

        // One sprite texture shared by both particle layers
        let sprite_view = sprite::upload(&device, &queue, sprite);
        let points = points::create_point_pipeline(&device, format, &sprite_view);
        let stars = PointLayer::new(&device, &points, "stars", scene.stars.len(), points::star_style());
        let embers =
            PointLayer::new(&device, &points, "embers", scene.embers.len(), points::ember_style());

        log::info!(
            "[gpu] surface {}x{} {:?}, terrain verts={} stars={} embers={}",
            width,
            height,
            format,
            scene.terrain.vertices().len(),
            scene.stars.len(),
            scene.embers.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            terrain,
            points,
            stars,
            embers,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.reconfigure();
    }

    /// Re-apply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        terrain::write_terrain(&self.queue, &self.terrain, scene, self.clear_color);

        let (right, up) = scene.camera.billboard_axes();
        let view_proj = scene.camera.view_proj();
        self.stars.write(
            &self.queue,
            scene.stars.positions(),
            PointFrame {
                view_proj,
                model: Mat4::from_quat(scene.stars.rotation()),
                right,
                up,
            },
        );
        self.embers.write(
            &self.queue,
            scene.embers.positions(),
            PointFrame {
                view_proj,
                model: Mat4::IDENTITY,
                right,
                up,
            },
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Terrain first so particles depth-test against it
            terrain::draw(&mut pass, &self.terrain);
            self.points.bind(&mut pass);
            self.stars.draw(&mut pass);
            self.embers.draw(&mut pass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
