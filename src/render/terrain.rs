use super::helpers;
use super::targets::DEPTH_FORMAT;
use crate::constants::{FOG_DENSITY, LIGHT_DECAY, TERRAIN_COLOR, TERRAIN_OFFSET};
use crate::core::lighting::PointLight;
use crate::core::terrain::TerrainField;
use crate::core::{Scene, TerrainVertex};
use glam::Mat4;
use wgpu::util::DeviceExt;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TerrainUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    peak_pos: [f32; 4],
    peak_color: [f32; 4],
    cursor_pos: [f32; 4],
    cursor_color: [f32; 4],
    base_color: [f32; 4],
    fog: [f32; 4],
}

pub(crate) struct TerrainResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// Lays the local plane flat (its `+y` runs away from the viewer) and moves it
/// below and ahead of the camera.
pub(crate) fn terrain_model() -> Mat4 {
    Mat4::from_translation(TERRAIN_OFFSET) * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
}

pub(crate) fn create_terrain_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    field: &TerrainField,
) -> TerrainResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("terrain_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TERRAIN_WGSL.into()),
    });
    let bgl = helpers::uniform_bind_group_layout(
        device,
        "terrain_bgl",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("terrain_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("terrain_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_terrain"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<TerrainVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_terrain"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    // Heights change every frame; the edge list never does.
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("terrain_vertices"),
        contents: bytemuck::cast_slice(field.vertices()),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });
    let indices = field.wireframe_indices();
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("terrain_wire_indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let (uniform_buffer, bind_group) = helpers::uniform_buffer_with_bind_group(
        device,
        "terrain_uniforms",
        &bgl,
        std::mem::size_of::<TerrainUniforms>() as u64,
    );

    TerrainResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}

fn light_pos(light: &PointLight) -> [f32; 4] {
    light.position.extend(light.range).to_array()
}

fn light_color(light: &PointLight) -> [f32; 4] {
    light.radiance().extend(LIGHT_DECAY).to_array()
}

pub(crate) fn write_terrain(
    queue: &wgpu::Queue,
    res: &TerrainResources,
    scene: &Scene,
    fog_color: wgpu::Color,
) {
    queue.write_buffer(
        &res.vertex_buffer,
        0,
        bytemuck::cast_slice(scene.terrain.vertices()),
    );

    let lights = &scene.lights;
    let ambient = lights.ambient.color * lights.ambient.intensity;
    let uniforms = TerrainUniforms {
        view_proj: scene.camera.view_proj().to_cols_array_2d(),
        model: terrain_model().to_cols_array_2d(),
        camera_pos: scene.camera.eye.extend(1.0).to_array(),
        ambient: ambient.extend(0.0).to_array(),
        peak_pos: light_pos(&lights.peak),
        peak_color: light_color(&lights.peak),
        cursor_pos: light_pos(&lights.cursor),
        cursor_color: light_color(&lights.cursor),
        base_color: [TERRAIN_COLOR[0], TERRAIN_COLOR[1], TERRAIN_COLOR[2], 1.0],
        fog: [
            fog_color.r as f32,
            fog_color.g as f32,
            fog_color.b as f32,
            FOG_DENSITY,
        ],
    };
    queue.write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
}

pub(crate) fn draw(pass: &mut wgpu::RenderPass<'_>, res: &TerrainResources) {
    pass.set_pipeline(&res.pipeline);
    pass.set_bind_group(0, &res.bind_group, &[]);
    pass.set_vertex_buffer(0, res.vertex_buffer.slice(..));
    pass.set_index_buffer(res.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    pass.draw_indexed(0..res.index_count, 0, 0..1);
}
