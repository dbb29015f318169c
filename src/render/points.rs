use super::helpers;
use super::targets::DEPTH_FORMAT;
use crate::constants::{
    EMBER_COLOR, EMBER_OPACITY, EMBER_SIZE, STAR_COLOR, STAR_OPACITY, STAR_SIZE,
};
use glam::{Mat4, Vec3};

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    right: [f32; 4],
    up: [f32; 4],
    color: [f32; 4],
    params: [f32; 4],
}

/// Fixed look of one particle layer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointStyle {
    pub(crate) color: [f32; 3],
    pub(crate) opacity: f32,
    pub(crate) size: f32,
}

pub(crate) fn star_style() -> PointStyle {
    PointStyle {
        color: STAR_COLOR,
        opacity: STAR_OPACITY,
        size: STAR_SIZE,
    }
}

pub(crate) fn ember_style() -> PointStyle {
    PointStyle {
        color: EMBER_COLOR,
        opacity: EMBER_OPACITY,
        size: EMBER_SIZE,
    }
}

/// Per-frame camera data for billboarding.
pub(crate) struct PointFrame {
    pub(crate) view_proj: Mat4,
    pub(crate) model: Mat4,
    pub(crate) right: Vec3,
    pub(crate) up: Vec3,
}

/// Pipeline and sprite binding shared by every particle layer.
pub(crate) struct PointPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_bgl: wgpu::BindGroupLayout,
    pub(crate) sprite_bind_group: wgpu::BindGroup,
}

impl PointPipeline {
    pub(crate) fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.sprite_bind_group, &[]);
    }
}

pub(crate) fn create_point_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sprite_view: &wgpu::TextureView,
) -> PointPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let uniform_bgl = helpers::uniform_bind_group_layout(
        device,
        "points_bgl0",
        wgpu::ShaderStages::VERTEX_FRAGMENT,
    );
    let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl1"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("sprite_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let sprite_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sprite_bg"),
        layout: &sprite_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(sprite_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&uniform_bgl, &sprite_bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("points_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_points"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vec3>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_points"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(additive),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    PointPipeline {
        pipeline,
        uniform_bgl,
        sprite_bind_group,
    }
}

/// Instance buffer and uniforms for one fixed-size particle set.
pub(crate) struct PointLayer {
    instance_buffer: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    style: PointStyle,
}

impl PointLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        pipeline: &PointPipeline,
        label: &str,
        capacity: usize,
        style: PointStyle,
    ) -> Self {
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity.max(1) * std::mem::size_of::<Vec3>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (uniform_buffer, bind_group) = helpers::uniform_buffer_with_bind_group(
            device,
            label,
            &pipeline.uniform_bgl,
            std::mem::size_of::<PointUniforms>() as u64,
        );
        Self {
            instance_buffer,
            count: 0,
            uniform_buffer,
            bind_group,
            style,
        }
    }

    pub(crate) fn write(&mut self, queue: &wgpu::Queue, positions: &[Vec3], frame: PointFrame) {
        self.count = positions.len() as u32;
        if positions.is_empty() {
            return;
        }
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(positions));
        let s = self.style;
        let uniforms = PointUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.model.to_cols_array_2d(),
            right: frame.right.extend(0.0).to_array(),
            up: frame.up.extend(0.0).to_array(),
            color: [s.color[0], s.color[1], s.color[2], s.opacity],
            params: [s.size, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Expects [`PointPipeline::bind`] to have been called on `pass`.
    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..6, 0..self.count);
    }
}
