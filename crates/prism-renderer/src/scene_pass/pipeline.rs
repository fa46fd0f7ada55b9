//! wgpu render pipeline for the glass shapes.
//!
//! Renders all shapes into an offscreen `rgba16float` texture with a
//! depth buffer; the result feeds the bloom and composite passes.
//! Per-shape uniforms live in one buffer addressed with dynamic offsets.

use super::types::{SceneUniforms, ShapeUniforms, SHAPE_UNIFORM_STRIDE};
use crate::geometry::{GeometryCatalogue, GeometryKind, MeshRange, MeshVertex};

/// Manages the shape pipeline, shared vertex buffer, uniform buffers, and
/// the offscreen color/depth targets.
pub struct ScenePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub ranges: [MeshRange; 6],
    pub scene_uniform_buffer: wgpu::Buffer,
    pub scene_bind_group: wgpu::BindGroup,
    pub shape_uniform_buffer: wgpu::Buffer,
    pub shape_bind_group: wgpu::BindGroup,
    pub shape_capacity: u32,
    pub offscreen_texture: wgpu::Texture,
    pub offscreen_view: wgpu::TextureView,
    pub depth_texture: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
}

impl ScenePipeline {
    /// Create the scene pipeline.
    ///
    /// - `catalogue`: packed geometry for all six shape kinds
    /// - `shape_capacity`: number of per-shape uniform slots
    /// - `width`/`height`: offscreen texture dimensions
    /// - `clear_color`: linear-space background color
    pub fn new(
        device: &wgpu::Device,
        catalogue: &GeometryCatalogue,
        shape_capacity: u32,
        width: u32,
        height: u32,
        clear_color: [f32; 3],
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/scene.wgsl").into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene vertex buffer"),
            contents: bytemuck::cast_slice(&catalogue.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("scene bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<SceneUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene bind group"),
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        let shape_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shape uniforms"),
            size: SHAPE_UNIFORM_STRIDE * shape_capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let shape_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("shape bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<ShapeUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let shape_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shape bind group"),
            layout: &shape_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &shape_uniform_buffer,
                    offset: 0,
                    size: std::num::NonZeroU64::new(std::mem::size_of::<ShapeUniforms>() as u64),
                }),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[&scene_bind_group_layout, &shape_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Rgba16Float,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Translucent shapes: both faces contribute.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (offscreen_texture, offscreen_view) = create_color_target(device, width, height);
        let (depth_texture, depth_view) = create_depth_target(device, width, height);

        Self {
            pipeline,
            vertex_buffer,
            ranges: catalogue.ranges,
            scene_uniform_buffer,
            scene_bind_group,
            shape_uniform_buffer,
            shape_bind_group,
            shape_capacity,
            offscreen_texture,
            offscreen_view,
            depth_texture,
            depth_view,
            clear_color: wgpu::Color {
                r: clear_color[0] as f64,
                g: clear_color[1] as f64,
                b: clear_color[2] as f64,
                a: 1.0,
            },
        }
    }

    /// Recreate the offscreen color and depth targets after a resize.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (tex, view) = create_color_target(device, width, height);
        self.offscreen_texture = tex;
        self.offscreen_view = view;
        let (tex, view) = create_depth_target(device, width, height);
        self.depth_texture = tex;
        self.depth_view = view;
    }

    /// Upload the frame-wide uniforms.
    pub fn update_scene_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload per-shape uniforms, one stride-aligned slot per shape.
    pub fn update_shape_uniforms(&self, queue: &wgpu::Queue, shapes: &[ShapeUniforms]) {
        let count = shapes.len().min(self.shape_capacity as usize);
        let mut staging = vec![0u8; SHAPE_UNIFORM_STRIDE as usize * count];
        for (i, uniforms) in shapes.iter().take(count).enumerate() {
            let offset = i * SHAPE_UNIFORM_STRIDE as usize;
            let bytes = bytemuck::bytes_of(uniforms);
            staging[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.shape_uniform_buffer, 0, &staging);
    }

    /// Record the shape pass: clear to the background color, then draw
    /// each shape's vertex range with its uniform slot.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, kinds: &[GeometryKind]) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.offscreen_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.scene_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        for (i, kind) in kinds.iter().take(self.shape_capacity as usize).enumerate() {
            let offset = (i as u64 * SHAPE_UNIFORM_STRIDE) as u32;
            pass.set_bind_group(1, &self.shape_bind_group, &[offset]);
            let range = self.ranges[kind.index()];
            pass.draw(range.first..range.first + range.count, 0..1);
        }
    }
}

fn create_color_target(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("scene offscreen"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba16Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

fn create_depth_target(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("scene depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}
