use wgpu::util::DeviceExt;

use crate::geometry::{Float3, TriangleGeometry};

use super::shader::ShaderLibrary;
use super::{RenderError, RenderTarget};

const SHADER_SOURCE: &str = include_str!("shaders/triangle.wgsl");

const VERTEX_ENTRY: &str = "vertexShader";
const FRAGMENT_ENTRY: &str = "fragmentShader";

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

/// Triangle index width. The geometry table stores `u16` indices.
const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

/// Renders one static triangle.
///
/// Construction compiles the pipeline state and uploads the geometry table
/// into three GPU buffers exactly once; no allocation happens afterwards.
/// [`draw`] records one indexed draw per call and takes `&self`; buffers
/// and pipeline are immutable for the renderer's lifetime.
///
/// [`draw`]: TriangleRenderer::draw
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl TriangleRenderer {
    /// Builds the pipeline and uploads `geometry`.
    ///
    /// `target_format` must match the format the surface was configured
    /// with. Shader and pipeline validation errors are trapped through a
    /// wgpu error scope and surfaced with the underlying message.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        geometry: &TriangleGeometry,
    ) -> Result<Self, RenderError> {
        // One scope covers shader module + pipeline creation; both belong to
        // the same failure class (pipeline state compilation).
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let library = ShaderLibrary::new(device, "trigon triangle shader", SHADER_SOURCE);
        let vertex_entry = library.entry_point(VERTEX_ENTRY)?;
        let fragment_entry = library.entry_point(FRAGMENT_ENTRY)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trigon triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: library.module(),
                entry_point: Some(vertex_entry),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: library.module(),
                entry_point: Some(fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::PipelineCompileFailed { message: err.to_string() });
        }

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon position buffer"),
            contents: geometry.position_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon color buffer"),
            contents: geometry.color_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon index buffer"),
            contents: geometry.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            pipeline,
            position_buffer,
            color_buffer,
            index_buffer,
            index_count: geometry.index_count(),
        })
    }

    /// Records one indexed draw of the triangle into `target`.
    ///
    /// Binds the pipeline, the position buffer at slot 0, the color buffer
    /// at slot 1, and the 16-bit index buffer. The pass loads the existing
    /// target contents (the frame's clear pass runs beforehand).
    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), INDEX_FORMAT);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Float3>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Float3>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn both_slots_use_the_unpadded_float3_stride() {
        assert_eq!(position_layout().array_stride, 12);
        assert_eq!(color_layout().array_stride, 12);
    }

    #[test]
    fn attributes_are_float3_at_offset_zero() {
        for layout in [position_layout(), color_layout()] {
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
            assert_eq!(layout.attributes[0].offset, 0);
            assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        }
    }

    #[test]
    fn positions_feed_location_zero_and_colors_location_one() {
        assert_eq!(position_layout().attributes[0].shader_location, 0);
        assert_eq!(color_layout().attributes[0].shader_location, 1);
    }

    // ── draw parameters ───────────────────────────────────────────────────

    #[test]
    fn indices_are_sixteen_bit() {
        assert_eq!(INDEX_FORMAT, wgpu::IndexFormat::Uint16);
    }

    #[test]
    fn draw_covers_exactly_the_table_indices() {
        let g = TriangleGeometry::hello_triangle();
        assert_eq!(g.index_count(), 3);
    }

    // ── shader contract ───────────────────────────────────────────────────

    #[test]
    fn embedded_library_source_names_both_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vertexShader"));
        assert!(SHADER_SOURCE.contains("fn fragmentShader"));
    }
}
