use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orrery_render::{DrawCmd, CLEAR_COLOR};
use wgpu::util::DeviceExt;

use crate::camera::SceneCamera;
use crate::shaders;

/// Sphere tessellation: meridians and parallels of the wire mesh.
const SPHERE_SLICES: u32 = 20;
const SPHERE_STACKS: u32 = 20;
/// One-degree segments for the orbit circle.
const RING_SEGMENTS: u32 = 360;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: [f32; 3]) -> Self {
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Unit wireframe sphere as a line list: latitude rings plus longitude arcs.
fn wire_sphere_mesh(slices: u32, stacks: u32) -> Vec<Vertex> {
    let mut verts = Vec::new();

    let point = |phi: f32, theta: f32| -> Vertex {
        Vertex {
            position: [
                phi.cos() * theta.cos(),
                phi.sin(),
                phi.cos() * theta.sin(),
            ],
        }
    };

    // Latitude rings (poles excluded; they are single points).
    for i in 1..stacks {
        let phi = -FRAC_PI_2 + PI * i as f32 / stacks as f32;
        for j in 0..slices {
            let theta0 = TAU * j as f32 / slices as f32;
            let theta1 = TAU * (j + 1) as f32 / slices as f32;
            verts.push(point(phi, theta0));
            verts.push(point(phi, theta1));
        }
    }

    // Longitude arcs, pole to pole.
    for j in 0..slices {
        let theta = TAU * j as f32 / slices as f32;
        for i in 0..stacks {
            let phi0 = -FRAC_PI_2 + PI * i as f32 / stacks as f32;
            let phi1 = -FRAC_PI_2 + PI * (i + 1) as f32 / stacks as f32;
            verts.push(point(phi0, theta));
            verts.push(point(phi1, theta));
        }
    }

    verts
}

/// Unit circle in the XZ plane as a closed line list.
fn orbit_ring_mesh(segments: u32) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(2 * segments as usize);
    for i in 0..segments {
        let theta0 = TAU * i as f32 / segments as f32;
        let theta1 = TAU * (i + 1) as f32 / segments as f32;
        verts.push(Vertex {
            position: [theta0.cos(), 0.0, theta0.sin()],
        });
        verts.push(Vertex {
            position: [theta1.cos(), 0.0, theta1.sin()],
        });
    }
    verts
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    sphere_vertex_buffer: wgpu::Buffer,
    sphere_vertex_count: u32,
    ring_vertex_buffer: wgpu::Buffer,
    ring_vertex_count: u32,
    ring_instance_buffer: wgpu::Buffer,
    sphere_instance_buffer: wgpu::Buffer,
    max_instances: u32,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        // Uniform buffer
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("line_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::LINE_SHADER.into()),
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &line_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x4,
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &line_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Unit meshes; radii arrive through instance model matrices.
        let sphere_verts = wire_sphere_mesh(SPHERE_SLICES, SPHERE_STACKS);
        let sphere_vertex_count = sphere_verts.len() as u32;
        let sphere_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertex_buffer"),
            contents: bytemuck::cast_slice(&sphere_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ring_verts = orbit_ring_mesh(RING_SEGMENTS);
        let ring_vertex_count = ring_verts.len() as u32;
        let ring_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring_vertex_buffer"),
            contents: bytemuck::cast_slice(&ring_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Instance buffers (pre-allocated; the scene is a dozen draws)
        let max_instances = 64u32;
        let instance_size =
            (max_instances as u64) * std::mem::size_of::<InstanceData>() as u64;
        let ring_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ring_instance_buffer"),
            size: instance_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sphere_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere_instance_buffer"),
            size: instance_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            line_pipeline,
            uniform_buffer,
            uniform_bind_group,
            sphere_vertex_buffer,
            sphere_vertex_count,
            ring_vertex_buffer,
            ring_vertex_count,
            ring_instance_buffer,
            sphere_instance_buffer,
            max_instances,
            depth_texture,
            surface_format,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame from the given draw-command sequence.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &SceneCamera,
        frame: &[DrawCmd],
    ) {
        let vp = camera.view_projection();
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: vp.to_cols_array_2d(),
            }),
        );

        // Split the command stream into the two instanced batches. Depth
        // testing makes the batch order equivalent to the command order.
        let mut clear_color = CLEAR_COLOR;
        let mut rings: Vec<InstanceData> = Vec::new();
        let mut spheres: Vec<InstanceData> = Vec::new();
        for cmd in frame {
            match *cmd {
                DrawCmd::Clear { color } => clear_color = color,
                DrawCmd::OrbitRing { model, color } => {
                    rings.push(InstanceData::new(model, color));
                }
                DrawCmd::Sphere { model, color } => {
                    spheres.push(InstanceData::new(model, color));
                }
            }
        }
        if rings.len() > self.max_instances as usize
            || spheres.len() > self.max_instances as usize
        {
            tracing::warn!(
                rings = rings.len(),
                spheres = spheres.len(),
                max = self.max_instances,
                "frame exceeds instance capacity, truncating"
            );
            rings.truncate(self.max_instances as usize);
            spheres.truncate(self.max_instances as usize);
        }

        if !rings.is_empty() {
            queue.write_buffer(&self.ring_instance_buffer, 0, bytemuck::cast_slice(&rings));
        }
        if !spheres.is_empty() {
            queue.write_buffer(
                &self.sphere_instance_buffer,
                0,
                bytemuck::cast_slice(&spheres),
            );
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear_color[0] as f64,
                            g: clear_color[1] as f64,
                            b: clear_color[2] as f64,
                            a: clear_color[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.line_pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !rings.is_empty() {
                pass.set_vertex_buffer(0, self.ring_vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.ring_instance_buffer.slice(..));
                pass.draw(0..self.ring_vertex_count, 0..rings.len() as u32);
            }

            if !spheres.is_empty() {
                pass.set_vertex_buffer(0, self.sphere_vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.sphere_instance_buffer.slice(..));
                pass.draw(0..self.sphere_vertex_count, 0..spheres.len() as u32);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
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
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_is_a_line_list_on_the_unit_sphere() {
        let verts = wire_sphere_mesh(SPHERE_SLICES, SPHERE_STACKS);
        // Latitude rings: (stacks - 1) rings of `slices` segments.
        // Longitude arcs: `slices` arcs of `stacks` segments.
        let expected = 2 * (SPHERE_STACKS - 1) * SPHERE_SLICES + 2 * SPHERE_SLICES * SPHERE_STACKS;
        assert_eq!(verts.len() as u32, expected);
        assert_eq!(verts.len() % 2, 0);

        for v in &verts {
            let [x, y, z] = v.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 1.0).abs() < 1e-5, "vertex off the unit sphere: {r}");
        }
    }

    #[test]
    fn ring_mesh_has_360_segments_in_the_xz_plane() {
        let verts = orbit_ring_mesh(RING_SEGMENTS);
        assert_eq!(verts.len(), 720);
        for v in &verts {
            let [x, y, z] = v.position;
            assert_eq!(y, 0.0);
            let r = (x * x + z * z).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn ring_mesh_closes_the_loop() {
        let verts = orbit_ring_mesh(RING_SEGMENTS);
        let first = verts.first().unwrap().position;
        let last = verts.last().unwrap().position;
        for axis in 0..3 {
            assert!((first[axis] - last[axis]).abs() < 1e-4);
        }
    }

    #[test]
    fn instance_data_packs_the_model_columns() {
        let model = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let inst = InstanceData::new(model, [0.5, 0.2, 0.8]);
        assert_eq!(inst.model_3, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(inst.color, [0.5, 0.2, 0.8, 1.0]);
    }
}
