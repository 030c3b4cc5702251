//! Renderer for the 3D comparison scene

use bytemuck::Zeroable;
use common::{
    create_dynamic_vertex_buffer, create_uniform_buffer, create_vertex_buffer, Camera3D,
    CameraUniform, GraphicsContext, Vertex,
};
use glam::Vec3;
use rand::Rng;
use size_compare::rings::ring_system;
use size_compare::{BodyKind, CelestialBody, ScalingResult};

const STAR_COUNT: usize = 200;
const STARFIELD_HALF_EXTENT: f32 = 1000.0;
const STAR_RADIUS: f32 = 2.0;
const MAX_INSTANCES: usize = 256;
const MAX_RING_VERTICES: usize = 4096;

pub const STYLE_LIT: u32 = 0;
pub const STYLE_EMISSIVE: u32 = 1;
pub const STYLE_HALO: u32 = 2;
pub const STYLE_FLAT: u32 = 3;

/// Key light position, like a distant sun up and to the right
const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// Per-sphere instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub style: u32,
    _pad: [u32; 3],
}

impl BodyInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x3,
        2 => Float32,
        3 => Float32x4,
        4 => Uint32,
    ];

    pub fn new(position: Vec3, radius: f32, color: [f32; 4], style: u32) -> Self {
        Self {
            position: position.to_array(),
            radius,
            color,
            style,
            _pad: [0; 3],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BodyInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad vertex for billboards
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Geometry for one comparison, ready for upload
#[derive(Debug, Default)]
pub struct SceneGeometry {
    /// Opaque spheres, drawn with depth writes
    pub bodies: Vec<BodyInstance>,
    /// Translucent shells, drawn after everything else
    pub halos: Vec<BodyInstance>,
    pub rings: Vec<Vertex>,
}

impl SceneGeometry {
    pub fn build(first: &CelestialBody, second: &CelestialBody, scaling: &ScalingResult) -> Self {
        let (xa, xb) = scaling.centers();
        let mut scene = Self::default();
        scene.add_body(first, Vec3::new(xa as f32, 0.0, 0.0), scaling.display_radius_a);
        scene.add_body(second, Vec3::new(xb as f32, 0.0, 0.0), scaling.display_radius_b);
        scene
    }

    fn add_body(&mut self, body: &CelestialBody, center: Vec3, display_radius: f64) {
        let radius = display_radius as f32;

        if body.kind == BodyKind::BlackHole {
            self.bodies
                .push(BodyInstance::new(center, radius, [0.0, 0.0, 0.0, 0.9], STYLE_FLAT));
        } else if body.kind.is_self_luminous() {
            self.bodies
                .push(BodyInstance::new(center, radius, body.color.to_linear_rgba(1.0), STYLE_EMISSIVE));
            for (scale, alpha) in [(1.1, 0.2), (1.2, 0.1)] {
                self.halos.push(BodyInstance::new(
                    center,
                    radius * scale,
                    body.color.to_linear_rgba(alpha),
                    STYLE_HALO,
                ));
            }
        } else {
            self.bodies
                .push(BodyInstance::new(center, radius, body.color.to_linear_rgba(1.0), STYLE_LIT));
            if body.kind.reflects_light() {
                self.halos.push(BodyInstance::new(
                    center,
                    radius * 1.05,
                    body.color.to_linear_rgba(0.08),
                    STYLE_HALO,
                ));
            }
        }

        if let Some(rings) = ring_system(body, display_radius) {
            self.rings.extend(rings.vertices(center));
        }
    }
}

pub struct SceneRenderer {
    body_pipeline: wgpu::RenderPipeline,
    halo_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    ring_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth_texture: wgpu::TextureView,
    stars: Vec<BodyInstance>,
    body_count: u32,
    halo_count: u32,
    ring_vertex_count: u32,
}

impl SceneRenderer {
    pub fn new(ctx: &GraphicsContext) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Body Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/bodies.wgsl").into()),
        });

        let camera_buffer = create_uniform_buffer(device, &CameraUniform::zeroed());

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_texture = Self::create_depth_texture(device, ctx.size.width, ctx.size.height);

        let depth_state = |write: bool| {
            Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        };

        let color_targets = [Some(wgpu::ColorTargetState {
            format: ctx.config.format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            write_mask: wgpu::ColorWrites::ALL,
        })];

        let sphere_pipeline = |label: &str, depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_body",
                    buffers: &[QuadVertex::layout(), BodyInstance::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_body",
                    targets: &color_targets,
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    ..Default::default()
                },
                depth_stencil: depth_state(depth_write),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
        };

        let body_pipeline = sphere_pipeline("Body Pipeline", true);
        let halo_pipeline = sphere_pipeline("Halo Pipeline", false);

        // Rings are seen from both sides, so no culling
        let ring_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ring Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_ring",
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_ring",
                targets: &color_targets,
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: depth_state(false),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = create_vertex_buffer(device, "Quad Buffer", QUAD_VERTICES);
        let instance_buffer =
            create_dynamic_vertex_buffer::<BodyInstance>(device, "Instance Buffer", MAX_INSTANCES);
        let ring_buffer =
            create_dynamic_vertex_buffer::<Vertex>(device, "Ring Buffer", MAX_RING_VERTICES);

        Self {
            body_pipeline,
            halo_pipeline,
            ring_pipeline,
            quad_buffer,
            instance_buffer,
            ring_buffer,
            camera_buffer,
            camera_bind_group,
            depth_texture,
            stars: starfield(),
            body_count: 0,
            halo_count: 0,
            ring_vertex_count: 0,
        }
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
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
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera3D) {
        let uniform = CameraUniform::from_camera_3d(camera, LIGHT_POSITION);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Upload the stars plus `scene`; halos go last in the instance buffer
    pub fn update_scene(&mut self, queue: &wgpu::Queue, scene: &SceneGeometry) {
        let mut instances = Vec::with_capacity(self.stars.len() + scene.bodies.len() + scene.halos.len());
        instances.extend_from_slice(&self.stars);
        instances.extend_from_slice(&scene.bodies);
        let halo_start = instances.len();
        instances.extend_from_slice(&scene.halos);
        instances.truncate(MAX_INSTANCES);

        self.body_count = halo_start.min(instances.len()) as u32;
        self.halo_count = (instances.len() - self.body_count as usize) as u32;
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let rings = &scene.rings[..scene.rings.len().min(MAX_RING_VERTICES)];
        self.ring_vertex_count = rings.len() as u32;
        if !rings.is_empty() {
            queue.write_buffer(&self.ring_buffer, 0, bytemuck::cast_slice(rings));
        }

        log::debug!(
            "scene: {} spheres, {} halos, {} ring vertices",
            self.body_count,
            self.halo_count,
            self.ring_vertex_count
        );
    }

    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
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
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        if self.body_count > 0 {
            render_pass.set_pipeline(&self.body_pipeline);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(0..6, 0..self.body_count);
        }

        if self.ring_vertex_count > 0 {
            render_pass.set_pipeline(&self.ring_pipeline);
            render_pass.set_vertex_buffer(0, self.ring_buffer.slice(..));
            render_pass.draw(0..self.ring_vertex_count, 0..1);
        }

        if self.halo_count > 0 {
            render_pass.set_pipeline(&self.halo_pipeline);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(0..6, self.body_count..self.body_count + self.halo_count);
        }
    }
}

/// Random background stars in a cube around the origin
fn starfield() -> Vec<BodyInstance> {
    let mut rng = rand::thread_rng();
    (0..STAR_COUNT)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-STARFIELD_HALF_EXTENT..STARFIELD_HALF_EXTENT),
                rng.gen_range(-STARFIELD_HALF_EXTENT..STARFIELD_HALF_EXTENT),
                rng.gen_range(-STARFIELD_HALF_EXTENT..STARFIELD_HALF_EXTENT),
            );
            BodyInstance::new(position, STAR_RADIUS, [1.0, 1.0, 1.0, 1.0], STYLE_FLAT)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use size_compare::{compute_scaling, Catalog, ScalingOptions};

    fn scene(a: &str, b: &str) -> SceneGeometry {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.get(a).unwrap();
        let second = catalog.get(b).unwrap();
        let scaling = compute_scaling(first.radius, second.radius, &ScalingOptions::default()).unwrap();
        SceneGeometry::build(first, second, &scaling)
    }

    #[test]
    fn test_instance_stride() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 48);
    }

    #[test]
    fn test_star_gets_two_halos() {
        let s = scene("sun", "earth");
        assert_eq!(s.bodies.len(), 2);
        assert_eq!(s.bodies[0].style, STYLE_EMISSIVE);
        assert_eq!(s.bodies[1].style, STYLE_LIT);
        // Two glow shells for the Sun, one atmosphere for Earth
        assert_eq!(s.halos.len(), 3);
        assert!(s.rings.is_empty());
    }

    #[test]
    fn test_black_hole_is_flat_with_disk() {
        let s = scene("sagittarius_a", "saturn");
        assert_eq!(s.bodies[0].style, STYLE_FLAT);
        assert_eq!(s.bodies[0].color, [0.0, 0.0, 0.0, 0.9]);
        // Disk (32 segments) plus Saturn's four bands (64 segments)
        assert_eq!(s.rings.len(), 32 * 6 + 4 * 64 * 6);
    }

    #[test]
    fn test_bodies_placed_at_centers() {
        let s = scene("earth", "moon");
        let earth = s.bodies[0];
        let moon = s.bodies[1];
        assert!(earth.position[0] < 0.0);
        assert!(moon.position[0] > 0.0);
        // Outer edges sit symmetric about the origin
        let left = earth.position[0] - earth.radius;
        let right = moon.position[0] + moon.radius;
        assert!((left + right).abs() < 1e-4);
    }

    #[test]
    fn test_starfield_bounds() {
        let stars = starfield();
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.position.iter().all(|c| c.abs() <= STARFIELD_HALF_EXTENT));
        }
    }
}
