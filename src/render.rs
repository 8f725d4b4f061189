use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bytemuck::{bytes_of, Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3, Vec4};
use log::warn;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::camera::{CameraParams, LightParams};
use crate::input::MenuCommand;
use crate::menu::ContextMenu;
use crate::primitives::{self, Mesh, Vertex};
use crate::scene::SceneState;
use crate::texture::CheckerTexture;

/// World-space x offset of the teapot relative to the cube.
pub const TEAPOT_OFFSET_X: f32 = 2.0;

/// Scale of the teapot primitive.
pub const TEAPOT_SIZE: f32 = 0.3;

/// Surface material constants for one object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Vec4,
    pub specular: Vec3,
    pub shininess: f32,
    pub textured: bool,
}

impl Material {
    /// Flat white with the checkerboard bound; no highlight.
    pub fn checkered_white() -> Self {
        Self {
            diffuse: Vec4::ONE,
            specular: Vec3::ZERO,
            shininess: 1.0,
            textured: true,
        }
    }

    /// Bronze-like shiny surface, texture unit off.
    pub fn bronze() -> Self {
        Self {
            diffuse: Vec4::new(0.8, 0.6, 0.0, 1.0),
            specular: Vec3::new(1.0, 1.0, 0.4),
            shininess: 50.0,
            textured: false,
        }
    }
}

/// Which of the two uploaded meshes an object draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshId {
    Cube,
    Teapot,
}

/// One object in the frame's draw list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectInstance {
    pub mesh: MeshId,
    pub model: Mat4,
    pub material: Material,
}

/// Model matrix of the teapot: translation first, then the three Euler
/// rotations applied X, Y, Z.
pub fn teapot_model_matrix(scene: &SceneState) -> Mat4 {
    let rotation = scene.teapot_rotation;
    Mat4::from_translation(Vec3::new(TEAPOT_OFFSET_X, 0.0, 0.0) + scene.teapot_position)
        * Mat4::from_rotation_x(rotation.x.to_radians())
        * Mat4::from_rotation_y(rotation.y.to_radians())
        * Mat4::from_rotation_z(rotation.z.to_radians())
}

/// Builds the per-frame draw list from the scene: the textured cube at
/// the origin and the bronze teapot beside it.
pub fn frame_objects(scene: &SceneState) -> [ObjectInstance; 2] {
    [
        ObjectInstance {
            mesh: MeshId::Cube,
            model: Mat4::IDENTITY,
            material: Material::checkered_white(),
        },
        ObjectInstance {
            mesh: MeshId::Teapot,
            model: teapot_model_matrix(scene),
            material: Material::bronze(),
        },
    ]
}

/// GPU renderer backed by wgpu that draws the two demo objects and the
/// context-menu overlay.
pub struct Renderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    depth: DepthBuffer,
    fill_pipeline: wgpu::RenderPipeline,
    line_pipeline: Option<wgpu::RenderPipeline>,
    global_buffer: wgpu::Buffer,
    global_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    cube_mesh: MeshBuffers,
    teapot_mesh: MeshBuffers,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Renderer {
    /// Initializes the GPU renderer for the provided window and uploads
    /// the checkerboard texture and both meshes.
    pub async fn new(window: Arc<Window>, checkerboard: &CheckerTexture) -> Result<Self> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(anyhow!("window has zero area"));
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to acquire GPU adapter")?;

        let line_mode_available = adapter
            .features()
            .contains(wgpu::Features::POLYGON_MODE_LINE);
        if !line_mode_available {
            warn!("adapter lacks POLYGON_MODE_LINE; the fill toggle will keep filled polygons");
        }
        let required_features = if line_mode_available {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            wgpu::Features::empty()
        };

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("renderer-device"),
                required_features,
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|format| format.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps
                .present_modes
                .iter()
                .copied()
                .find(|mode| {
                    matches!(
                        mode,
                        wgpu::PresentMode::Mailbox | wgpu::PresentMode::Immediate
                    )
                })
                .unwrap_or(wgpu::PresentMode::Fifo),
            desired_maximum_frame_latency: 2,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let depth = DepthBuffer::create(&device, config.width, config.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("renderer-shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let global_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("global-bind-layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(
                        std::num::NonZeroU64::new(std::mem::size_of::<GlobalUniform>() as u64)
                            .unwrap(),
                    ),
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture-bind-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
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

        // Per-object uniform layout
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object-bind-layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(
                        std::num::NonZeroU64::new(std::mem::size_of::<ObjectConstants>() as u64)
                            .unwrap(),
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("renderer-pipeline-layout"),
            bind_group_layouts: &[&global_layout, &texture_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let fill_pipeline = build_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PolygonMode::Fill,
        );
        let line_pipeline = line_mode_available.then(|| {
            build_pipeline(
                &device,
                &pipeline_layout,
                &shader,
                surface_format,
                wgpu::PolygonMode::Line,
            )
        });

        let global_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("global-uniform"),
            size: std::mem::size_of::<GlobalUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let global_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("global-bind-group"),
            layout: &global_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: global_buffer.as_entire_binding(),
            }],
        });

        let texture_bind_group =
            upload_checkerboard(&device, &queue, &texture_layout, checkerboard);

        let cube_mesh = MeshBuffers::from_mesh(&device, &primitives::cube(1.0), "cube");
        let teapot_mesh =
            MeshBuffers::from_mesh(&device, &primitives::teapot(TEAPOT_SIZE), "teapot");

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            depth,
            fill_pipeline,
            line_pipeline,
            global_buffer,
            global_bind_group,
            texture_bind_group,
            object_layout,
            cube_mesh,
            teapot_mesh,
            egui_renderer,
            egui_state,
            egui_ctx,
        })
    }

    /// Returns the identifier of the window owned by the renderer.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Exposes the inner window for event handling.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Width over height of the current swap chain.
    pub fn aspect(&self) -> f32 {
        if self.size.height == 0 {
            1.0
        } else {
            self.size.width as f32 / self.size.height as f32
        }
    }

    /// Forwards a window event to the menu overlay; returns true when
    /// the overlay consumed it.
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(&self.window, event).consumed
    }

    /// Resizes the swap chain to match the new dimensions.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth = DepthBuffer::create(&self.device, new_size.width, new_size.height);
    }

    /// Updates the camera, light, and toggle uniforms before rendering.
    pub fn update_globals(&self, camera: &CameraParams, light: &LightParams, scene: &SceneState) {
        let uniform = GlobalUniform {
            view_proj: camera.view_proj.to_cols_array_2d(),
            camera_position: camera.position.extend(1.0).into(),
            light_position: light.position.extend(1.0).into(),
            light_color: light.color.extend(light.intensity).into(),
            toggles: [
                if scene.lighting { 1.0 } else { 0.0 },
                if scene.texturing { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.global_buffer, 0, bytes_of(&uniform));
    }

    /// Draws one frame and the menu overlay; returns the menu entry the
    /// user clicked, if any.
    pub fn render(
        &mut self,
        scene: &SceneState,
        menu: &mut ContextMenu,
    ) -> Result<Option<MenuCommand>, wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("renderer-encoder"),
            });

        let objects = frame_objects(scene);
        let bind_groups: Vec<wgpu::BindGroup> = objects
            .iter()
            .map(|object| {
                let normal = Mat3::from_mat4(object.model).inverse().transpose();
                let constants = ObjectConstants {
                    model: object.model.to_cols_array_2d(),
                    normal: mat3_to_3x4(normal),
                    diffuse: object.material.diffuse.into(),
                    specular: object
                        .material
                        .specular
                        .extend(object.material.shininess)
                        .into(),
                    flags: [if object.material.textured { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
                };
                let buffer = self
                    .device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("object-uniform"),
                        contents: bytes_of(&constants),
                        usage: wgpu::BufferUsages::UNIFORM,
                    });
                self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("object-bind-group"),
                    layout: &self.object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                })
            })
            .collect();

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.03,
                            g: 0.03,
                            b: 0.05,
                            a: 1.0,
                        }),
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

            let pipeline = if scene.fill_polygons {
                &self.fill_pipeline
            } else {
                self.line_pipeline.as_ref().unwrap_or(&self.fill_pipeline)
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, &self.global_bind_group, &[]);
            pass.set_bind_group(1, &self.texture_bind_group, &[]);

            for (object, bind_group) in objects.iter().zip(bind_groups.iter()) {
                let mesh = match object.mesh {
                    MeshId::Cube => &self.cube_mesh,
                    MeshId::Teapot => &self.teapot_mesh,
                };
                pass.set_vertex_buffer(0, mesh.vertex.slice(..));
                pass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint32);
                pass.set_bind_group(2, bind_group, &[]);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        let selected = self.render_menu(&mut encoder, &view, menu);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(selected)
    }

    /// Runs the egui frame for the context menu and appends its render
    /// pass to the encoder.
    fn render_menu(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        menu: &mut ContextMenu,
    ) -> Option<MenuCommand> {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let mut selected = None;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            selected = menu.ui(ctx);
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.width, self.size.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("menu-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut pass = pass.forget_lifetime();
            self.egui_renderer.render(&mut pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        selected
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("renderer-pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: (3 * std::mem::size_of::<f32>()) as u64,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: (6 * std::mem::size_of::<f32>()) as u64,
                        shader_location: 2,
                    },
                ],
            }],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthBuffer::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
        cache: None,
    })
}

/// Creates the checkerboard texture on the device, uploads the pixel
/// buffer once, and binds it with a linear-filtering sampler.
fn upload_checkerboard(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    checkerboard: &CheckerTexture,
) -> wgpu::BindGroup {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("checkerboard-texture"),
        size: wgpu::Extent3d {
            width: checkerboard.width,
            height: checkerboard.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        texture.as_image_copy(),
        &checkerboard.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * checkerboard.width),
            rows_per_image: Some(checkerboard.height),
        },
        wgpu::Extent3d {
            width: checkerboard.width,
            height: checkerboard.height,
            depth_or_array_layers: 1,
        },
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("checkerboard-sampler"),
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("texture-bind-group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    })
}

fn mat3_to_3x4(matrix: Mat3) -> [[f32; 4]; 3] {
    let cols = matrix.to_cols_array();
    [
        [cols[0], cols[1], cols[2], 0.0],
        [cols[3], cols[4], cols[5], 0.0],
        [cols[6], cols[7], cols[8], 0.0],
    ]
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn from_mesh(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex,
            index,
            index_count: mesh.indices.len() as u32,
        }
    }
}

struct DepthBuffer {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct GlobalUniform {
    view_proj: [[f32; 4]; 4],
    camera_position: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
    toggles: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ObjectConstants {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 3],
    diffuse: [f32; 4],
    specular: [f32; 4],
    flags: [f32; 4],
}

const SHADER: &str = r#"
struct GlobalUniform {
    view_proj: mat4x4<f32>,
    camera_position: vec4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
    toggles: vec4<f32>,
}

struct ObjectConstants {
    model: mat4x4<f32>,
    normal: mat3x4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    flags: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> globals: GlobalUniform;

@group(1) @binding(0)
var checker_texture: texture_2d<f32>;

@group(1) @binding(1)
var checker_sampler: sampler;

@group(2) @binding(0)
var<uniform> object: ObjectConstants;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_position = object.model * vec4<f32>(input.position, 1.0);
    out.position = globals.view_proj * world_position;
    out.world_pos = world_position.xyz;

    let world_normal = mat3x3<f32>(
        object.normal[0].xyz,
        object.normal[1].xyz,
        object.normal[2].xyz
    ) * input.normal;

    out.normal = normalize(world_normal);
    out.uv = input.uv;
    return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(checker_texture, checker_sampler, input.uv);
    let textured = globals.toggles.y * object.flags.x;
    let base = object.diffuse.rgb * mix(vec3<f32>(1.0), texel.rgb, textured);

    let normal = normalize(input.normal);
    let light_dir = normalize(globals.light_position.xyz - input.world_pos);
    let view_dir = normalize(globals.camera_position.xyz - input.world_pos);
    let half_dir = normalize(light_dir + view_dir);

    let ambient = 0.15;
    let diffuse = max(dot(normal, light_dir), 0.0);
    let highlight = pow(max(dot(normal, half_dir), 0.0), object.specular.w)
        * select(0.0, 1.0, diffuse > 0.0);
    let intensity = globals.light_color.w;
    let light_rgb = globals.light_color.xyz;
    let lit = (ambient + diffuse * intensity) * base * light_rgb
        + highlight * object.specular.rgb * light_rgb;

    let color = mix(base, lit, globals.toggles.x);
    return vec4<f32>(color, object.diffuse.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4Swizzles;

    #[test]
    fn frame_draws_cube_then_teapot() {
        let scene = SceneState::default();
        let objects = frame_objects(&scene);
        assert_eq!(objects[0].mesh, MeshId::Cube);
        assert_eq!(objects[0].model, Mat4::IDENTITY);
        assert!(objects[0].material.textured);
        assert_eq!(objects[1].mesh, MeshId::Teapot);
        assert!(!objects[1].material.textured);
    }

    #[test]
    fn teapot_sits_beside_the_cube() {
        let mut scene = SceneState::default();
        scene.teapot_position = Vec3::new(0.5, -1.0, 2.0);
        let model = teapot_model_matrix(&scene);
        let origin = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.xyz() - Vec3::new(2.5, -1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn teapot_rotations_apply_x_first() {
        let mut scene = SceneState::default();
        scene.teapot_position = Vec3::ZERO;
        scene.teapot_rotation = Vec3::new(90.0, 0.0, 0.0);
        let model = teapot_model_matrix(&scene);
        let up = model * Vec4::new(0.0, 1.0, 0.0, 0.0);
        // A 90-degree x rotation carries +Y onto +Z.
        assert!((up.xyz() - Vec3::Z).length() < 1e-5);

        scene.teapot_rotation = Vec3::new(90.0, 90.0, 0.0);
        let model = teapot_model_matrix(&scene);
        let x_axis = model * Vec4::new(1.0, 0.0, 0.0, 0.0);
        // The y rotation is applied in the frame already rotated by x.
        assert!((x_axis.xyz() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn bronze_material_is_shiny_and_untextured() {
        let bronze = Material::bronze();
        assert_eq!(bronze.diffuse, Vec4::new(0.8, 0.6, 0.0, 1.0));
        assert!(bronze.shininess > 0.0);
        assert!(!bronze.textured);
        let white = Material::checkered_white();
        assert_eq!(white.specular, Vec3::ZERO);
        assert!(white.textured);
    }
}
