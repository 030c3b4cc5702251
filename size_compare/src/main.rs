//! Celestial size comparison viewer
//!
//! Pick two bodies and see them side by side, either as lit spheres in a
//! 3D scene or as flat circles with their preview images.
//!
//! Controls:
//! - Left mouse drag: Orbit camera (3D)
//! - Scroll: Zoom in/out (3D)
//! - M: Toggle 2D/3D
//! - S: Swap the two bodies
//! - R: Reset view
//! - Escape: Close details windows
//!
//! Usage: `size_compare [config.toml]`

mod panels;
mod renderer;

use std::collections::HashMap;

use anyhow::Context as _;
use common::{Camera3D, GraphicsContext};
use panels::{draw_canvas, draw_details_windows, draw_selection_panel, UiState};
use renderer::{SceneGeometry, SceneRenderer};
use size_compare::config::DEFAULT_CONFIG_PATH;
use size_compare::prefetch::ImagePrefetcher;
use size_compare::{Catalog, Comparison, ScalingOptions, SelectionPair, ViewMode, ViewerConfig};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: SceneRenderer,
    camera: Camera3D,
    catalog: Catalog,
    options: ScalingOptions,
    ui: UiState,
    /// Pair the scene and `comparison` were built for
    applied_pair: SelectionPair,
    comparison: Result<Comparison, String>,
    prefetcher: ImagePrefetcher,
    textures: HashMap<String, egui::TextureHandle>,
    texture_generation: u64,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, config: ViewerConfig, catalog: Catalog) -> anyhow::Result<Self> {
        let pair = config.initial_pair(&catalog)?;
        let renderer = SceneRenderer::new(&ctx);
        let camera = Camera3D::new(ctx.aspect_ratio(), config.scaling.field_of_view_degrees as f32);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        let mut app = Self {
            ctx,
            renderer,
            camera,
            catalog,
            options: config.scaling,
            ui: UiState::new(pair.clone(), config.mode),
            applied_pair: pair,
            comparison: Err("nothing selected".to_string()),
            prefetcher: ImagePrefetcher::new(config.assets_dir),
            textures: HashMap::new(),
            texture_generation: 0,
            mouse_pressed: false,
            last_mouse_pos: None,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        };
        app.apply_selection();
        Ok(app)
    }

    /// Rebuild the comparison, the scene and the image requests for `ui.pair`
    fn apply_selection(&mut self) {
        let pair = self.ui.pair.clone();
        self.comparison =
            Comparison::compute(&self.catalog, &pair, &self.options).map_err(|e| e.to_string());

        match &self.comparison {
            Ok(comparison) => {
                log::info!("comparing {} with {}: {}", pair.first, pair.second, comparison.summary);
                if let (Ok(first), Ok(second)) =
                    (self.catalog.get(&pair.first), self.catalog.get(&pair.second))
                {
                    let scene = SceneGeometry::build(first, second, &comparison.scaling);
                    self.renderer.update_scene(&self.ctx.queue, &scene);
                }
            }
            Err(e) => log::error!("cannot compare {} with {}: {}", pair.first, pair.second, e),
        }

        self.prefetcher.request(&self.catalog, &pair);
        self.applied_pair = pair;
        self.frame_camera();
    }

    fn frame_camera(&mut self) {
        if let Ok(comparison) = &self.comparison {
            let aspect = self.ctx.aspect_ratio() as f64;
            let distance = comparison.scaling.viewpoint_distance_for_aspect(aspect);
            self.camera.frame(distance as f32);
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
        self.renderer
            .resize(&self.ctx.device, new_size.width, new_size.height);
    }

    /// Upload preview images that finished loading since the last frame
    fn sync_textures(&mut self) {
        self.prefetcher.poll();

        let generation = self.prefetcher.generation();
        if generation != self.texture_generation {
            self.textures.clear();
            self.texture_generation = generation;
        }

        for id in [&self.applied_pair.first, &self.applied_pair.second] {
            if self.textures.contains_key(id.as_str()) {
                continue;
            }
            if let Some(image) = self.prefetcher.image(id) {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                let handle = self.egui.ctx.load_texture(
                    format!("preview-{id}"),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(id.clone(), handle);
            }
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.sync_textures();
        self.renderer.update_camera(&self.ctx.queue, &self.camera);

        // Build egui UI
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_selection_panel(ctx, &self.catalog, &mut self.ui, &self.comparison);
            draw_details_windows(ctx, &self.catalog, &mut self.ui.open_details);
            if self.ui.mode == ViewMode::Canvas2d {
                draw_canvas(ctx, &self.catalog, &self.comparison, &self.textures);
            }
        });

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
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
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // Apply what the panels changed this frame
        if self.ui.pair != self.applied_pair {
            self.apply_selection();
        }
        if std::mem::take(&mut self.ui.reframe_requested) {
            self.frame_camera();
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::KeyM => self.ui.mode = self.ui.mode.toggled(),
            KeyCode::KeyS => self.ui.pair = self.ui.pair.swapped(),
            KeyCode::KeyR => self.ui.reframe_requested = true,
            KeyCode::Escape => self.ui.open_details.clear(),
            _ => {}
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if self.mouse_pressed && self.ui.mode == ViewMode::Scene3d {
            if let Some((last_x, last_y)) = self.last_mouse_pos {
                let dx = (x - last_x) as f32 * 0.01;
                let dy = (y - last_y) as f32 * 0.01;
                self.camera.orbit(dx, dy);
            }
            self.last_mouse_pos = Some((x, y));
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        if self.ui.mode == ViewMode::Scene3d {
            self.camera.zoom(delta * 2.0);
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ViewerConfig::load(&config_path)?;
    let catalog = Catalog::builtin().context("bundled catalog is invalid")?;
    log::info!("catalog has {} bodies", catalog.len());

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    ))?;

    let mut app = App::new(ctx, config, catalog)?;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => {
                                app.resize(*size);
                                app.frame_camera();
                            }
                            WindowEvent::MouseInput { state, button, .. } => {
                                if *button == MouseButton::Left {
                                    app.mouse_pressed = *state == ElementState::Pressed;
                                    if !app.mouse_pressed {
                                        app.last_mouse_pos = None;
                                    }
                                }
                            }
                            WindowEvent::CursorMoved { position, .. } => {
                                app.handle_mouse_move(position.x, position.y);
                            }
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.handle_key(*key, *state),
                            WindowEvent::MouseWheel { delta, .. } => {
                                let scroll = match delta {
                                    MouseScrollDelta::LineDelta(_, y) => *y,
                                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                                };
                                app.handle_scroll(scroll);
                            }
                            WindowEvent::RedrawRequested => match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("out of GPU memory, exiting");
                                    elwt.exit();
                                }
                                Err(e) => log::error!("render error: {:?}", e),
                            },
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .context("event loop error")?;

    Ok(())
}
