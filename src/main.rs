#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::process::ExitCode;
use std::sync::Arc;

use eframe::{egui, egui_glow, glow};
use egui::mutex::Mutex;

use bike_glow::config::AppConfig;
use bike_glow::scene_state::{FrameControl, HeldKeys, SceneState};

/// eframe could not create the window or the GL context
const EXIT_WINDOW: u8 = 2;
/// the app itself failed to start (no glow context, shader build)
const EXIT_STARTUP: u8 = 3;

fn main() -> ExitCode {
    let config = AppConfig::default();
    bike_glow::logging::init_logging(&config.logging);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.inner_size),
        multisampling: config.multisampling,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };
    let title = config.title.clone();
    let creator: eframe::AppCreator<'_> = Box::new(move |cc| {
        let app = BikeApp::new(cc, config)?;
        Ok(Box::new(app))
    });
    match eframe::run_native(&title, options, creator) {
        Ok(()) => ExitCode::SUCCESS,
        Err(eframe::Error::AppCreation(err)) => {
            log::error!("failed to start: {err}");
            ExitCode::from(EXIT_STARTUP)
        }
        Err(err) => {
            log::error!("failed to create window: {err}");
            ExitCode::from(EXIT_WINDOW)
        }
    }
}

fn held_keys(input: &egui::InputState) -> HeldKeys {
    HeldKeys {
        escape: input.key_down(egui::Key::Escape),
        left: input.key_down(egui::Key::ArrowLeft),
        right: input.key_down(egui::Key::ArrowRight),
        up: input.key_down(egui::Key::ArrowUp),
        down: input.key_down(egui::Key::ArrowDown),
    }
}

struct BikeApp {
    /// Behind an `Arc<Mutex<…>>` so we can pass it to [`egui::PaintCallback`] and paint later.
    drawer: Arc<Mutex<bike_glow::drawer_primitive::Drawer>>,
    state: SceneState,
    config: AppConfig,
}

impl BikeApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context as _;
        let gl = cc
            .gl
            .as_ref()
            .context("eframe was started without the glow backend")?;
        let mut drawer = bike_glow::drawer_primitive::Drawer::new();
        drawer
            .compile_shader(gl)
            .context("building the primitive shader")?;
        log::info!(
            "window {}x{} ready",
            config.inner_size[0],
            config.inner_size[1]
        );
        Ok(Self {
            drawer: Arc::new(Mutex::new(drawer)),
            state: SceneState::default(),
            config,
        })
    }
}

impl eframe::App for BikeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let keys = ctx.input(held_keys);
        if self.state.update(&keys, &self.config.motion) == FrameControl::Exit {
            log::info!("escape pressed, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                self.custom_painting(ui);
            });
        // key state is polled, so keep frames coming while nothing else happens
        ctx.request_repaint();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.drawer.lock().destroy(gl);
        }
    }
}

impl BikeApp {
    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let parts = bike_glow::bike::assemble(&self.state);
        let draws: Vec<_> = parts
            .iter()
            .map(|part| (part.to_primitive(), part.rgb, part.width))
            .collect();
        log::trace!("{} primitives for {:?}", draws.len(), self.state);
        let background_rgb = self.config.background_rgb;
        // Clone locals so we can move them into the paint callback:
        let drawer = self.drawer.clone();
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                let drawer = drawer.lock();
                let viewport = info.viewport_in_pixels();
                drawer.set_viewport(
                    gl,
                    viewport.left_px,
                    viewport.from_bottom_px,
                    viewport.width_px,
                    viewport.height_px,
                );
                drawer.clear(gl, &background_rgb);
                for (primitive, rgb, width) in &draws {
                    if let Err(err) = drawer.draw(gl, primitive, rgb, *width) {
                        log::warn!("skipped a primitive: {err:#}");
                    }
                }
            })),
        };
        ui.painter().add(callback);
    }
}
