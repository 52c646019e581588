//! Demo application state.

mod settings_panel;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;
use rslide::egui_host::{self, EguiInvalidator, ImageRegistry, InterceptFlag};
use rslide::{SlideConfig, SlideTheme, UnlockListener, UnlockSlideView};

/// How long the "Unlocked!" notice stays on screen.
const NOTICE_DURATION: Duration = Duration::from_millis(1500);
const TRACK_HEIGHT: f32 = 64.0;
/// Resource id of the generated thumb texture.
const CUSTOM_THUMB: &str = "texture:custom-thumb";
const CUSTOM_THUMB_SIZE: usize = 64;

/// Counts unlock events and remembers the last one for the notice.
#[derive(Default)]
pub struct UnlockCounter {
    count: Cell<u32>,
    last: Cell<Option<Instant>>,
}

impl UnlockCounter {
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    fn notice_visible(&self) -> bool {
        self.last
            .get()
            .is_some_and(|at| at.elapsed() < NOTICE_DURATION)
    }
}

impl UnlockListener for UnlockCounter {
    fn on_unlock(&self) {
        self.count.set(self.count.get() + 1);
        self.last.set(Some(Instant::now()));
        log::info!("Unlocked! ({} so far)", self.count.get());
    }
}

/// The demo window.
pub struct DemoApp {
    view: UnlockSlideView,
    images: ImageRegistry,
    theme_name: &'static str,
    counter: Rc<UnlockCounter>,
    /// Strong reference that keeps the weakly registered listener alive.
    listener: Rc<dyn UnlockListener>,
    listener_attached: bool,
    intercept: Rc<InterceptFlag>,
    config_error: Option<String>,
}

/// A round thumb with a soft radial gradient, generated so the demo needs no asset files.
fn custom_thumb_image() -> egui::ColorImage {
    let size = CUSTOM_THUMB_SIZE;
    let radius = size as f32 / 2.0;
    let mut rgba = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let distance = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = ((1.0 - distance) * radius).clamp(0.0, 1.0);
            let shade = 1.0 - 0.45 * distance.min(1.0);
            rgba.extend_from_slice(&[
                (70.0 * shade) as u8,
                (160.0 * shade) as u8,
                (110.0 * shade) as u8,
                (alpha * 255.0) as u8,
            ]);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([size, size], &rgba)
}

fn default_demo_config() -> SlideConfig {
    SlideConfig {
        text: "slide to unlock".to_string(),
        text_padding: 16,
        ..SlideConfig::default()
    }
}

impl DemoApp {
    /// Creates the demo, loading `config_path` if one was given.
    pub fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let (config, config_error) = match config_path {
            Some(path) => match SlideConfig::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded slide configuration from {}", path.display());
                    (config, None)
                }
                Err(err) => {
                    log::error!("{:#}", err);
                    (default_demo_config(), Some(format!("{:#}", err)))
                }
            },
            None => (default_demo_config(), None),
        };

        let mut images = ImageRegistry::new();
        let texture = cc
            .egui_ctx
            .load_texture(CUSTOM_THUMB, custom_thumb_image(), egui::TextureOptions::LINEAR);
        images.register_texture(CUSTOM_THUMB, texture);

        let intercept = Rc::new(InterceptFlag::new());
        let invalidator = Rc::new(EguiInvalidator::new(cc.egui_ctx.clone()));
        let mut view = UnlockSlideView::new(&config, &images, invalidator)
            .with_pointer_parent(intercept.clone());

        let counter = Rc::new(UnlockCounter::default());
        let listener: Rc<dyn UnlockListener> = counter.clone();
        view.set_on_unlock_listener(Some(&listener));

        Self {
            view,
            images,
            theme_name: SlideTheme::default_theme().name,
            counter,
            listener,
            listener_attached: true,
            intercept,
            config_error,
        }
    }

    fn theme(&self) -> &'static SlideTheme {
        SlideTheme::by_name(self.theme_name).unwrap_or_else(SlideTheme::default_theme)
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let visuals = if self.theme_name == "Dark" {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }

    fn set_listener_attached(&mut self, attached: bool) {
        if attached {
            self.view.set_on_unlock_listener(Some(&self.listener));
        } else {
            self.view.remove_on_unlock_listener();
        }
        self.listener_attached = attached;
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let theme = self.theme();

        egui::SidePanel::right("settings_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                let mut attached = self.listener_attached;
                let mut theme_name = self.theme_name;
                settings_panel::show(ui, &mut self.view, &self.images, &mut theme_name, &mut attached);
                self.theme_name = theme_name;
                if attached != self.listener_attached {
                    self.set_listener_attached(attached);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .drag_to_scroll(!self.intercept.is_disallowed())
                .show(ui, |ui| {
                    if let Some(error) = &self.config_error {
                        ui.colored_label(ui.visuals().error_fg_color, error);
                        ui.separator();
                    }

                    ui.add_space(24.0);
                    egui_host::show(ui, &mut self.view, &self.images, theme, TRACK_HEIGHT);
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        ui.label(format!("Unlocks: {}", self.counter.count()));
                        ui.separator();
                        ui.label(format!("Phase: {:?}", self.view.phase()));
                        ui.separator();
                        ui.label(format!("Offset: {} px", self.view.drag_offset()));
                    });

                    if self.counter.notice_visible() {
                        ui.add_space(8.0);
                        ui.heading("Unlocked!");
                        ctx.request_repaint_after(NOTICE_DURATION);
                    }
                });
        });
    }
}
