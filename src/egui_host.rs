//! egui implementations of the host contracts.
//!
//! This module provides:
//! - [`EguiSurface`]: a [`Surface`] painting through an `egui::Painter`
//! - [`EguiInvalidator`]: frame scheduling via `Context::request_repaint`
//! - [`ImageRegistry`]: an [`ImageLoader`] over built-in artwork and textures
//! - [`InterceptFlag`]: a [`PointerParent`] the surrounding UI can consult
//! - [`show`]: allocates space in a `Ui`, forwards pointer input and draws

use std::cell::Cell;
use std::collections::HashMap;

use eframe::egui;
use egui::{Color32, Pos2, Stroke};

use crate::caption::TextStyle;
use crate::config::{BUILTIN_BACKGROUND, BUILTIN_THUMB};
use crate::geometry::IntRect;
use crate::state::{InteractionPhase, PointerEvent};
use crate::theme::{adjust_brightness, SlideTheme};
use crate::traits::{
    FontMetrics, ImageHandle, ImageId, ImageLoader, Invalidator, PointerParent, Surface, TextBackend,
};
use crate::view::UnlockSlideView;

/// Intrinsic size of the built-in track artwork.
pub const BUILTIN_BACKGROUND_SIZE: (i32, i32) = (400, 64);
/// Intrinsic size of the built-in thumb artwork.
pub const BUILTIN_THUMB_SIZE: (i32, i32) = (64, 64);

// Share of the laid-out row height above / below the baseline. Only the
// split is approximate: the painted row box is centered exactly.
const ASCENT_RATIO: f32 = 0.8;
const DESCENT_RATIO: f32 = 0.2;
// Sample with an ascender and a descender, for the full row height.
const METRICS_SAMPLE: &str = "Hg";

/// How an image id is painted.
enum ImageSource {
    BuiltinBackground,
    BuiltinThumb,
    Texture(egui::TextureHandle),
}

/// Resource id → image table, pre-populated with the built-in artwork.
pub struct ImageRegistry {
    handles: HashMap<String, ImageHandle>,
    sources: HashMap<ImageId, ImageSource>,
    next_id: ImageId,
}

impl ImageRegistry {
    /// Creates a registry containing `builtin:background` and `builtin:thumb`.
    pub fn new() -> Self {
        let mut registry = Self {
            handles: HashMap::new(),
            sources: HashMap::new(),
            next_id: 1,
        };
        registry.insert(BUILTIN_BACKGROUND, BUILTIN_BACKGROUND_SIZE, ImageSource::BuiltinBackground);
        registry.insert(BUILTIN_THUMB, BUILTIN_THUMB_SIZE, ImageSource::BuiltinThumb);
        registry
    }

    fn insert(&mut self, resource: &str, size: (i32, i32), source: ImageSource) -> ImageHandle {
        let handle = ImageHandle::new(self.next_id, size.0, size.1);
        self.next_id += 1;
        self.handles.insert(resource.to_string(), handle);
        self.sources.insert(handle.id, source);
        handle
    }

    /// Makes an already uploaded texture available under `resource`.
    pub fn register_texture(&mut self, resource: &str, texture: egui::TextureHandle) -> ImageHandle {
        let [w, h] = texture.size();
        self.insert(resource, (w as i32, h as i32), ImageSource::Texture(texture))
    }

    /// Sorted resource ids, for pickers.
    pub fn resources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handles.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader for ImageRegistry {
    fn load(&self, resource: &str) -> Option<ImageHandle> {
        self.handles.get(resource).copied()
    }
}

/// Requests repaints from egui. egui lays out every frame, so a layout
/// request is a repaint too.
#[derive(Clone)]
pub struct EguiInvalidator {
    ctx: egui::Context,
}

impl EguiInvalidator {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Invalidator for EguiInvalidator {
    fn request_redraw(&self) {
        self.ctx.request_repaint();
    }

    fn request_layout(&self) {
        log::trace!("layout requested");
        self.ctx.request_repaint();
    }
}

/// Records whether the slide asked its container not to steal the gesture.
#[derive(Debug, Default)]
pub struct InterceptFlag {
    disallowed: Cell<bool>,
}

impl InterceptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag owns the pointer.
    pub fn is_disallowed(&self) -> bool {
        self.disallowed.get()
    }
}

impl PointerParent for InterceptFlag {
    fn request_disallow_intercept(&self, disallow: bool) {
        self.disallowed.set(disallow);
    }
}

/// A [`Surface`] backed by an egui painter.
///
/// Track coordinates are translated by `origin`. egui has no bold face in
/// its default font set, so bold text is painted twice, one pixel apart.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    images: &'a ImageRegistry,
    theme: &'a SlideTheme,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2, images: &'a ImageRegistry, theme: &'a SlideTheme) -> Self {
        Self {
            painter,
            origin,
            images,
            theme,
        }
    }

    fn to_screen(&self, rect: IntRect) -> egui::Rect {
        egui::Rect::from_min_max(
            self.origin + egui::vec2(rect.left as f32, rect.top as f32),
            self.origin + egui::vec2(rect.right as f32, rect.bottom as f32),
        )
    }

    fn font_id(style: &TextStyle) -> egui::FontId {
        egui::FontId::proportional(style.size_px.max(1) as f32)
    }

    fn paint_builtin_background(&self, rect: egui::Rect) {
        let colors = &self.theme.colors;
        let radius = rect.height() / 2.0;
        self.painter.rect_filled(rect, radius, colors.track);
        self.painter.rect_stroke(
            rect,
            radius,
            Stroke::new(1.0, colors.track_border),
            egui::StrokeKind::Inside,
        );
    }

    fn paint_builtin_thumb(&self, rect: egui::Rect) {
        let colors = &self.theme.colors;
        let radius = rect.height().min(rect.width()) / 2.0;
        self.painter.rect_filled(rect, radius, colors.thumb);
        self.painter.rect_stroke(
            rect,
            radius,
            Stroke::new(1.0, adjust_brightness(colors.thumb, 0.8)),
            egui::StrokeKind::Inside,
        );

        // chevron pointing right
        let center = rect.center();
        let arm = rect.height().min(rect.width()) * 0.15;
        let stroke = Stroke::new(2.5, colors.thumb_glyph);
        let tip = egui::pos2(center.x + arm * 0.5, center.y);
        self.painter.line_segment([egui::pos2(tip.x - arm, center.y - arm), tip], stroke);
        self.painter.line_segment([egui::pos2(tip.x - arm, center.y + arm), tip], stroke);
    }
}

impl TextBackend for EguiSurface<'_> {
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), Self::font_id(style), style.color);
        let bold_extra = if style.bold { 1.0 } else { 0.0 };
        galley.size().x + bold_extra
    }

    fn text_metrics(&self, style: &TextStyle) -> FontMetrics {
        let row_height = self
            .painter
            .layout_no_wrap(METRICS_SAMPLE.to_string(), Self::font_id(style), style.color)
            .size()
            .y;
        FontMetrics {
            ascent: -row_height * ASCENT_RATIO,
            descent: row_height * DESCENT_RATIO,
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn paint_image(&mut self, image: &ImageHandle, rect: IntRect) {
        let screen_rect = self.to_screen(rect);
        match self.images.sources.get(&image.id) {
            Some(ImageSource::BuiltinBackground) => self.paint_builtin_background(screen_rect),
            Some(ImageSource::BuiltinThumb) => self.paint_builtin_thumb(screen_rect),
            Some(ImageSource::Texture(texture)) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                self.painter.image(texture.id(), screen_rect, uv, Color32::WHITE);
            }
            None => log::warn!("image {} is not registered; skipped", image.id),
        }
    }

    fn paint_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32) {
        let metrics = self.text_metrics(style);
        let top_left = self.origin + egui::vec2(x, y + metrics.ascent);
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), Self::font_id(style), style.color);
        if style.bold {
            self.painter
                .galley(top_left + egui::vec2(1.0, 0.0), galley.clone(), style.color);
        }
        self.painter.galley(top_left, galley, style.color);
    }
}

/// Converts raw egui input into track-local pointer events.
///
/// A press only starts a gesture inside `rect`; moves, releases and pointer
/// loss are forwarded only while the slide owns a drag.
fn forward_pointer_events(ctx: &egui::Context, rect: egui::Rect, view: &mut UnlockSlideView) {
    // Collected first: the view may request a repaint while handling them.
    let events: Vec<egui::Event> = ctx.input(|i| i.events.clone());

    for event in events {
        let dragging = view.phase() == InteractionPhase::Dragging;
        let local = |pos: Pos2| pos - rect.min;
        let pointer_event = match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if rect.contains(pos) => {
                let p = local(pos);
                Some(PointerEvent::down(p.x, p.y))
            }
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } if dragging => {
                let p = local(pos);
                Some(PointerEvent::up(p.x, p.y))
            }
            egui::Event::PointerMoved(pos) if dragging => {
                let p = local(pos);
                Some(PointerEvent::moved(p.x, p.y))
            }
            egui::Event::PointerGone if dragging => Some(PointerEvent::cancel()),
            _ => None,
        };

        if let Some(pointer_event) = pointer_event {
            view.on_pointer_event(pointer_event);
        }
    }
}

/// Shows the slide in `ui`, spanning the available width.
///
/// # Arguments
/// * `ui` - The ui to allocate space in
/// * `view` - The control to drive
/// * `images` - Registry the view's image handles were resolved from
/// * `theme` - Palette for the built-in artwork
/// * `height` - Track height in points
pub fn show(
    ui: &mut egui::Ui,
    view: &mut UnlockSlideView,
    images: &ImageRegistry,
    theme: &SlideTheme,
    height: f32,
) -> egui::Response {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    view.on_measure(rect.width() as i32, rect.height() as i32);
    forward_pointer_events(ui.ctx(), rect, view);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let mut surface = EguiSurface::new(&painter, rect.min, images, theme);
        view.on_draw(&mut surface);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_builtins() {
        let registry = ImageRegistry::new();
        let background = registry.load(BUILTIN_BACKGROUND).unwrap();
        let thumb = registry.load(BUILTIN_THUMB).unwrap();

        assert_eq!((background.intrinsic_width, background.intrinsic_height), BUILTIN_BACKGROUND_SIZE);
        assert_eq!((thumb.intrinsic_width, thumb.intrinsic_height), BUILTIN_THUMB_SIZE);
        assert_ne!(background.id, thumb.id);
        assert!(registry.load("res:unknown").is_none());
        assert_eq!(registry.resources(), vec![BUILTIN_BACKGROUND, BUILTIN_THUMB]);
    }

    #[test]
    fn test_registered_texture_is_loadable_and_painted() {
        let ctx = egui::Context::default();
        let pixels = [255u8; 4 * 2 * 4];
        let image = egui::ColorImage::from_rgba_unmultiplied([4, 2], &pixels);
        let texture = ctx.load_texture("thumb-texture", image, egui::TextureOptions::LINEAR);
        let texture_id = texture.id();

        let mut registry = ImageRegistry::new();
        let handle = registry.register_texture("texture:thumb", texture);
        assert_eq!((handle.intrinsic_width, handle.intrinsic_height), (4, 2));
        assert_eq!(registry.load("texture:thumb"), Some(handle));
        assert!(registry.resources().contains(&"texture:thumb"));

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut surface = EguiSurface::new(&painter, Pos2::ZERO, &registry, SlideTheme::default_theme());
            surface.paint_image(&handle, IntRect::new(0, 0, 40, 20));
        });

        assert!(output
            .shapes
            .iter()
            .any(|clipped| clipped.shape.texture_id() == texture_id));
    }

    #[test]
    fn test_text_metrics_center_the_row_box() {
        let ctx = egui::Context::default();
        let registry = ImageRegistry::new();
        let style = TextStyle {
            size_px: 18,
            ..TextStyle::default()
        };

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let surface = EguiSurface::new(&painter, Pos2::ZERO, &registry, SlideTheme::default_theme());
            let metrics = surface.text_metrics(&style);
            let row_height = painter
                .layout_no_wrap(METRICS_SAMPLE.to_string(), egui::FontId::proportional(18.0), style.color)
                .size()
                .y;
            assert!((metrics.descent - metrics.ascent - row_height).abs() < 1e-3);

            // Baseline as the caption renderer computes it for a thumb centered at 30.
            let baseline = 30.0 - (metrics.descent + metrics.ascent) / 2.0;
            let top = baseline + metrics.ascent;
            assert!((top + row_height / 2.0 - 30.0).abs() < 1e-3);
        });
    }

    #[test]
    fn test_intercept_flag() {
        let flag = InterceptFlag::new();
        flag.request_disallow_intercept(true);
        assert!(flag.is_disallowed());
        flag.request_disallow_intercept(false);
        assert!(!flag.is_disallowed());
    }
}
