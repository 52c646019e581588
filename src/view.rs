//! The slide-to-unlock control.
//!
//! [`UnlockSlideView`] owns the configuration, the drag state and the cached
//! caption anchors. Hosts feed it three kinds of input:
//! - a measure pass ([`UnlockSlideView::on_measure`]) with the track size,
//! - pointer events ([`UnlockSlideView::on_pointer_event`]),
//! - draw passes ([`UnlockSlideView::on_draw`]) on a [`Surface`].
//!
//! Everything runs on the host's UI thread. The retract animation is driven
//! by the draw passes themselves: a frame that moved the thumb asks the
//! [`Invalidator`] for the next one.

use std::rc::Rc;

use egui::Color32;

use crate::caption::{Caption, TextStyle};
use crate::config::{clamp_limit_progress, ResetSpeed, SlideConfig, TextGravity};
use crate::geometry::Geometry;
use crate::layout::TextAnchors;
use crate::rendering::frame::{draw_frame, FrameContext, FrameReport};
use crate::state::{Effects, InteractionPhase, InteractionState, ListenerSlot, PointerEvent};
use crate::traits::{ImageHandle, ImageLoader, Invalidator, PointerParent, Surface, UnlockListener};

/// A horizontal track with a draggable thumb that fires a one-shot unlock
/// event once the thumb's trailing edge reaches a fraction of the track.
pub struct UnlockSlideView {
    background: Option<ImageHandle>,
    thumb: Option<ImageHandle>,
    geometry: Geometry,
    reset_speed: ResetSpeed,
    caption: Caption,
    limit_progress: i32,
    keep_leading_ellipsis: bool,
    enabled: bool,
    anchors: Option<TextAnchors>,
    interaction: InteractionState,
    listener: ListenerSlot,
    invalidator: Rc<dyn Invalidator>,
    parent: Option<Rc<dyn PointerParent>>,
}

fn resolve_image(loader: &dyn ImageLoader, resource: &str, layer: &str) -> Option<ImageHandle> {
    let image = loader.load(resource);
    if image.is_none() {
        log::warn!("{} image '{}' could not be resolved; layer will be skipped", layer, resource);
    }
    image
}

impl UnlockSlideView {
    /// Builds a control from `config`, resolving its images through `loader`.
    pub fn new(config: &SlideConfig, loader: &dyn ImageLoader, invalidator: Rc<dyn Invalidator>) -> Self {
        let background = config
            .background
            .as_deref()
            .and_then(|resource| resolve_image(loader, resource, "background"));
        let thumb = config
            .thumb
            .as_deref()
            .and_then(|resource| resolve_image(loader, resource, "thumb"));

        let geometry = Geometry {
            track_width: 0,
            track_height: 0,
            thumb_width: config
                .thumb_width
                .or(thumb.map(|t| t.intrinsic_width))
                .unwrap_or(0),
            thumb_height: config
                .thumb_height
                .or(thumb.map(|t| t.intrinsic_height))
                .unwrap_or(0),
            thumb_padding: config.thumb_padding.max(0),
        };

        let style = TextStyle {
            size_px: config.effective_text_size(),
            bold: config.text_bold,
            color: config.text_color,
        };

        Self {
            background,
            thumb,
            geometry,
            reset_speed: config.reset_speed,
            caption: Caption::new(config.text.clone(), style, config.text_padding.max(0), config.text_gravity),
            limit_progress: clamp_limit_progress(config.limit_progress),
            keep_leading_ellipsis: config.keep_leading_ellipsis,
            enabled: config.enabled,
            anchors: None,
            interaction: InteractionState::new(),
            listener: ListenerSlot::new(),
            invalidator,
            parent: None,
        }
    }

    /// Attaches the container whose gesture interception is suspended while dragging.
    pub fn with_pointer_parent(mut self, parent: Rc<dyn PointerParent>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn set_pointer_parent(&mut self, parent: Option<Rc<dyn PointerParent>>) {
        self.parent = parent;
    }

    // ===== Host entry points =====

    /// Records the track size decided by the host's measure pass.
    pub fn on_measure(&mut self, width: i32, height: i32) {
        if self.geometry.track_width == width && self.geometry.track_height == height {
            return;
        }
        self.geometry.track_width = width;
        self.geometry.track_height = height;
        self.interaction.clamp_to(&self.geometry);
        self.invalidate_anchors();
    }

    /// Intrinsic size hint: the larger of the background and the thumb.
    pub fn desired_size(&self) -> (i32, i32) {
        let (bg_w, bg_h) = self
            .background
            .map(|bg| (bg.intrinsic_width, bg.intrinsic_height))
            .unwrap_or((0, 0));
        (
            bg_w.max(self.geometry.thumb_width),
            bg_h.max(self.geometry.thumb_height),
        )
    }

    /// Paints one frame and advances the retract animation.
    pub fn on_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameReport {
        let report = draw_frame(
            surface,
            FrameContext {
                geometry: &self.geometry,
                caption: &mut self.caption,
                anchors: &mut self.anchors,
                interaction: &mut self.interaction,
                background: self.background.as_ref(),
                thumb: self.thumb.as_ref(),
                reset_speed: self.reset_speed.pixels_per_frame(),
                keep_leading_ellipsis: self.keep_leading_ellipsis,
            },
        );
        self.apply(report.effects);
        report
    }

    /// Feeds one pointer event. Returns whether the control consumed it.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let effects = self.interaction.handle(event, &self.geometry, self.limit_progress);
        self.apply(effects);
        effects.consumed
    }

    fn apply(&self, effects: Effects) {
        if let (Some(disallow), Some(parent)) = (effects.disallow_intercept, self.parent.as_ref()) {
            parent.request_disallow_intercept(disallow);
        }
        if effects.unlock {
            self.emit_unlock();
        }
        if effects.redraw {
            self.invalidator.request_redraw();
        }
    }

    fn emit_unlock(&self) {
        if self.listener.notify() {
            log::debug!("unlock delivered at offset {}", self.interaction.drag_x());
        } else {
            log::debug!("unlock reached but no live listener; event dropped");
        }
    }

    fn invalidate_anchors(&mut self) {
        self.anchors = None;
    }

    fn geometry_changed(&mut self) {
        self.interaction.clamp_to(&self.geometry);
        self.invalidate_anchors();
        self.invalidator.request_redraw();
    }

    /// Thumb size feeds the size hint, so the host must measure again.
    fn thumb_size_changed(&mut self) {
        self.interaction.clamp_to(&self.geometry);
        self.invalidate_anchors();
        self.invalidator.request_layout();
    }

    fn caption_changed(&mut self) {
        self.invalidate_anchors();
        self.invalidator.request_redraw();
    }

    // ===== Unlock listener =====

    /// Registers the unlock callback without keeping it alive. `None` clears.
    pub fn set_on_unlock_listener(&mut self, listener: Option<&Rc<dyn UnlockListener>>) {
        self.listener.set(listener);
    }

    pub fn remove_on_unlock_listener(&mut self) {
        self.listener.clear();
    }

    pub fn has_unlock_listener(&self) -> bool {
        self.listener.is_alive()
    }

    // ===== State queries =====

    pub fn track_width(&self) -> i32 {
        self.geometry.track_width
    }

    pub fn track_height(&self) -> i32 {
        self.geometry.track_height
    }

    /// Offset of the thumb's left edge from the track origin.
    pub fn drag_offset(&self) -> i32 {
        self.interaction.drag_x()
    }

    pub fn phase(&self) -> InteractionPhase {
        self.interaction.phase()
    }

    /// Whether the current gesture already produced its unlock event.
    pub fn unlocked_this_gesture(&self) -> bool {
        self.interaction.unlocked_this_gesture()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Cached caption anchors; `None` until the next draw after a change.
    pub fn text_anchors(&self) -> Option<TextAnchors> {
        self.anchors
    }

    // ===== Images =====

    pub fn background_image(&self) -> Option<&ImageHandle> {
        self.background.as_ref()
    }

    pub fn set_background_image(&mut self, background: Option<ImageHandle>) {
        self.background = background;
        self.invalidate_anchors();
        self.invalidator.request_layout();
    }

    pub fn set_background_resource(&mut self, loader: &dyn ImageLoader, resource: &str) {
        self.set_background_image(resolve_image(loader, resource, "background"));
    }

    pub fn thumb_image(&self) -> Option<&ImageHandle> {
        self.thumb.as_ref()
    }

    /// Replaces the thumb; its intrinsic size replaces any size override.
    pub fn set_thumb_image(&mut self, thumb: ImageHandle) {
        self.thumb = Some(thumb);
        self.geometry.thumb_width = thumb.intrinsic_width;
        self.geometry.thumb_height = thumb.intrinsic_height;
        self.thumb_size_changed();
    }

    /// Replaces the thumb from a resource. An unresolvable resource leaves
    /// the thumb unpainted but keeps its configured size.
    pub fn set_thumb_resource(&mut self, loader: &dyn ImageLoader, resource: &str) {
        match resolve_image(loader, resource, "thumb") {
            Some(thumb) => self.set_thumb_image(thumb),
            None => {
                self.thumb = None;
                self.invalidator.request_redraw();
            }
        }
    }

    // ===== Thumb geometry =====

    pub fn thumb_width(&self) -> i32 {
        self.geometry.thumb_width
    }

    pub fn set_thumb_width(&mut self, thumb_width: i32) {
        self.geometry.thumb_width = thumb_width.max(0);
        self.thumb_size_changed();
    }

    pub fn thumb_height(&self) -> i32 {
        self.geometry.thumb_height
    }

    pub fn set_thumb_height(&mut self, thumb_height: i32) {
        self.geometry.thumb_height = thumb_height.max(0);
        self.thumb_size_changed();
    }

    pub fn thumb_padding(&self) -> i32 {
        self.geometry.thumb_padding
    }

    pub fn set_thumb_padding(&mut self, thumb_padding: i32) {
        self.geometry.thumb_padding = thumb_padding.max(0);
        self.geometry_changed();
    }

    // ===== Behaviour =====

    pub fn reset_speed(&self) -> ResetSpeed {
        self.reset_speed
    }

    pub fn set_reset_speed(&mut self, reset_speed: ResetSpeed) {
        self.reset_speed = reset_speed;
    }

    /// Threshold in percent of the track width, within `[10, 99]`.
    pub fn limit_progress(&self) -> i32 {
        self.limit_progress
    }

    pub fn set_limit_progress(&mut self, limit_progress: i32) {
        self.limit_progress = clamp_limit_progress(limit_progress);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling mid-gesture ends the gesture like a cancel.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled && self.interaction.is_touching() {
            log::debug!("control disabled during drag; cancelling gesture");
            let effects = self.interaction.cancel();
            self.apply(effects);
        } else {
            self.invalidator.request_redraw();
        }
    }

    // ===== Caption =====

    pub fn text(&self) -> &str {
        self.caption.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.caption.set_text(text);
        self.caption_changed();
    }

    pub fn is_text_bold(&self) -> bool {
        self.caption.style().bold
    }

    pub fn set_text_bold(&mut self, bold: bool) {
        self.caption.set_bold(bold);
        self.caption_changed();
    }

    pub fn text_size(&self) -> i32 {
        self.caption.style().size_px
    }

    pub fn set_text_size(&mut self, text_size: i32) {
        self.caption.set_size(text_size);
        self.caption_changed();
    }

    pub fn text_color(&self) -> Color32 {
        self.caption.style().color
    }

    pub fn set_text_color(&mut self, color: Color32) {
        self.caption.set_color(color);
        self.invalidator.request_redraw();
    }

    pub fn text_padding(&self) -> i32 {
        self.caption.padding()
    }

    pub fn set_text_padding(&mut self, text_padding: i32) {
        self.caption.set_padding(text_padding.max(0));
        self.caption_changed();
    }

    pub fn text_gravity(&self) -> TextGravity {
        self.caption.gravity()
    }

    pub fn set_text_gravity(&mut self, gravity: TextGravity) {
        self.caption.set_gravity(gravity);
        self.caption_changed();
    }

    pub fn keeps_leading_ellipsis(&self) -> bool {
        self.keep_leading_ellipsis
    }

    pub fn set_keep_leading_ellipsis(&mut self, keep: bool) {
        self.keep_leading_ellipsis = keep;
        self.invalidator.request_redraw();
    }
}

impl std::fmt::Debug for UnlockSlideView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockSlideView")
            .field("geometry", &self.geometry)
            .field("interaction", &self.interaction)
            .field("caption", &self.caption)
            .field("anchors", &self.anchors)
            .field("limit_progress", &self.limit_progress)
            .field("reset_speed", &self.reset_speed)
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}
