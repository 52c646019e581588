//! Settings panel: one widget per public setter of the slide.

use eframe::egui;
use rslide::egui_host::ImageRegistry;
use rslide::theme::list_themes;
use rslide::{ResetSpeed, TextGravity, UnlockSlideView};

const GRAVITIES: [(TextGravity, &str); 3] = [
    (TextGravity::None, "Next to thumb"),
    (TextGravity::CenterInParent, "Center of track"),
    (TextGravity::CenterOfThumb, "Center of free area"),
];

const SPEEDS: [(ResetSpeed, &str); 3] = [
    (ResetSpeed::Slow, "Slow"),
    (ResetSpeed::Normal, "Normal"),
    (ResetSpeed::Fast, "Fast"),
];

fn label_of<T: PartialEq + Copy>(table: &[(T, &'static str)], value: T) -> &'static str {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("?")
}

/// Draws the settings and applies every edit to `view` immediately.
pub fn show(
    ui: &mut egui::Ui,
    view: &mut UnlockSlideView,
    images: &ImageRegistry,
    theme_name: &mut &'static str,
    listener_attached: &mut bool,
) {
    ui.heading("Settings");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        caption_section(ui, view);
        ui.separator();
        thumb_section(ui, view, images);
        ui.separator();
        behaviour_section(ui, view, listener_attached);
        ui.separator();
        appearance_section(ui, theme_name);
    });
}

fn caption_section(ui: &mut egui::Ui, view: &mut UnlockSlideView) {
    ui.label(egui::RichText::new("Caption").strong());

    let mut text = view.text().to_string();
    if ui.text_edit_singleline(&mut text).changed() {
        view.set_text(text);
    }

    let mut bold = view.is_text_bold();
    if ui.checkbox(&mut bold, "Bold").changed() {
        view.set_text_bold(bold);
    }

    let mut size = view.text_size();
    if ui.add(egui::Slider::new(&mut size, 6..=64).text("Size (px)")).changed() {
        view.set_text_size(size);
    }

    let mut padding = view.text_padding();
    if ui.add(egui::Slider::new(&mut padding, 0..=120).text("Padding")).changed() {
        view.set_text_padding(padding);
    }

    ui.horizontal(|ui| {
        ui.label("Color");
        let mut color = view.text_color();
        if ui.color_edit_button_srgba(&mut color).changed() {
            view.set_text_color(color);
        }
    });

    let mut gravity = view.text_gravity();
    egui::ComboBox::from_label("Gravity")
        .selected_text(label_of(&GRAVITIES, gravity))
        .show_ui(ui, |ui| {
            for (value, label) in GRAVITIES {
                ui.selectable_value(&mut gravity, value, label);
            }
        });
    if gravity != view.text_gravity() {
        view.set_text_gravity(gravity);
    }

    let mut keep = view.keeps_leading_ellipsis();
    if ui.checkbox(&mut keep, "Keep leading ellipsis").changed() {
        view.set_keep_leading_ellipsis(keep);
    }
}

fn thumb_section(ui: &mut egui::Ui, view: &mut UnlockSlideView, images: &ImageRegistry) {
    ui.label(egui::RichText::new("Thumb").strong());

    let mut width = view.thumb_width();
    if ui.add(egui::Slider::new(&mut width, 0..=240).text("Width")).changed() {
        view.set_thumb_width(width);
    }

    let mut height = view.thumb_height();
    if ui.add(egui::Slider::new(&mut height, 0..=120).text("Height")).changed() {
        view.set_thumb_height(height);
    }

    let mut padding = view.thumb_padding();
    if ui.add(egui::Slider::new(&mut padding, 0..=32).text("Padding")).changed() {
        view.set_thumb_padding(padding);
    }

    ui.horizontal(|ui| {
        for resource in images.resources() {
            if ui.small_button(resource).on_hover_text("Use as thumb").clicked() {
                view.set_thumb_resource(images, resource);
            }
        }
    });

    ui.horizontal(|ui| {
        let has_background = view.background_image().is_some();
        if has_background {
            if ui.button("Hide track").clicked() {
                view.set_background_image(None);
            }
        } else if ui.button("Show track").clicked() {
            view.set_background_resource(images, rslide::config::BUILTIN_BACKGROUND);
        }
    });
}

fn behaviour_section(ui: &mut egui::Ui, view: &mut UnlockSlideView, listener_attached: &mut bool) {
    ui.label(egui::RichText::new("Behaviour").strong());

    let mut speed = view.reset_speed();
    egui::ComboBox::from_label("Reset speed")
        .selected_text(label_of(&SPEEDS, speed))
        .show_ui(ui, |ui| {
            for (value, label) in SPEEDS {
                ui.selectable_value(&mut speed, value, label);
            }
        });
    if speed != view.reset_speed() {
        view.set_reset_speed(speed);
    }

    let mut limit = view.limit_progress();
    if ui.add(egui::Slider::new(&mut limit, 10..=99).text("Unlock at %")).changed() {
        view.set_limit_progress(limit);
    }

    let mut enabled = view.is_enabled();
    if ui.checkbox(&mut enabled, "Enabled").changed() {
        view.set_enabled(enabled);
    }

    ui.checkbox(listener_attached, "Listen for unlocks");
}

fn appearance_section(ui: &mut egui::Ui, theme_name: &mut &'static str) {
    ui.label(egui::RichText::new("Appearance").strong());

    egui::ComboBox::from_label("Theme")
        .selected_text(*theme_name)
        .show_ui(ui, |ui| {
            for name in list_themes() {
                ui.selectable_value(theme_name, name, name);
            }
        });
}
