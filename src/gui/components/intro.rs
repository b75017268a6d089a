//! Intro section: name, role, social links

use eframe::egui;

use crate::content::{INTRO, SOCIAL_LINKS};
use crate::palette::PaletteColors;

use super::super::constants::ITEM_SPACING;

pub fn ui(ui: &mut egui::Ui, colors: &PaletteColors) {
    ui.label(
        egui::RichText::new(INTRO.name)
            .size(28.0)
            .strong()
            .color(colors.text),
    );
    ui.label(
        egui::RichText::new(INTRO.role)
            .size(16.0)
            .color(colors.accent),
    );
    ui.add_space(ITEM_SPACING);
    ui.label(egui::RichText::new(INTRO.blurb).color(colors.text));
    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        for link in SOCIAL_LINKS {
            ui.hyperlink_to(link.label, link.url);
        }
    });
}
