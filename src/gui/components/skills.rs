//! Skills showcase rendered as a grid of cards per category

use eframe::egui;

use crate::content::SKILL_CATEGORIES;
use crate::palette::PaletteColors;

use super::super::constants::ITEM_SPACING;

const GRID_COLUMNS: usize = 3;

pub fn ui(ui: &mut egui::Ui, colors: &PaletteColors) {
    for category in SKILL_CATEGORIES {
        ui.label(
            egui::RichText::new(category.heading)
                .strong()
                .size(16.0)
                .color(colors.primary),
        );
        ui.add_space(ITEM_SPACING);

        egui::Grid::new(category.heading)
            .num_columns(GRID_COLUMNS)
            .spacing([ITEM_SPACING, ITEM_SPACING])
            .show(ui, |ui| {
                for (i, skill) in category.skills.iter().enumerate() {
                    ui.group(|ui| {
                        ui.set_width(220.0);
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(skill.name)
                                    .strong()
                                    .color(colors.accent),
                            );
                            ui.label(
                                egui::RichText::new(skill.description)
                                    .small()
                                    .color(colors.text),
                            );
                        });
                    });
                    if (i + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(ITEM_SPACING * 2.0);
    }
}
