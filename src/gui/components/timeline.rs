//! Career timeline with reveal animation and expandable details

use eframe::egui;

use crate::animation::{parallax, Reveal};
use crate::constants::motion;
use crate::content::CAREER_ITEMS;
use crate::palette::PaletteColors;

use super::super::constants::ITEM_SPACING;

/// Marker dot diameter in front of each entry
const MARKER_RADIUS: f32 = 5.0;

pub fn ui(
    ui: &mut egui::Ui,
    colors: &PaletteColors,
    reveals: &mut [Reveal],
    expanded: &mut [bool],
) {
    let clip = ui.clip_rect();
    let wide_enough = ui.ctx().screen_rect().width() > motion::PARALLAX_BREAKPOINT;

    for (i, item) in CAREER_ITEMS.iter().enumerate() {
        let revealed = reveals.get(i).is_some_and(|r| r.is_visible());
        let text_color = if revealed {
            colors.text
        } else {
            colors.text.gamma_multiply(0.25)
        };

        let response = ui
            .group(|ui| {
                ui.horizontal(|ui| {
                    let (marker_rect, _) = ui.allocate_exact_size(
                        egui::vec2(MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0),
                        egui::Sense::hover(),
                    );
                    let mut marker_center = marker_rect.center();
                    if revealed && wide_enough {
                        let (shift, _scale) = parallax(clip.height(), marker_center.y);
                        marker_center.y += shift;
                    }
                    ui.painter().circle_filled(
                        marker_center,
                        MARKER_RADIUS,
                        if revealed { colors.accent } else { colors.primary },
                    );

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(item.title).strong().color(text_color),
                        );
                        ui.label(
                            egui::RichText::new(item.description)
                                .small()
                                .color(text_color),
                        );

                        if let Some(details) = &item.details {
                            let open = expanded.get(i).copied().unwrap_or(false);
                            let toggle = if open { "Hide details" } else { "Details" };
                            if ui.small_button(toggle).clicked() {
                                if let Some(slot) = expanded.get_mut(i) {
                                    *slot = !open;
                                }
                            }
                            if open {
                                for (heading, bullets) in details.sections {
                                    ui.label(
                                        egui::RichText::new(*heading)
                                            .strong()
                                            .small()
                                            .color(colors.primary),
                                    );
                                    for bullet in *bullets {
                                        ui.label(
                                            egui::RichText::new(format!("• {bullet}"))
                                                .small()
                                                .color(text_color),
                                        );
                                    }
                                }
                                ui.horizontal_wrapped(|ui| {
                                    for tag in details.tags {
                                        ui.label(
                                            egui::RichText::new(*tag)
                                                .small()
                                                .color(colors.accent),
                                        );
                                    }
                                });
                            }
                        }
                    });
                });
            })
            .response;

        // Feed how much of the entry is on screen into its reveal latch
        if let Some(reveal) = reveals.get_mut(i) {
            let rect = response.rect;
            let visible_height = rect.intersect(clip).height().max(0.0);
            let fraction = if rect.height() > 0.0 {
                visible_height / rect.height()
            } else {
                0.0
            };
            reveal.observe(fraction);
        }

        ui.add_space(ITEM_SPACING);
    }
}
