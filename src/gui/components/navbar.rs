//! Site header: brand, navigation, language toggle, palette picker

use eframe::egui;

use crate::content::NavKey;
use crate::palette::{self, PaletteColors};
use crate::prefs::Lang;

use super::super::app::ScrollState;
use super::super::constants::ITEM_SPACING;

/// What the user asked the header to do this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Scroll(NavKey),
    ToggleLang,
    SetPalette(String),
    OpenContact,
}

pub fn ui(
    ui: &mut egui::Ui,
    lang: Lang,
    scroll_state: ScrollState,
    current_palette: &str,
    colors: &PaletteColors,
) -> Option<NavAction> {
    let mut action = None;

    ui.add_space(ITEM_SPACING);
    ui.horizontal(|ui| {
        let brand = egui::RichText::new("Wongsakorn RD Profile")
            .strong()
            .color(colors.primary);
        // Pinned header keeps the brand small; at the top it is roomier
        let brand = match scroll_state {
            ScrollState::IsTop => brand.size(18.0),
            ScrollState::Scrolling | ScrollState::Pinned => brand.size(15.0),
        };
        ui.label(brand);

        ui.separator();

        for key in NavKey::ALL {
            if ui.selectable_label(false, key.label(lang)).clicked() {
                action = Some(match key {
                    NavKey::Contact => NavAction::OpenContact,
                    other => NavAction::Scroll(other),
                });
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_label = match lang {
                Lang::En => "ไทย",
                Lang::Th => "EN",
            };
            if ui.button(toggle_label).clicked() {
                action = Some(NavAction::ToggleLang);
            }

            egui::ComboBox::from_id_salt("palette-picker")
                .selected_text(current_palette)
                .show_ui(ui, |ui| {
                    for name in palette::preset_names() {
                        if ui
                            .selectable_label(name == current_palette, name)
                            .clicked()
                        {
                            action = Some(NavAction::SetPalette(name.to_string()));
                        }
                    }
                });
        });
    });
    ui.add_space(ITEM_SPACING);

    action
}
