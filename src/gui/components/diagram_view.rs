//! Interactive infrastructure diagram
//!
//! Lays the six node cards out inside a fixed-height container, keeps the
//! controller's registry in sync with their rects, strokes the flattened
//! connector curves beneath them, and classifies every click into the
//! controller's target vocabulary (node, panel, close control, outside).

use eframe::egui;

use crate::constants::stroke;
use crate::content::NODE_CARDS;
use crate::diagram::{ClickTarget, DiagramController, NodeId};
use crate::palette::PaletteColors;

use super::super::constants::{DIAGRAM_HEIGHT, ITEM_SPACING, NODE_HEIGHT, NODE_WIDTH};

/// Node placement as fractions of the free container area
const NODE_LAYOUT: &[(NodeId, f32, f32)] = &[
    (NodeId::Server, 0.02, 0.12),
    (NodeId::Domain, 0.02, 0.68),
    (NodeId::Ssl, 0.38, 0.40),
    (NodeId::K8s, 0.72, 0.12),
    (NodeId::Cicd, 0.72, 0.68),
    (NodeId::Deploy, 0.96, 0.40),
];

pub fn ui(
    ui: &mut egui::Ui,
    controller: &mut DiagramController,
    colors: &PaletteColors,
    redraw_due: bool,
) {
    ui.label(
        egui::RichText::new("Interactive visualization of the self-hosted server setup")
            .small()
            .color(colors.text),
    );
    ui.add_space(ITEM_SPACING);

    let width = ui.available_width();
    let (container, _) = ui.allocate_exact_size(
        egui::vec2(width, DIAGRAM_HEIGHT),
        egui::Sense::hover(),
    );

    // Keep the registry current with where the cards actually are
    for (node, fx, fy) in NODE_LAYOUT {
        controller.register_node(*node, node_rect(container, *fx, *fy));
    }

    if redraw_due {
        controller.draw(container, colors);
    }

    paint_connectors(ui, controller, container);

    let mut target = None;
    let mut node_rects = Vec::with_capacity(NODE_LAYOUT.len());
    for card in NODE_CARDS {
        let Some((_, fx, fy)) = NODE_LAYOUT.iter().find(|(n, _, _)| *n == card.node) else {
            continue;
        };
        let rect = node_rect(container, *fx, *fy);
        node_rects.push(rect);

        let is_active = controller.active() == Some(card.node);
        let border = if is_active { colors.accent } else { colors.primary };
        let text = format!("{}\n{}\n{}", card.title, card.summary, card.badge);
        let button = egui::Button::new(
            egui::RichText::new(text).small().color(colors.text),
        )
        .fill(colors.surface.gamma_multiply(0.6))
        .stroke(egui::Stroke::new(if is_active { 2.0 } else { 1.0 }, border));

        if ui.put(rect, button).clicked() {
            target = Some(ClickTarget::Node(card.node));
        }
    }

    // Info panel below the canvas while a node is active
    let mut panel_rect = None;
    if let Some(panel) = controller.panel().copied() {
        let inner = egui::Frame::group(ui.style())
            .fill(colors.surface.gamma_multiply(0.8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(panel.title)
                            .strong()
                            .size(16.0)
                            .color(colors.accent),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if ui.small_button("×").clicked() {
                                target = Some(ClickTarget::ClosePanel);
                            }
                        },
                    );
                });
                ui.label(egui::RichText::new(panel.content).color(colors.text));
            });
        panel_rect = Some(inner.response.rect);
    }

    // Anything else the pointer hit this frame counts as outside
    if target.is_none() {
        let clicked_at = ui.ctx().input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = clicked_at {
            let on_node = node_rects.iter().any(|r| r.contains(pos));
            let on_panel = panel_rect.is_some_and(|r| r.contains(pos));
            if on_panel {
                target = Some(ClickTarget::Panel);
            } else if !on_node {
                target = Some(ClickTarget::Outside);
            }
        }
    }

    if let Some(target) = target {
        controller.handle_click(target, colors);
    }
}

/// Card rect for a node placed at the given fractions of the free area
fn node_rect(container: egui::Rect, fx: f32, fy: f32) -> egui::Rect {
    let free = container.size() - egui::vec2(NODE_WIDTH, NODE_HEIGHT);
    let min = container.min + egui::vec2(fx * free.x.max(0.0), fy * free.y.max(0.0));
    egui::Rect::from_min_size(min, egui::vec2(NODE_WIDTH, NODE_HEIGHT))
}

/// Stroke the controller's current connectors onto the overlay surface,
/// which keeps the size the controller matched to the container at the
/// last draw
fn paint_connectors(ui: &egui::Ui, controller: &DiagramController, container: egui::Rect) {
    let overlay = egui::Rect::from_min_size(container.min, controller.overlay_size());
    let painter = ui.painter_at(overlay);
    for connector in controller.connectors() {
        let points: Vec<egui::Pos2> = connector
            .points
            .iter()
            .map(|p| container.min + p.to_vec2())
            .collect();
        let color = connector.style.color.gamma_multiply(connector.style.opacity);
        let line = egui::Stroke::new(connector.style.width, color);

        if connector.style.dashed {
            painter.extend(egui::Shape::dashed_line(
                &points,
                line,
                stroke::DASH_LENGTH,
                stroke::DASH_GAP,
            ));
        } else {
            painter.add(egui::Shape::line(points, line));
        }
    }
}
