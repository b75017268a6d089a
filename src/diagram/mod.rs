//! Diagram interaction controller
//!
//! Owns the click-driven highlight state for the infrastructure diagram:
//! which node is active, what the info panel shows, and how every declared
//! connector is styled. Node geometry comes from an explicit registry the
//! layout pass keeps current; the controller never queries the scene.
//!
//! Failure semantics: a connection whose endpoint is missing from the
//! registry is skipped, a click on a node without an info entry is ignored,
//! and colors are resolved by the caller with their own fallbacks. Nothing
//! here returns an error.

pub mod geometry;

use std::collections::HashMap;

use egui::{Color32, Pos2, Rect, Vec2};
use tracing::debug;

use crate::constants::stroke;
use crate::palette::PaletteColors;

/// The fixed set of diagram stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Server,
    Domain,
    Ssl,
    K8s,
    Cicd,
    Deploy,
}

impl NodeId {
    pub const ALL: [NodeId; 6] = [
        NodeId::Server,
        NodeId::Domain,
        NodeId::Ssl,
        NodeId::K8s,
        NodeId::Cicd,
        NodeId::Deploy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeId::Server => "server",
            NodeId::Domain => "domain",
            NodeId::Ssl => "ssl",
            NodeId::K8s => "k8s",
            NodeId::Cicd => "cicd",
            NodeId::Deploy => "deploy",
        }
    }
}

/// A declared directed pair of nodes rendered as a connector line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
}

impl Connection {
    pub const fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

/// Info panel entry for one node, configuration data owned by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    pub title: &'static str,
    pub content: &'static str,
}

/// Stroke styling of one connector line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub width: f32,
    pub opacity: f32,
    pub dashed: bool,
}

impl LineStyle {
    /// Resting style: dashed, base width, base opacity, primary color
    fn base(colors: &PaletteColors) -> Self {
        Self {
            color: colors.primary,
            width: stroke::BASE_WIDTH,
            opacity: stroke::BASE_OPACITY,
            dashed: true,
        }
    }

    /// Style of connectors touching the active node
    fn emphasized(colors: &PaletteColors) -> Self {
        Self {
            color: colors.accent,
            width: stroke::EMPHASIS_WIDTH,
            opacity: stroke::EMPHASIS_OPACITY,
            dashed: false,
        }
    }

    /// Style of connectors away from the active node
    fn dimmed(colors: &PaletteColors) -> Self {
        Self {
            color: colors.primary,
            width: stroke::BASE_WIDTH,
            opacity: stroke::DIM_OPACITY,
            dashed: false,
        }
    }
}

/// A connector ready to stroke: flattened path plus current style
#[derive(Debug, Clone)]
pub struct Connector {
    pub connection: Connection,
    pub points: Vec<Pos2>,
    pub style: LineStyle,
}

/// Current info panel content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelContent {
    pub node: NodeId,
    pub title: &'static str,
    pub content: &'static str,
}

/// Where a click landed, decided by the view's hit tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Node(NodeId),
    Panel,
    ClosePanel,
    Outside,
}

/// Interaction state machine and connector renderer state
pub struct DiagramController {
    info: &'static [(NodeId, NodeInfo)],
    connections: &'static [Connection],
    registry: HashMap<NodeId, Rect>,
    overlay_size: Vec2,
    connectors: Vec<Connector>,
    active: Option<NodeId>,
    panel: Option<PanelContent>,
}

impl DiagramController {
    pub fn new(
        info: &'static [(NodeId, NodeInfo)],
        connections: &'static [Connection],
    ) -> Self {
        Self {
            info,
            connections,
            registry: HashMap::new(),
            overlay_size: Vec2::ZERO,
            connectors: Vec::new(),
            active: None,
            panel: None,
        }
    }

    /// Record the current rect of a node. The layout pass calls this for
    /// every node it places, replacing stale geometry.
    pub fn register_node(&mut self, node: NodeId, rect: Rect) {
        self.registry.insert(node, rect);
    }

    /// Drop all node geometry, e.g. before a structural rebuild
    pub fn clear_registry(&mut self) {
        self.registry.clear();
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn panel(&self) -> Option<&PanelContent> {
        self.panel.as_ref()
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Size the overlay drawing surface was last matched to
    pub fn overlay_size(&self) -> Vec2 {
        self.overlay_size
    }

    pub fn info_for(&self, node: NodeId) -> Option<&NodeInfo> {
        self.info.iter().find(|(id, _)| *id == node).map(|(_, info)| info)
    }

    /// Recompute every connector from current geometry.
    ///
    /// The overlay is sized to the container's rendered rect; each declared
    /// connection becomes a curve between its endpoints' centers relative
    /// to the container origin. A connection with an unregistered endpoint
    /// is skipped.
    pub fn draw(&mut self, container: Rect, colors: &PaletteColors) {
        self.overlay_size = container.size();
        self.connectors.clear();

        for connection in self.connections {
            let (Some(from_rect), Some(to_rect)) = (
                self.registry.get(&connection.from),
                self.registry.get(&connection.to),
            ) else {
                debug!(
                    from = connection.from.as_str(),
                    to = connection.to.as_str(),
                    "Connector endpoint not in registry, skipping"
                );
                continue;
            };

            let from_center = geometry::center_in(container, *from_rect);
            let to_center = geometry::center_in(container, *to_rect);
            let points =
                geometry::connector_points(from_center, to_center, stroke::FLATTEN_STEPS);

            let style = self.style_for(*connection, colors);
            self.connectors.push(Connector {
                connection: *connection,
                points,
                style,
            });
        }
    }

    /// Apply one click, already classified by the view
    pub fn handle_click(&mut self, target: ClickTarget, colors: &PaletteColors) {
        match target {
            ClickTarget::Node(node) => {
                let Some(info) = self.info_for(node).copied() else {
                    debug!(node = node.as_str(), "Clicked node has no info entry, ignoring");
                    return;
                };
                self.active = Some(node);
                self.panel = Some(PanelContent {
                    node,
                    title: info.title,
                    content: info.content,
                });
                self.restyle(colors);
            }
            ClickTarget::ClosePanel => self.deactivate(colors),
            ClickTarget::Outside => {
                if self.active.is_some() {
                    self.deactivate(colors);
                }
            }
            ClickTarget::Panel => {}
        }
    }

    fn deactivate(&mut self, colors: &PaletteColors) {
        self.active = None;
        self.panel = None;
        self.restyle(colors);
    }

    /// Restyle existing connectors in place without touching geometry
    fn restyle(&mut self, colors: &PaletteColors) {
        let active = self.active;
        for connector in &mut self.connectors {
            connector.style = match active {
                Some(node) if connector.connection.touches(node) => {
                    LineStyle::emphasized(colors)
                }
                Some(_) => LineStyle::dimmed(colors),
                None => LineStyle::base(colors),
            };
        }
    }

    fn style_for(&self, connection: Connection, colors: &PaletteColors) -> LineStyle {
        match self.active {
            Some(node) if connection.touches(node) => LineStyle::emphasized(colors),
            Some(_) => LineStyle::dimmed(colors),
            None => LineStyle::base(colors),
        }
    }
}
