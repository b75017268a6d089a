//! Portfolio viewer application
//!
//! Owns the preference services, the diagram controller, and the redraw
//! scheduler, and wires them to the frame loop: resize and minimize-restore
//! transitions arm the scheduler, the scheduler's deadlines drive repaint
//! requests, and the root attributes the services reflect onto select the
//! label language and the palette every frame.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::{egui, CreationContext};
use tracing::info;

use crate::animation::{Reveal, RevealStrategy};
use crate::constants::{attrs, nav};
use crate::content::{self, NavKey};
use crate::diagram::DiagramController;
use crate::document::RootAttrs;
use crate::palette::{self, PaletteColors};
use crate::prefs::{Lang, LanguageService, PaletteService};
use crate::schedule::RedrawScheduler;
use crate::storage::FileStorage;

use super::components::{diagram_view, intro, navbar, skills, timeline};
use super::constants::*;

/// Header presentation derived from the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    IsTop,
    Scrolling,
    Pinned,
}

impl ScrollState {
    fn from_offset(y: f32) -> Self {
        if y <= 0.0 {
            ScrollState::IsTop
        } else if y < nav::PIN_SCROLL_Y {
            ScrollState::Scrolling
        } else {
            ScrollState::Pinned
        }
    }
}

pub struct PortfolioApp {
    root: Rc<RefCell<RootAttrs>>,
    lang_service: LanguageService<FileStorage>,
    palette_service: PaletteService<FileStorage>,

    controller: DiagramController,
    scheduler: RedrawScheduler,
    pending_redraw: bool,

    reveals: Vec<Reveal>,
    expanded: Vec<bool>,

    pending_scroll: Option<NavKey>,
    scroll_offset: f32,
    last_viewport: egui::Vec2,
    was_minimized: bool,
}

impl PortfolioApp {
    pub fn new(
        _cc: &CreationContext<'_>,
        storage_path: Option<PathBuf>,
        reduced_motion: bool,
    ) -> Self {
        info!("Initializing portfolio viewer");

        let path = storage_path.unwrap_or_else(FileStorage::default_path);
        let root = RootAttrs::shared();

        let lang_service =
            LanguageService::new(FileStorage::new(path.clone()), Some(root.clone()));
        let palette_service =
            PaletteService::new(FileStorage::new(path), Some(root.clone()));
        lang_service.initialize();
        palette_service.initialize();

        let strategy = RevealStrategy::select(reduced_motion);
        let reveals = content::CAREER_ITEMS
            .iter()
            .map(|_| Reveal::attach(strategy))
            .collect();
        let expanded = vec![false; content::CAREER_ITEMS.len()];

        Self {
            root,
            lang_service,
            palette_service,
            controller: DiagramController::new(content::NODE_INFO, content::CONNECTIONS),
            scheduler: RedrawScheduler::new(Instant::now()),
            pending_redraw: false,
            reveals,
            expanded,
            pending_scroll: None,
            scroll_offset: 0.0,
            last_viewport: egui::Vec2::ZERO,
            was_minimized: false,
        }
    }

    /// Current language and palette, read back from the root attributes
    fn current_prefs(&self) -> (Lang, PaletteColors) {
        let root = self.root.borrow();
        let lang = root
            .get(attrs::LANG)
            .and_then(Lang::parse)
            .unwrap_or_default();
        let colors = palette::resolve(root.get(attrs::PALETTE).unwrap_or(""));
        (lang, colors)
    }

    /// Feed window geometry and visibility transitions into the scheduler
    fn track_viewport(&mut self, ctx: &egui::Context, now: Instant) {
        let size = ctx.screen_rect().size();
        if self.last_viewport != egui::Vec2::ZERO && size != self.last_viewport {
            self.scheduler.on_resize(now);
        }
        self.last_viewport = size;

        let minimized = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        if self.was_minimized && !minimized {
            self.scheduler.on_visibility_regained(now);
        }
        self.was_minimized = minimized;
    }

    fn apply_nav_action(&mut self, ctx: &egui::Context, action: navbar::NavAction) {
        match action {
            navbar::NavAction::Scroll(key) => self.pending_scroll = Some(key),
            navbar::NavAction::ToggleLang => {
                let next = self.lang_service.lang().toggled();
                self.lang_service.set_lang(next);
            }
            navbar::NavAction::SetPalette(name) => {
                self.palette_service.set_palette(&name);
            }
            navbar::NavAction::OpenContact => {
                ctx.open_url(egui::OpenUrl::same_tab("mailto:ni2faa@gmail.com"));
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.track_viewport(ctx, now);
        if self.scheduler.poll(now) {
            self.pending_redraw = true;
        }

        let (lang, colors) = self.current_prefs();
        let scroll_state = ScrollState::from_offset(self.scroll_offset);

        let mut nav_action = None;
        egui::TopBottomPanel::top("site-header").show(ctx, |ui| {
            nav_action = navbar::ui(
                ui,
                lang,
                scroll_state,
                &self.palette_service.palette(),
                &colors,
            );
        });
        if let Some(action) = nav_action {
            self.apply_nav_action(ctx, action);
        }

        let frame = egui::Frame::central_panel(&ctx.style()).fill(colors.surface);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let output = egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(SECTION_SPACING);
                self.section(ui, NavKey::About, |_app, ui| {
                    intro::ui(ui, &colors);
                });
                self.section(ui, NavKey::Timeline, |app, ui| {
                    timeline::ui(ui, &colors, &mut app.reveals, &mut app.expanded);
                });
                self.section(ui, NavKey::Skills, |_app, ui| {
                    skills::ui(ui, &colors);
                });
                self.section(ui, NavKey::Showcase, |app, ui| {
                    let redraw = std::mem::take(&mut app.pending_redraw);
                    diagram_view::ui(ui, &mut app.controller, &colors, redraw);
                });
                ui.add_space(SECTION_SPACING);
            });
            self.scroll_offset = output.state.offset.y;
        });

        // Wake up exactly when the next redraw deadline is due
        let wait = self
            .scheduler
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(Duration::from_millis(IDLE_REPAINT_MS));
        ctx.request_repaint_after(wait);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.scheduler.cancel_all();
        info!("Viewer exiting");
    }
}

impl PortfolioApp {
    /// Render one anchored section, honoring a pending nav scroll request
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        key: NavKey,
        body: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let (lang, _) = self.current_prefs();
        let heading = ui.heading(
            egui::RichText::new(key.label(lang)).size(22.0),
        );
        if self.pending_scroll == Some(key) {
            heading.scroll_to_me(Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
        ui.add_space(ITEM_SPACING);
        body(self, ui);
        ui.add_space(SECTION_SPACING);
    }
}
