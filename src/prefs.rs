//! Language and palette preference services
//!
//! Each service owns its storage and an optional handle to the root
//! attributes it reflects onto. The services are safely callable in
//! non-interactive contexts: with no attribute target, "apply" is a silent
//! no-op, and an unavailable backing store degrades to the defaults.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

use crate::constants::{attrs, storage as keys};
use crate::document::RootAttrs;
use crate::storage::Storage;

/// Recognized interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Th,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Th => "th",
        }
    }

    /// Parse a stored value. Anything unrecognized is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Lang::En),
            "th" => Some(Lang::Th),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Th,
            Lang::Th => Lang::En,
        }
    }
}

/// Language preference: key "lang", recognized values en/th, default en
pub struct LanguageService<S: Storage> {
    storage: S,
    root: Option<Rc<RefCell<RootAttrs>>>,
}

impl<S: Storage> LanguageService<S> {
    pub fn new(storage: S, root: Option<Rc<RefCell<RootAttrs>>>) -> Self {
        Self { storage, root }
    }

    /// Stored language if recognized, else the default
    pub fn lang(&self) -> Lang {
        self.storage
            .get(keys::LANG_KEY)
            .and_then(|v| Lang::parse(&v))
            .unwrap_or_default()
    }

    /// Persist and immediately apply
    pub fn set_lang(&self, lang: Lang) {
        self.storage.set(keys::LANG_KEY, lang.as_str());
        self.apply(lang);
        info!(lang = lang.as_str(), "Language preference updated");
    }

    /// Apply the current (possibly default) value, and make the stored
    /// state explicit when nothing was persisted yet.
    pub fn initialize(&self) {
        let lang = self.lang();
        self.apply(lang);
        if self.storage.get(keys::LANG_KEY).filter(|v| !v.is_empty()).is_none() {
            self.storage.set(keys::LANG_KEY, Lang::default().as_str());
        }
    }

    fn apply(&self, lang: Lang) {
        if let Some(root) = &self.root {
            root.borrow_mut().set(attrs::LANG, lang.as_str());
        }
    }
}

/// Palette preference: key "palette", free string, default "eoy-copper"
pub struct PaletteService<S: Storage> {
    storage: S,
    root: Option<Rc<RefCell<RootAttrs>>>,
}

/// Default palette name
pub const DEFAULT_PALETTE: &str = "eoy-copper";

impl<S: Storage> PaletteService<S> {
    pub fn new(storage: S, root: Option<Rc<RefCell<RootAttrs>>>) -> Self {
        Self { storage, root }
    }

    /// Stored palette name, or the default when absent or empty
    pub fn palette(&self) -> String {
        self.storage
            .get(keys::PALETTE_KEY)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PALETTE.to_string())
    }

    pub fn set_palette(&self, palette: &str) {
        self.storage.set(keys::PALETTE_KEY, palette);
        self.apply(palette);
        info!(palette = %palette, "Palette preference updated");
    }

    pub fn initialize(&self) {
        let palette = self.palette();
        self.apply(&palette);
        if self.storage.get(keys::PALETTE_KEY).filter(|v| !v.is_empty()).is_none() {
            self.storage.set(keys::PALETTE_KEY, DEFAULT_PALETTE);
        }
    }

    fn apply(&self, palette: &str) {
        if let Some(root) = &self.root {
            root.borrow_mut().set(attrs::PALETTE, palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn lang_service() -> (LanguageService<MemoryStorage>, Rc<RefCell<RootAttrs>>) {
        let root = RootAttrs::shared();
        (LanguageService::new(MemoryStorage::new(), Some(root.clone())), root)
    }

    fn palette_service() -> (PaletteService<MemoryStorage>, Rc<RefCell<RootAttrs>>) {
        let root = RootAttrs::shared();
        (PaletteService::new(MemoryStorage::new(), Some(root.clone())), root)
    }

    #[test]
    fn test_lang_default_when_unset() {
        let (service, _root) = lang_service();
        assert_eq!(service.lang(), Lang::En);
    }

    #[test]
    fn test_lang_invalid_stored_value_yields_default() {
        let storage = MemoryStorage::new();
        storage.set("lang", "de");
        let service = LanguageService::new(storage, None);
        assert_eq!(service.lang(), Lang::En);

        let storage = MemoryStorage::new();
        storage.set("lang", "");
        let service = LanguageService::new(storage, None);
        assert_eq!(service.lang(), Lang::En);

        let storage = MemoryStorage::new();
        storage.set("lang", "EN");
        let service = LanguageService::new(storage, None);
        assert_eq!(service.lang(), Lang::En);
    }

    #[test]
    fn test_set_lang_persists_and_reflects() {
        let (service, root) = lang_service();
        service.set_lang(Lang::Th);

        assert_eq!(service.lang(), Lang::Th);
        assert_eq!(root.borrow().get("lang"), Some("th"));
    }

    #[test]
    fn test_lang_initialize_persists_default_when_absent() {
        let root = RootAttrs::shared();
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let service = LanguageService::new(storage.clone(), Some(root.clone()));
        service.initialize();

        // Stored state is explicit after first run, and the root reflects it
        assert_eq!(storage.get("lang"), Some("en".to_string()));
        assert_eq!(service.lang(), Lang::En);
        assert_eq!(root.borrow().get("lang"), Some("en"));
    }

    #[test]
    fn test_lang_initialize_keeps_existing_value() {
        let root = RootAttrs::shared();
        let storage = MemoryStorage::new();
        storage.set("lang", "th");
        let service = LanguageService::new(storage, Some(root.clone()));
        service.initialize();

        assert_eq!(service.lang(), Lang::Th);
        assert_eq!(root.borrow().get("lang"), Some("th"));
    }

    #[test]
    fn test_lang_apply_without_root_is_noop() {
        let service = LanguageService::new(MemoryStorage::new(), None);
        service.initialize();
        service.set_lang(Lang::Th); // must not panic
        assert_eq!(service.lang(), Lang::Th);
    }

    #[test]
    fn test_palette_default_when_unset_or_empty() {
        let (service, _root) = palette_service();
        assert_eq!(service.palette(), "eoy-copper");

        let storage = MemoryStorage::new();
        storage.set("palette", "");
        let service = PaletteService::new(storage, None);
        assert_eq!(service.palette(), "eoy-copper");
    }

    #[test]
    fn test_palette_accepts_any_non_empty_string() {
        let (service, root) = palette_service();
        service.set_palette("midnight-neon");

        assert_eq!(service.palette(), "midnight-neon");
        assert_eq!(root.borrow().get("data-palette"), Some("midnight-neon"));
    }

    #[test]
    fn test_palette_initialize_persists_default_and_reflects() {
        let root = RootAttrs::shared();
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let service = PaletteService::new(storage.clone(), Some(root.clone()));
        service.initialize();

        assert_eq!(storage.get("palette"), Some("eoy-copper".to_string()));
        assert_eq!(service.palette(), "eoy-copper");
        assert_eq!(root.borrow().get("data-palette"), Some("eoy-copper"));
    }

    #[test]
    fn test_services_share_one_backing_store() {
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let lang = LanguageService::new(storage.clone(), None);
        let palette = PaletteService::new(storage.clone(), None);

        lang.set_lang(Lang::Th);
        palette.set_palette("slate");

        assert_eq!(storage.get("lang"), Some("th".to_string()));
        assert_eq!(storage.get("palette"), Some("slate".to_string()));
    }

    #[test]
    fn test_lang_toggle() {
        assert_eq!(Lang::En.toggled(), Lang::Th);
        assert_eq!(Lang::Th.toggled(), Lang::En);
    }
}
