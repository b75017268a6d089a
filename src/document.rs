//! Root attribute reflection
//!
//! Preferences are reflected onto the application root as named string
//! attributes (`lang`, `data-palette`). External consumers — the locale
//! lookup and the palette resolver — read only these two attributes; they
//! never reach into the services themselves.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Attribute map on the application root
#[derive(Debug, Default)]
pub struct RootAttrs {
    attrs: HashMap<String, String>,
}

impl RootAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle for the single-threaded UI context
    pub fn shared() -> Rc<RefCell<RootAttrs>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut attrs = RootAttrs::new();
        assert_eq!(attrs.get("lang"), None);

        attrs.set("lang", "th");
        assert_eq!(attrs.get("lang"), Some("th"));

        attrs.set("lang", "en");
        assert_eq!(attrs.get("lang"), Some("en"));
    }

    #[test]
    fn test_attributes_are_independent() {
        let mut attrs = RootAttrs::new();
        attrs.set("lang", "en");
        attrs.set("data-palette", "eoy-copper");

        assert_eq!(attrs.get("lang"), Some("en"));
        assert_eq!(attrs.get("data-palette"), Some("eoy-copper"));
    }
}
