use log::debug;

use crate::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Persisted choice first, then the OS signal, then light.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if os_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}

/// Where the applied theme becomes visible (the document root in the browser).
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeManager<S, V> {
    store: S,
    surface: V,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeManager<S, V> {
    pub fn new(store: S, surface: V, key: impl Into<String>) -> Self {
        Self {
            store,
            surface,
            key: key.into(),
            current: Theme::Light,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.surface.apply(theme);
        self.store.set(&self.key, theme.as_str());
        self.current = theme;
        debug!("Theme set to {}", theme.as_str());
    }

    /// Runs once at start-up; the OS preference is not consulted again afterwards.
    pub fn init_theme(&mut self, os_prefers_dark: bool) -> Theme {
        let stored = self.store.get(&self.key);
        let theme = Theme::resolve(stored.as_deref(), os_prefers_dark);
        self.set_theme(theme);
        theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Theme>>>);

    impl ThemeSurface for Recorder {
        fn apply(&self, theme: Theme) {
            self.0.borrow_mut().push(theme);
        }
    }

    fn manager(store: MemoryStore) -> (ThemeManager<MemoryStore, Recorder>, Recorder) {
        let surface = Recorder::default();
        (ThemeManager::new(store, surface.clone(), "theme"), surface)
    }

    #[test]
    fn os_signal_decides_without_persisted_value() {
        let (mut dark, _) = manager(MemoryStore::default());
        assert_eq!(dark.init_theme(true), Theme::Dark);

        let (mut light, _) = manager(MemoryStore::default());
        assert_eq!(light.init_theme(false), Theme::Light);
    }

    #[test]
    fn persisted_value_overrides_os_signal() {
        let (mut m, _) = manager(MemoryStore::with("theme", "light"));
        assert_eq!(m.init_theme(true), Theme::Light);

        let (mut m, _) = manager(MemoryStore::with("theme", "dark"));
        assert_eq!(m.init_theme(false), Theme::Dark);
    }

    #[test]
    fn unrecognized_persisted_value_is_ignored() {
        let (mut m, _) = manager(MemoryStore::with("theme", "sepia"));
        assert_eq!(m.init_theme(true), Theme::Dark);
        assert_eq!(m.store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn init_applies_exactly_once() {
        let (mut m, surface) = manager(MemoryStore::default());
        m.init_theme(false);
        assert_eq!(*surface.0.borrow(), vec![Theme::Light]);
    }

    #[test]
    fn store_and_surface_agree_after_every_toggle() {
        let (mut m, surface) = manager(MemoryStore::default());
        m.init_theme(false);
        for _ in 0..5 {
            let theme = m.toggle_theme();
            let stored = m.store.get("theme");
            assert_eq!(Theme::parse(stored.as_deref().unwrap()), Some(theme));
            assert_eq!(surface.0.borrow().last().copied(), Some(theme));
            assert_eq!(m.current(), theme);
        }
        assert_eq!(m.current(), Theme::Dark);
    }
}
