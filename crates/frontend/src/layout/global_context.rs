//! Application-wide navigation state
//!
//! `AppGlobalContext` is the single title store: the sidebar publishes
//! through [`AppGlobalContext::navigate`], the header reads `title`.

use leptos::prelude::*;

/// Pages reachable from the sidebar, plus the per-menu composition page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    Menus,
    MenuComposition(i64),
    Stocks,
    Purchases,
    Categories,
    Ingredients,
    IngredientGroups,
    Units,
    Tables,
    Floors,
    Customers,
}

impl PageKey {
    /// Header title published when the page becomes active
    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Home => "Accueil",
            PageKey::Menus => "Menus",
            PageKey::MenuComposition(_) => "Composition du menu",
            PageKey::Stocks => "Stocks",
            PageKey::Purchases => "Achat stocks",
            PageKey::Categories => "Catégorie",
            PageKey::Ingredients => "Ingredient",
            PageKey::IngredientGroups => "Ingredient groups",
            PageKey::Units => "Unité",
            PageKey::Tables => "Tables",
            PageKey::Floors => "Étages",
            PageKey::Customers => "Customers",
        }
    }

    /// Sidebar entry highlighted for this page
    pub fn menu_entry(&self) -> PageKey {
        match self {
            PageKey::MenuComposition(_) => PageKey::Menus,
            other => *other,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub title: RwSignal<String>,
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(PageKey::Home.title().to_string()),
            active: RwSignal::new(PageKey::Home),
            left_open: RwSignal::new(true),
        }
    }

    /// Activates `key` and publishes its title.
    pub fn navigate(&self, key: PageKey) {
        log::debug!("navigate to {:?}", key);
        self.active.set(key);
        self.title.set(key.title().to_string());
    }

    /// Overrides the published title, e.g. with the name of the record on screen.
    pub fn set_title(&self, title: impl Into<String>) {
        self.title.set(title.into());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title_is_home() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.title.get_untracked(), "Accueil");
        assert_eq!(ctx.active.get_untracked(), PageKey::Home);
    }

    #[test]
    fn test_navigate_publishes_title() {
        let ctx = AppGlobalContext::new();
        ctx.navigate(PageKey::Stocks);
        assert_eq!(ctx.title.get_untracked(), "Stocks");
        ctx.navigate(PageKey::MenuComposition(3));
        assert_eq!(ctx.title.get_untracked(), "Composition du menu");
        assert_eq!(ctx.active.get_untracked().menu_entry(), PageKey::Menus);
    }

    #[test]
    fn test_set_title_keeps_page() {
        let ctx = AppGlobalContext::new();
        ctx.navigate(PageKey::Menus);
        ctx.set_title("Menus - Pizza");
        assert_eq!(ctx.title.get_untracked(), "Menus - Pizza");
        assert_eq!(ctx.active.get_untracked(), PageKey::Menus);
    }
}
