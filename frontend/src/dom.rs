use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::state::scroll::{ScrollMetrics, SectionBounds};
use crate::state::theme::{Theme, ThemeSurface};

fn document() -> Option<Document> {
    window()?.document()
}

pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// The `<html>` element: toggles the `dark` class and mirrors `data-theme`.
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            return;
        };
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        offset: window.page_y_offset().unwrap_or(0.0),
        scroll_top: root.scroll_top() as f64,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

/// Every `<section>` with an id, in document order.
pub fn sections() -> Vec<SectionBounds> {
    let Some(list) = document().and_then(|d| d.query_selector_all("section").ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i)?.dyn_into::<HtmlElement>().ok())
        .filter(|el| !el.id().is_empty())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
        })
        .collect()
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn random() -> f64 {
    web_sys::js_sys::Math::random()
}
