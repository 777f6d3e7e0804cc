//! DOM helpers for the hero shell
//!
//! Everything here addresses the static markup served by the host by
//! element id. Missing elements degrade to no-ops; the page is decorative
//! and must never crash over a selector.

use merke_motion::scene::NODES;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|doc| doc.get_element_by_id(id))
}

/// Element id of a pipeline node card, by choreography index.
pub fn node_elem_id(index: usize) -> Option<String> {
    NODES.get(index).map(|n| format!("node-{}", n.id))
}

/// Toggle a node's highlighted state: the card gets an `active` class and
/// its detail panel an `open` class.
pub fn set_node_highlight(index: usize, on: bool) {
    let Some(id) = node_elem_id(index) else { return };
    if let Some(card) = element_by_id(&id) {
        toggle_class(&card, "active", on);
    }
    if let Some(panel) = element_by_id(&format!("{id}-details")) {
        toggle_class(&panel, "open", on);
    }
}

/// CSS transform that places a cursor marker.
pub fn cursor_transform(x: f64, y: f64) -> String {
    format!("translate3d({x:.1}px, {y:.1}px, 0)")
}

/// Move a collaborator cursor element to a smoothed position.
pub fn set_cursor_position(elem_id: &str, x: f64, y: f64) {
    if let Some(el) = element_by_id(elem_id) {
        if let Ok(html_el) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = html_el
                .style()
                .set_property("transform", &cursor_transform(x, y));
        }
    }
}

/// Show a toast notification (auto-hides after 3 seconds)
pub fn show_toast(title: &str, description: &str) {
    let Some(el) = element_by_id("toast") else { return };

    if let Some(title_el) = element_by_id("toast-title") {
        title_el.set_text_content(Some(title));
    }
    if let Some(desc_el) = element_by_id("toast-description") {
        desc_el.set_text_content(Some(description));
    }
    let _ = el.set_attribute("class", "toast show");

    // Auto-hide after 3 seconds
    let hide_el = el;
    let callback = Closure::once(Box::new(move || {
        let _ = hide_el.set_attribute("class", "toast");
    }) as Box<dyn FnOnce()>);

    if let Some(win) = window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            3000,
        );
    }
    callback.forget();
}

/// Reveal the work-in-progress gate dialog. The markup carries the ARIA
/// wiring; this only lifts the `hidden` class.
pub fn reveal_gate() {
    if let Some(el) = element_by_id("wip-gate") {
        toggle_class(&el, "hidden", false);
    }
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    if on {
        let _ = list.add_1(class);
    } else {
        let _ = list.remove_1(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_elem_id() {
        assert_eq!(node_elem_id(0).as_deref(), Some("node-data"));
        assert_eq!(node_elem_id(2).as_deref(), Some("node-inference"));
        assert!(node_elem_id(3).is_none());
    }

    #[test]
    fn test_cursor_transform_format() {
        assert_eq!(
            cursor_transform(150.0, 122.25),
            "translate3d(150.0px, 122.3px, 0)"
        );
    }
}
