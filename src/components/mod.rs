pub mod blog_detail;
pub mod cards;
pub mod contact_form;
pub mod grid_glow;
pub mod nav;
pub mod testimonials;
pub mod toast;
pub mod typewriter;

use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Smooth-scrolls the viewport to a section by element id.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
