use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Height of the fixed header that anchored sections must clear.
pub const HEADER_OFFSET: f64 = 72.0;

pub fn anchor_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Smoothly scrolls to the element with `id`, leaving room for the header.
pub fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("No anchor target '#{}'", id);
        return;
    };

    let element_top = target.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(element_top, page_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Brings the element with `id` into view, aligned to its top edge.
pub fn scroll_into_view(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_clears_fixed_header() {
        assert_eq!(anchor_scroll_top(500.0, 0.0), 428.0);
        assert_eq!(anchor_scroll_top(100.0, 1000.0), 1028.0);
        assert_eq!(anchor_scroll_top(0.0, 0.0), -72.0);
    }
}
