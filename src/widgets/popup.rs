use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area for a popup hanging under `anchor`, clipped to `bounds`
///
/// Starts at the anchor's left edge and shrinks rather than overflowing the
/// right or bottom of `bounds`.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.y.saturating_add(anchor.height);

    let bounds_right = bounds.x.saturating_add(bounds.width);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: popup_x,
        y: popup_y.min(bounds_bottom),
        width: width.min(bounds_right.saturating_sub(popup_x)),
        height: height.min(bounds_bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
