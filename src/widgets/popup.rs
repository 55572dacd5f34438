use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Full-width strip of `height` rows directly below `anchor`, clipped to `bounds`
pub fn strip_below_anchor(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let y = anchor.y.saturating_add(anchor.height);
    let available = bounds.bottom().saturating_sub(y);

    Rect {
        x: anchor.x,
        y,
        width: anchor.width,
        height: height.min(available),
    }
}

/// Single cell under `anchor`, `x_offset` columns in from its left edge
pub fn cell_below_anchor(anchor: Rect, bounds: Rect, x_offset: u16) -> Option<Rect> {
    let cell = strip_below_anchor(anchor, bounds, 1);
    if cell.height == 0 || x_offset >= cell.width {
        return None;
    }

    Some(Rect {
        x: cell.x + x_offset,
        y: cell.y,
        width: 1,
        height: 1,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
