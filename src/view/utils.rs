//! Utility functions for rendering UI components

use ratatui::layout::Rect;

/// Price as the catalog writes it, e.g. `$22.3`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_keep_catalog_precision() {
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(22.3), "$22.3");
        assert_eq!(format_price(7.0), "$7");
    }

    #[test]
    fn long_titles_are_ellipsized() {
        assert_eq!(truncate_string("Backpack", 20), "Backpack");
        assert_eq!(truncate_string("Fjallraven Foldsack", 10), "Fjallra...");
    }

    #[test]
    fn centered_rect_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 50, 50), area);
    }
}
