//! Dashboard layout: status bar split and card grids.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Layout manager for calculating screen areas
#[derive(Debug, Clone)]
pub struct Layout {
    /// Status bar height
    status_height: u16,
    /// Minimum width of one card column
    min_card_width: u16,
    /// Height of one card row
    card_height: u16,
}

impl Layout {
    /// Create a new layout
    #[must_use]
    pub fn new() -> Self {
        Self {
            status_height: 1,
            min_card_width: 24,
            card_height: 6,
        }
    }

    /// Create from a config
    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            status_height: config.status_height,
            min_card_width: config.min_card_width.max(1),
            card_height: config.card_height.max(1),
        }
    }

    /// Set status bar height
    #[must_use]
    pub fn with_status_height(mut self, height: u16) -> Self {
        self.status_height = height;
        self
    }

    /// Split the terminal into main content and status bar
    #[must_use]
    pub fn calculate(&self, size: Rect) -> CalculatedLayout {
        let total_height = size.height;
        let status_height = self.status_height.min(total_height.saturating_sub(1));
        let main_height = total_height.saturating_sub(status_height);

        let main_area = Rect {
            x: size.x,
            y: size.y,
            width: size.width,
            height: main_height,
        };

        let status_area = Rect {
            x: size.x,
            y: size.y + main_height,
            width: size.width,
            height: status_height,
        };

        CalculatedLayout {
            main_area,
            status_area,
        }
    }

    /// Split an area into a fixed-height header and the rest
    #[must_use]
    pub fn split_header(&self, area: Rect, header_height: u16) -> (Rect, Rect) {
        let header_height = header_height.min(area.height);

        let header = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: header_height,
        };

        let body = Rect {
            x: area.x,
            y: area.y + header_height,
            width: area.width,
            height: area.height.saturating_sub(header_height),
        };

        (header, body)
    }

    /// Lay out up to `count` card rectangles in a grid.
    ///
    /// Column count follows the available width; rows are added until the
    /// area runs out of height, so fewer than `count` rects may come back.
    #[must_use]
    pub fn card_grid(&self, area: Rect, count: usize) -> Vec<Rect> {
        if area.width == 0 || area.height == 0 || count == 0 {
            return Vec::new();
        }

        let columns = usize::from((area.width / self.min_card_width).max(1));
        let card_width = area.width / columns as u16;

        let mut rects = Vec::with_capacity(count);
        for i in 0..count {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            let y = area.y + row * self.card_height;

            if y + self.card_height > area.y + area.height {
                break;
            }

            rects.push(Rect {
                x: area.x + col * card_width,
                y,
                width: card_width,
                height: self.card_height,
            });
        }

        rects
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculated layout with main and status areas
#[derive(Debug, Clone, Copy)]
pub struct CalculatedLayout {
    /// Main content area
    pub main_area: Rect,
    /// Status bar area
    pub status_area: Rect,
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Status bar height
    pub status_height: u16,
    /// Minimum width of one card column
    pub min_card_width: u16,
    /// Height of one card row
    pub card_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            status_height: 1,
            min_card_width: 24,
            card_height: 6,
        }
    }
}

impl LayoutConfig {
    /// Validate configuration
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status_height > 0 && self.min_card_width > 0 && self.card_height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_new() {
        let layout = Layout::new();
        assert_eq!(layout.status_height, 1);
        assert_eq!(layout.min_card_width, 24);
    }

    #[test]
    fn test_layout_calculate() {
        let layout = Layout::new().with_status_height(2);
        let calculated = layout.calculate(Rect::new(0, 0, 100, 30));

        assert_eq!(calculated.main_area.height, 28);
        assert_eq!(calculated.status_area.y, 28);
        assert_eq!(calculated.status_area.height, 2);
    }

    #[test]
    fn test_layout_calculate_tiny_terminal() {
        let layout = Layout::new().with_status_height(5);
        let calculated = layout.calculate(Rect::new(0, 0, 10, 3));

        // Status bar yields to content on short terminals
        assert!(calculated.main_area.height >= 1);
        assert_eq!(
            calculated.main_area.height + calculated.status_area.height,
            3
        );
    }

    #[test]
    fn test_split_header() {
        let layout = Layout::new();
        let (header, body) = layout.split_header(Rect::new(0, 0, 80, 24), 4);

        assert_eq!(header.height, 4);
        assert_eq!(body.y, 4);
        assert_eq!(body.height, 20);
    }

    #[test]
    fn test_split_header_clamps() {
        let layout = Layout::new();
        let (header, body) = layout.split_header(Rect::new(0, 0, 80, 3), 10);

        assert_eq!(header.height, 3);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn test_card_grid_columns_follow_width() {
        let layout = Layout::new();

        // 100 wide / 24 min = 4 columns
        let rects = layout.card_grid(Rect::new(0, 0, 100, 24), 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].y, rects[3].y);
        assert_eq!(rects[1].x, 25);

        // 40 wide = 1 column, cards stack
        let rects = layout.card_grid(Rect::new(0, 0, 40, 24), 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[1].y, 6);
    }

    #[test]
    fn test_card_grid_stops_at_height() {
        let layout = Layout::new();
        // One column, 12 rows of height for 6-tall cards: 2 fit
        let rects = layout.card_grid(Rect::new(0, 0, 30, 12), 5);
        assert_eq!(rects.len(), 2);
    }

    #[test]
    fn test_card_grid_empty_inputs() {
        let layout = Layout::new();
        assert!(layout.card_grid(Rect::new(0, 0, 0, 10), 3).is_empty());
        assert!(layout.card_grid(Rect::new(0, 0, 80, 24), 0).is_empty());
    }

    #[test]
    fn test_layout_config_default_valid() {
        assert!(LayoutConfig::default().is_valid());
    }

    #[test]
    fn test_layout_config_invalid() {
        let config = LayoutConfig {
            status_height: 0,
            ..LayoutConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_layout_from_config_clamps_zero() {
        let config = LayoutConfig {
            status_height: 1,
            min_card_width: 0,
            card_height: 0,
        };
        let layout = Layout::from_config(&config);
        assert_eq!(layout.min_card_width, 1);
        assert_eq!(layout.card_height, 1);
    }
}
