//! Two-phase panels: lay out the content, then size the background to it

use glam::{Vec2, Vec3};
use tracing::warn;

use super::LayoutStack;
use crate::spatial::Bounds;

/// Where a panel's margin goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPadding {
    /// No margin at all
    None,
    /// Margin inside the panel background, around the content
    #[default]
    Inside,
    /// The background hugs the content, margin sits outside it
    Outside,
}

/// A panel whose content is being laid out. Hand it back to
/// [`LayoutStack::panel_end`] to get the background box.
#[must_use = "a pending panel must be finished with panel_end"]
#[derive(Debug)]
pub struct PendingPanel {
    padding: PanelPadding,
    depth: usize,
}

impl PendingPanel {
    pub fn padding(&self) -> PanelPadding {
        self.padding
    }
}

impl LayoutStack {
    /// Open a panel at the cursor, spanning the remaining width
    pub fn panel_begin(&mut self, padding: PanelPadding) -> PendingPanel {
        let margin = self.metrics().margin;
        let depth = self.metrics().depth;
        let pad = if padding == PanelPadding::Outside { margin } else { 0.0 };
        let size = self.remaining() + Vec2::new(pad * 2.0, 0.0);
        let start = self.at() + Vec3::new(pad, pad, -depth * 0.1);
        self.push(start, size, padding != PanelPadding::None);
        PendingPanel {
            padding,
            depth: self.depth(),
        }
    }

    /// Close the panel, reserve its measured size in the enclosing frame
    /// and return the box its background should fill
    pub fn panel_end(&mut self, panel: PendingPanel) -> Bounds {
        if panel.depth != self.depth() {
            warn!(
                expected = panel.depth,
                actual = self.depth(),
                "Panel closed at a different layout depth than it was opened"
            );
        }
        let margin = self.metrics().margin;
        let pad = if panel.padding == PanelPadding::Inside { margin } else { 0.0 };
        let panel_size = self.size_used() + Vec2::splat(pad * 2.0);
        self.pop();
        self.reserve_bounds(panel_size, false, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMetrics;

    fn layout() -> LayoutStack {
        let mut layout = LayoutStack::new(LayoutMetrics {
            margin: 0.01,
            padding: 0.01,
            gutter: 0.01,
            depth: 0.01,
            line_height: 0.04,
        });
        layout.push(Vec3::ZERO, Vec2::new(0.4, 0.0), false);
        layout
    }

    #[test]
    fn test_inside_panel_wraps_content_with_margin() {
        let mut layout = layout();
        let panel = layout.panel_begin(PanelPadding::Inside);
        // Content starts inset by the margin
        let (pos, _) = layout.reserve(Vec2::new(0.1, 0.04), false);
        assert!((pos - Vec3::new(-0.01, -0.01, -0.001)).length() < 1e-5);
        let bounds = layout.panel_end(panel);
        assert!((bounds.dimensions.x - 0.12).abs() < 1e-5);
        assert!((bounds.dimensions.y - 0.06).abs() < 1e-5);
        assert_eq!(layout.depth(), 1);
    }

    #[test]
    fn test_outside_panel_hugs_content() {
        let mut layout = layout();
        let panel = layout.panel_begin(PanelPadding::Outside);
        let (pos, _) = layout.reserve(Vec2::new(0.1, 0.04), false);
        assert!(pos.x.abs() < 1e-5);
        let bounds = layout.panel_end(panel);
        assert!((bounds.dimensions.x - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_panel_reserves_space_after_it() {
        let mut layout = layout();
        let panel = layout.panel_begin(PanelPadding::None);
        layout.reserve(Vec2::new(0.1, 0.04), false);
        layout.panel_end(panel);
        let (pos, _) = layout.reserve(Vec2::new(0.1, 0.04), false);
        assert!((pos.y + 0.05).abs() < 1e-5);
    }
}
