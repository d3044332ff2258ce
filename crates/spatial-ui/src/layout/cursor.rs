//! Layout frames and the reservation cursor

use glam::{Vec2, Vec3};
use tracing::warn;

use super::LayoutMetrics;
use crate::id::IdHash;
use crate::spatial::Bounds;

/// Rounding slack when deciding whether a slot overflows its line
const WRAP_EPSILON: f32 = 0.0001;

/// Link from a layout frame to the window it sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMeasure {
    pub window: IdHash,
    /// Window size measured last frame, used for auto axes
    pub prev_size: Vec2,
    /// Requested layout size; 0 on an axis means auto
    pub layout_size: Vec2,
}

/// Content size a popped frame reports back to its window. Fixed axes are
/// reported as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMeasure {
    pub window: IdHash,
    pub size: Vec2,
}

/// Edge to carve a fixed strip from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
struct LayoutFrame {
    offset_initial: Vec3,
    offset: Vec3,
    offset_prev: Vec3,
    size: Vec2,
    size_used: Vec2,
    line: Vec2,
    line_prev: Vec2,
    window: Option<WindowMeasure>,
}

impl LayoutFrame {
    fn new(start: Vec3, size: Vec2) -> Self {
        Self {
            offset_initial: start,
            offset: start,
            offset_prev: start,
            size,
            size_used: Vec2::ZERO,
            line: Vec2::ZERO,
            line_prev: Vec2::ZERO,
            window: None,
        }
    }

    fn is_auto_width(&self) -> bool {
        self.size.x == 0.0
    }

    fn is_auto_height(&self) -> bool {
        self.size.y == 0.0
    }
}

/// Stack of layout frames. The bottom frame is a root at the origin with
/// auto size, so reserving always has somewhere to go.
#[derive(Debug, Clone)]
pub struct LayoutStack {
    frames: Vec<LayoutFrame>,
    metrics: LayoutMetrics,
    recent: Bounds,
}

impl Default for LayoutStack {
    fn default() -> Self {
        Self::new(LayoutMetrics::default())
    }
}

impl LayoutStack {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            frames: vec![LayoutFrame::new(Vec3::ZERO, Vec2::ZERO)],
            metrics,
            recent: Bounds::default(),
        }
    }

    /// Start a new frame with fresh metrics. Returns how many frames were
    /// left pushed.
    pub fn reset(&mut self, metrics: LayoutMetrics) -> usize {
        let open = self.depth();
        self.frames.clear();
        self.frames.push(LayoutFrame::new(Vec3::ZERO, Vec2::ZERO));
        self.metrics = metrics;
        self.recent = Bounds::default();
        open
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn line_height(&self) -> f32 {
        self.metrics.line_height
    }

    /// Number of pushed frames above the root
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn top(&self) -> &LayoutFrame {
        // The root frame is never popped
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut LayoutFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// The window the current frame sizes, if any
    pub fn current_window(&self) -> Option<IdHash> {
        self.top().window.map(|w| w.window)
    }

    pub fn push(&mut self, start: Vec3, dimensions: Vec2, add_margin: bool) {
        let mut start = start;
        let mut dimensions = dimensions;
        if add_margin {
            let margin = self.metrics.margin;
            start -= Vec3::new(margin, margin, 0.0);
            if dimensions.x != 0.0 {
                dimensions.x -= margin * 2.0;
            }
            if dimensions.y != 0.0 {
                dimensions.y -= margin * 2.0;
            }
        }
        self.frames.push(LayoutFrame::new(start, dimensions));
    }

    /// Push a frame whose measured content sizes a window
    pub fn push_window(&mut self, start: Vec3, dimensions: Vec2, add_margin: bool, window: WindowMeasure) {
        self.push(start, dimensions, add_margin);
        self.top_mut().window = Some(window);
    }

    /// Carve a strip of `size` off one edge of the current frame and push
    /// it as a new frame, shrinking the current one
    pub fn push_cut(&mut self, cut: Cut, size: f32, add_margin: bool) {
        let gutter = self.metrics.gutter;
        let curr = self.top_mut();
        match cut {
            Cut::Bottom if curr.is_auto_height() => {
                warn!("Can't cut bottom for layout with a height of 0!")
            }
            Cut::Right if curr.is_auto_width() => {
                warn!("Can't cut right for layout with a width of 0!")
            }
            _ => {}
        }

        let (cut_start, cut_size, shift) = match cut {
            Cut::Left => {
                let start = curr.offset_initial;
                let cut_size = Vec2::new(size, curr.size.y);
                curr.size.x -= size + gutter;
                (start, cut_size, Vec3::new(-(size + gutter), 0.0, 0.0))
            }
            Cut::Right => {
                let start = curr.offset_initial - Vec3::new(curr.size.x - size, 0.0, 0.0);
                let cut_size = Vec2::new(size, curr.size.y);
                curr.size.x -= size + gutter;
                (start, cut_size, Vec3::ZERO)
            }
            Cut::Top => {
                let start = curr.offset_initial;
                let cut_size = Vec2::new(curr.size.x, size);
                curr.size.y -= size + gutter;
                (start, cut_size, Vec3::new(0.0, -(size + gutter), 0.0))
            }
            Cut::Bottom => {
                let start = curr.offset_initial - Vec3::new(0.0, curr.size.y - size, 0.0);
                let cut_size = Vec2::new(curr.size.x, size);
                curr.size.y -= size + gutter;
                (start, cut_size, Vec3::ZERO)
            }
        };
        curr.offset += shift;
        curr.offset_initial += shift;
        curr.offset_prev += shift;
        let window = curr.window;

        self.push(cut_start, cut_size, add_margin);
        self.top_mut().window = window;
    }

    /// Pop the current frame. Returns its content size when it sizes a
    /// window.
    pub fn pop(&mut self) -> Option<FrameMeasure> {
        if self.frames.len() <= 1 {
            warn!("Tried to pop too many 'layout's! Do you have a push/pop mismatch?");
            return None;
        }
        if self.top().offset.x != self.top().offset_initial.x {
            self.next_line();
        }
        let margin = self.metrics.margin;
        let frame = self.frames.pop()?;
        frame.window.map(|w| {
            let used = frame.size_used + Vec2::splat(margin * 2.0);
            FrameMeasure {
                window: w.window,
                size: Vec2::new(
                    if w.layout_size.x == 0.0 { used.x } else { 0.0 },
                    if w.layout_size.y == 0.0 { used.y } else { 0.0 },
                ),
            }
        })
    }

    /// Space left between the cursor and the frame's far edges
    pub fn remaining(&self) -> Vec2 {
        let frame = self.top();
        let margin = self.metrics.margin;
        let size_x = if frame.is_auto_width() {
            match frame.window {
                Some(w) => w.prev_size.x - margin * 2.0,
                None => frame.size_used.x,
            }
        } else {
            frame.size.x
        };
        let size_y = if frame.is_auto_height() {
            match frame.window {
                Some(w) => w.prev_size.y - margin * 2.0,
                None => 0.0,
            }
        } else {
            frame.size.y
        };
        Vec2::new(
            (size_x - (frame.offset_initial.x - frame.offset.x)).max(0.0),
            (size_y - (frame.offset_initial.y - frame.offset.y)).max(0.0),
        )
    }

    /// Current cursor position
    pub fn at(&self) -> Vec3 {
        self.top().offset
    }

    /// The most recently reserved slot
    pub fn last(&self) -> Bounds {
        self.recent
    }

    /// Reserve a slot. A zero width fills the remaining width and a zero
    /// height is one line. Returns the slot's top-left corner and size.
    /// The cursor moves to a new line afterwards; call
    /// [`LayoutStack::same_line`] to keep going on this one.
    pub fn reserve(&mut self, size: Vec2, add_padding: bool) -> (Vec3, Vec2) {
        let padding = self.metrics.padding;
        let gutter = self.metrics.gutter;
        let mut size = size;
        if size.x == 0.0 {
            size.x = self.remaining().x - if add_padding { padding * 2.0 } else { 0.0 };
        }
        if size.y == 0.0 {
            size.y = self.metrics.line_height;
        }
        let final_size = if add_padding {
            size + Vec2::splat(padding * 2.0)
        } else {
            size
        };

        let frame = self.top();
        let overflows = frame.offset.x != frame.offset_initial.x
            && frame.size.x != 0.0
            && frame.offset.x - final_size.x < frame.offset_initial.x - (frame.size.x + WRAP_EPSILON);
        if overflows {
            self.next_line();
        }

        let frame = self.top_mut();
        let final_pos = frame.offset;
        frame.line.x += final_size.x;
        frame.line.y = frame.line.y.max(final_size.y);
        frame.size_used.x = frame.size_used.x.max(frame.line.x);
        frame.size_used.y = frame
            .size_used
            .y
            .max((frame.offset_initial.y - frame.offset.y) + frame.line.y);
        frame.line.x += gutter;
        frame.offset.x -= final_size.x + gutter;

        self.next_line();

        self.recent = Bounds::new(
            final_pos - Vec3::new(final_size.x / 2.0, final_size.y / 2.0, 0.0),
            Vec3::new(final_size.x, final_size.y, 0.0),
        );
        (final_pos, final_size)
    }

    /// Reserve a slot and give it `depth` toward the viewer
    pub fn reserve_bounds(&mut self, size: Vec2, add_padding: bool, depth: f32) -> Bounds {
        self.reserve(size, add_padding);
        let mut bounds = self.recent;
        bounds.center.z -= depth / 2.0;
        bounds.dimensions.z = depth;
        bounds
    }

    /// Like [`LayoutStack::reserve`], but a zero width is one line and a
    /// zero height fills the remaining height
    pub fn reserve_vertical(&mut self, size: Vec2, add_padding: bool) -> (Vec3, Vec2) {
        let mut size = size;
        if size.x == 0.0 {
            size.x = self.metrics.line_height;
        }
        if size.y == 0.0 {
            let padding = if add_padding { self.metrics.padding * 2.0 } else { 0.0 };
            size.y = self.remaining().y - padding;
        }
        self.reserve(size, add_padding)
    }

    pub fn next_line(&mut self) {
        let gutter = self.metrics.gutter;
        let frame = self.top_mut();
        frame.offset_prev = frame.offset;
        frame.line_prev = frame.line;
        frame.offset.x = frame.offset_initial.x;
        frame.offset.y -= frame.line.y + gutter;
        frame.line = Vec2::ZERO;
    }

    /// Undo the last line break, continuing the previous row
    pub fn same_line(&mut self) {
        let frame = self.top_mut();
        frame.offset = frame.offset_prev;
        frame.line = frame.line_prev;
    }

    /// Blank space: vertical at the start of a line, horizontal otherwise
    pub fn space(&mut self, space: f32) {
        let frame = self.top_mut();
        if frame.offset.x == frame.offset_initial.x {
            frame.offset.y -= space;
        } else {
            frame.offset.x -= space;
        }
    }

    pub(crate) fn size_used(&self) -> Vec2 {
        self.top().size_used
    }
}
