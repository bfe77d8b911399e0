//! Geometry for anchored positioning and dimension tracking
//!
//! Element rects are viewport-relative (what the host's bounding-box
//! query reports); overlay geometry is document-relative, converted by
//! adding the scroll offset at computation time. A computed geometry is
//! therefore stale after any scroll or resize until recomputed.

/// Viewport-relative bounding box of a host element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Rect {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether a viewport point falls inside this box
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Edge of the anchor an overlay attaches to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Document-relative coordinates for a floating overlay
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipGeometry {
    pub top: f64,
    pub left: f64,
}

impl TooltipGeometry {
    /// Anchor an overlay to an element edge.
    ///
    /// `Top`/`Bottom` center horizontally on the anchor and offset
    /// vertically by `gap`; `Left`/`Right` center vertically and offset
    /// horizontally. The scroll offset converts the viewport-relative
    /// rect to document coordinates.
    pub fn anchored(rect: Rect, edge: Edge, gap: f64, scroll_x: f64, scroll_y: f64) -> Self {
        let center_x = rect.left + scroll_x + rect.width / 2.0;
        let center_y = rect.top + scroll_y + rect.height / 2.0;

        match edge {
            Edge::Top => TooltipGeometry {
                top: rect.top + scroll_y - gap,
                left: center_x,
            },
            Edge::Bottom => TooltipGeometry {
                top: rect.bottom() + scroll_y + gap,
                left: center_x,
            },
            Edge::Left => TooltipGeometry {
                top: center_y,
                left: rect.left + scroll_x - gap,
            },
            Edge::Right => TooltipGeometry {
                top: center_y,
                left: rect.right() + scroll_x + gap,
            },
        }
    }
}

/// Margins subtracted from observed dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform margin on all sides
    pub fn uniform(value: f64) -> Self {
        Margins::new(value, value, value, value)
    }

    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Bounded content dimensions derived from an observed box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub bounded_width: f64,
    pub bounded_height: f64,
    pub margin: Margins,
}

impl Dimensions {
    /// Derive bounded dimensions from an observed box:
    /// `bounded_width = max(min_width, observed_width) - margin.left - margin.right`
    /// (symmetric for height). Minimums that cover the margins keep the
    /// bounded values non-negative for every observed size.
    pub fn bounded(
        observed_width: f64,
        observed_height: f64,
        min_width: f64,
        min_height: f64,
        margin: Margins,
    ) -> Self {
        let width = observed_width.max(min_width);
        let height = observed_height.max(min_height);

        Dimensions {
            width,
            height,
            bounded_width: width - margin.horizontal(),
            bounded_height: height - margin.vertical(),
            margin,
        }
    }
}
