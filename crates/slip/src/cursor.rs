//! Page geometry and the vertical write cursor

/// Fixed page dimensions and margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    /// Baseline of the first line on every page
    pub top_offset: f64,
    /// Space kept free above the bottom edge
    pub bottom_reserve: f64,
    /// Footer text baseline, measured up from the bottom edge
    pub footer_offset: f64,
}

impl PageGeometry {
    pub fn content_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Right edge of the content area
    pub fn right_x(&self) -> f64 {
        self.width - self.margin_right
    }

    /// Lowest baseline that body content may use
    pub fn usable_bottom(&self) -> f64 {
        self.height - self.bottom_reserve
    }

    pub fn footer_y(&self) -> f64 {
        self.height - self.footer_offset
    }
}

/// Current vertical write position on a page
///
/// The position only moves down within a page. A new page puts it back at the
/// top offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    geometry: PageGeometry,
    y: f64,
}

impl LayoutCursor {
    /// Cursor at the top offset of a page
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            y: geometry.top_offset,
        }
    }

    /// Cursor at an arbitrary position
    pub fn at(geometry: PageGeometry, y: f64) -> Self {
        Self { geometry, y }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Move down by `by` millimetres and return the new position
    ///
    /// Negative amounts are treated as zero.
    pub fn advance(&mut self, by: f64) -> f64 {
        self.y += by.max(0.0);
        self.y
    }

    /// Whether `height` more millimetres fit above the bottom reserve
    pub fn fits(&self, height: f64) -> bool {
        self.y + height <= self.geometry.usable_bottom()
    }

    /// Whether nothing has been written below the top offset yet
    pub fn at_top(&self) -> bool {
        self.y <= self.geometry.top_offset
    }

    pub fn reset_to_top(&mut self) {
        self.y = self.geometry.top_offset;
    }
}
