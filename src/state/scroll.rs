//! Scroll position of the content area.

/// Vertical scroll offset for the content area, in rows from the top.
///
/// The renderer reports the content and viewport heights after each frame
/// via [`ContentScroll::set_bounds`]; key commands move the offset within
/// those bounds. The shell resets it whenever a new selection starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentScroll {
    offset: u16,
    max_offset: u16,
    viewport: u16,
}

impl ContentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    /// Rows visible in the content area on the last frame.
    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    /// Record the size of the last frame and clamp the offset to it.
    pub fn set_bounds(&mut self, content_rows: u16, viewport: u16) {
        self.viewport = viewport;
        self.max_offset = content_rows.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    /// Scroll by one viewport, keeping a row of overlap.
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_rows());
    }

    /// Back to the top. Bounds are kept until the next frame reports new ones.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn page_rows(&self) -> u16 {
        self.viewport.saturating_sub(1).max(1)
    }
}
