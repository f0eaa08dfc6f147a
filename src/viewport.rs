//! Viewport intersection math.
//!
//! Pure geometry for the scroll-reveal effect: a widget counts as
//! visible when any part of its vertical span overlaps the scrolled
//! viewport.

/// The vertical extent of an element within the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Distance from the top of the content to the element's top edge.
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The currently visible window over the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Current scroll offset (top of the visible region).
    pub offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }

    pub fn bottom(&self) -> f64 {
        self.offset + self.height
    }
}

/// True iff any part of `span` lies inside `viewport`.
pub fn is_in_viewport(span: Span, viewport: Viewport) -> bool {
    span.bottom() > viewport.offset && span.top < viewport.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entirely_above_is_hidden() {
        let span = Span::new(0.0, 100.0);
        let viewport = Viewport::new(200.0, 600.0);
        assert!(!is_in_viewport(span, viewport));
    }

    #[test]
    fn test_entirely_below_is_hidden() {
        let span = Span::new(1000.0, 100.0);
        let viewport = Viewport::new(0.0, 600.0);
        assert!(!is_in_viewport(span, viewport));
    }

    #[test]
    fn test_partial_overlap_is_visible() {
        // Bottom half of the element pokes into the viewport
        let span = Span::new(150.0, 100.0);
        let viewport = Viewport::new(200.0, 600.0);
        assert!(is_in_viewport(span, viewport));
    }

    #[test]
    fn test_fully_contained_is_visible() {
        let span = Span::new(300.0, 50.0);
        let viewport = Viewport::new(200.0, 600.0);
        assert!(is_in_viewport(span, viewport));
    }

    #[test]
    fn test_touching_edge_is_hidden() {
        // Element bottom exactly at the viewport top: no overlap yet
        let span = Span::new(100.0, 100.0);
        let viewport = Viewport::new(200.0, 600.0);
        assert!(!is_in_viewport(span, viewport));
    }
}
