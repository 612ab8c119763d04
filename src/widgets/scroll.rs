//! Scroll-triggered visibility (back-to-top control)

use crate::config::DEFAULT_SCROLL_THRESHOLD;

/// `visible` is recomputed from every scroll offset; strictly greater than the threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollVisibility {
    threshold: f64,
    visible: bool,
}

impl ScrollVisibility {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true when visibility flipped
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
