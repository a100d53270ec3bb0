//! Equation / triangle view toggle.

/// Which layout the equation display uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Full-width `V = I × R` equation
    #[default]
    Equation,
    /// Compact mnemonic triangle (V on top, I and R below)
    Triangle,
}

impl ViewMode {
    /// Return the other view.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Equation => ViewMode::Triangle,
            ViewMode::Triangle => ViewMode::Equation,
        }
    }

    /// Flip the view in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Check if the triangle view is active.
    pub fn is_triangle(&self) -> bool {
        matches!(self, ViewMode::Triangle)
    }

    /// Label for the toggle button, naming the view it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ViewMode::Equation => "Switch to Triangle View",
            ViewMode::Triangle => "Switch to V=IR View",
        }
    }
}
