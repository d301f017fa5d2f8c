//! Navbar show/hide decision from sampled vertical scroll offsets.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Shown,
    Hidden,
}

impl NavVisibility {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Shown => "navbar--shown",
            Self::Hidden => "navbar--hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    last_y: f64,
    threshold: f64,
}

impl ScrollTracker {
    pub fn new(initial_y: f64, threshold: f64) -> Self {
        Self {
            last_y: initial_y,
            threshold,
        }
    }

    /// Hide while moving down past the threshold; show on any other sample.
    pub fn sample(&mut self, y: f64) -> NavVisibility {
        let visibility = if y > self.last_y && y > self.threshold {
            NavVisibility::Hidden
        } else {
            NavVisibility::Shown
        };
        self.last_y = y;
        visibility
    }
}
