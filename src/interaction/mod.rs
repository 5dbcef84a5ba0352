use serde::{Deserialize, Serialize};

/// Tooltip visibility plus the anchor it should be drawn at.
///
/// Each chart instance owns one; there is no shared tooltip state between
/// charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState<T> {
    data: Option<T>,
    left: f64,
    top: f64,
}

impl<T> Default for TooltipState<T> {
    fn default() -> Self {
        Self {
            data: None,
            left: 0.0,
            top: 0.0,
        }
    }
}

impl<T> TooltipState<T> {
    pub fn show(&mut self, data: T, left: f64, top: f64) {
        self.data = Some(data);
        self.left = left;
        self.top = top;
    }

    /// Hides the tooltip and resets its anchor.
    pub fn hide(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.data.is_some()
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }
}

/// Pointer event fed to a chart by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}
