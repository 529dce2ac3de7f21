use crate::gesture::TouchEvent;

pub const DOUBLE_TAP_DELAY_MS: i64 = 300;
pub const DOUBLE_TAP_RADIUS: f64 = 20.0;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TapThresholds {
    pub delay_ms: i64,
    pub radius: f64,
}

impl Default for TapThresholds {
    fn default() -> Self {
        TapThresholds {
            delay_ms: DOUBLE_TAP_DELAY_MS,
            radius: DOUBLE_TAP_RADIUS,
        }
    }
}

/// Flags a touch as a double tap when it lands close to, and soon after, the touch before it.
#[derive(Debug, Default, Clone)]
pub struct TapClassifier {
    thresholds: TapThresholds,
    last_touch: Option<TouchEvent>,
}

impl TapClassifier {
    pub fn new(thresholds: TapThresholds) -> TapClassifier {
        TapClassifier {
            thresholds,
            last_touch: None,
        }
    }

    pub fn thresholds(&self) -> TapThresholds {
        self.thresholds
    }

    pub fn last_touch(&self) -> Option<TouchEvent> {
        self.last_touch
    }

    /// Classifies `current` against the previous touch, then remembers it. The previous touch is
    /// replaced even after a double tap, so a third quick tap pairs with the second.
    pub fn classify(&mut self, current: TouchEvent) -> bool {
        let is_double_tap = match self.last_touch {
            Some(last) => {
                current.millis_since(&last) < self.thresholds.delay_ms
                    && last.distance(&current) < self.thresholds.radius
            }
            None => false,
        };

        self.last_touch = Some(current);

        is_double_tap
    }

    pub fn reset(&mut self) {
        self.last_touch = None;
    }
}
