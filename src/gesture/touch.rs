use serde::{Deserialize, Serialize};

/// A finger-down on the image surface.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TouchEvent {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: i64,
}

impl TouchEvent {
    pub fn new(x: f64, y: f64, timestamp_ms: i64) -> TouchEvent {
        TouchEvent { x, y, timestamp_ms }
    }

    pub fn distance(&self, other: &TouchEvent) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn millis_since(&self, earlier: &TouchEvent) -> i64 {
        self.timestamp_ms.saturating_sub(earlier.timestamp_ms)
    }
}
