//! Types for transcript retrieval.

use serde::{Deserialize, Serialize};

/// One timed unit of caption text.
///
/// `start` and `duration` are expressed in seconds from the beginning of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_deserializes_from_upstream_shape() {
        let segment: Segment =
            serde_json::from_value(json!({"text": "Hello", "start": 0.5, "duration": 1.25}))
                .unwrap();

        assert_eq!(segment, Segment::new("Hello", 0.5, 1.25));
    }
}
