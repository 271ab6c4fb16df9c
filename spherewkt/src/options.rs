use serde::{Deserialize, Serialize};

/// How polygon rings are checked for closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RingPolicy {
    /// Rings are converted as given. An open ring is still implicitly closed by the loop it is converted into.
    #[default]
    PassThrough,
    /// Every ring must have at least 4 vertices and the last vertex must be equal to the first one.
    RequireClosed,
}

/// Options of the [`Decoder`](crate::Decoder) and [`Converter`](crate::Converter).
///
/// ```
/// use spherewkt::{DecoderOptions, RingPolicy};
///
/// let options = DecoderOptions::default()
///     .with_ring_policy(RingPolicy::RequireClosed)
///     .with_range_check(true);
/// assert!(options.check_ranges());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderOptions {
    ring_policy: RingPolicy,
    check_ranges: bool,
}

impl DecoderOptions {
    /// Sets the ring closure policy.
    pub fn with_ring_policy(mut self, ring_policy: RingPolicy) -> Self {
        self.ring_policy = ring_policy;
        self
    }

    /// Enables or disables rejection of longitudes outside `[-180, 180]` and latitudes outside `[-90, 90]`.
    ///
    /// Non-finite ordinates are rejected either way.
    pub fn with_range_check(mut self, check_ranges: bool) -> Self {
        self.check_ranges = check_ranges;
        self
    }

    /// Ring closure policy.
    pub fn ring_policy(&self) -> RingPolicy {
        self.ring_policy
    }

    /// Whether ordinate ranges are checked.
    pub fn check_ranges(&self) -> bool {
        self.check_ranges
    }
}
