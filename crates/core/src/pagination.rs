//! Limit/offset clamping shared by list endpoints.

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on a single page.
pub const MAX_LIMIT: i64 = 200;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Page-size bounds for a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Page size when the caller does not pass `limit`.
    pub default: i64,
    /// Largest page a caller may request.
    pub max: i64,
}

impl PageLimits {
    /// Build bounds, keeping `max >= 1` and `1 <= default <= max`.
    pub fn new(default: i64, max: i64) -> Self {
        let max = max.max(1);
        Self {
            default: default.max(1).min(max),
            max,
        }
    }

    /// Clamp a requested limit to these bounds.
    pub fn clamp(&self, limit: Option<i64>) -> i64 {
        clamp_limit(limit, self.default, self.max)
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_LIMIT, MAX_LIMIT), 50);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(1000), DEFAULT_LIMIT, MAX_LIMIT), 200);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), DEFAULT_LIMIT, MAX_LIMIT), 1);
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIMIT, MAX_LIMIT), 1);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(30)), 30);
    }

    #[test]
    fn page_limits_default_matches_constants() {
        let limits = PageLimits::default();
        assert_eq!(limits.clamp(None), DEFAULT_LIMIT);
        assert_eq!(limits.clamp(Some(10_000)), MAX_LIMIT);
    }

    #[test]
    fn page_limits_keep_default_within_max() {
        let limits = PageLimits::new(500, 20);
        assert_eq!(limits, PageLimits { default: 20, max: 20 });
        assert_eq!(PageLimits::new(0, 0), PageLimits { default: 1, max: 1 });
    }
}
