//! Business profile revenue range.

use serde::{Deserialize, Serialize};

/// The coarse annual revenue bracket an owner selects in their business profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueRange {
    /// Less than $250k.
    #[serde(rename = "under-250k")]
    Under250k,
    /// $250k to $500k.
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    /// $500k to $1M.
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    /// $1M to $2M.
    #[serde(rename = "1m-2m")]
    From1mTo2m,
    /// $2M to $5M.
    #[serde(rename = "2m-5m")]
    From2mTo5m,
    /// $5M and above.
    #[serde(rename = "5m-plus")]
    Over5m,
}

impl RevenueRange {
    /// Returns the wire name of the range (e.g. "500k-1m").
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueRange::Under250k => "under-250k",
            RevenueRange::From250kTo500k => "250k-500k",
            RevenueRange::From500kTo1m => "500k-1m",
            RevenueRange::From1mTo2m => "1m-2m",
            RevenueRange::From2mTo5m => "2m-5m",
            RevenueRange::Over5m => "5m-plus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_names() {
        for range in [
            RevenueRange::Under250k,
            RevenueRange::From250kTo500k,
            RevenueRange::From500kTo1m,
            RevenueRange::From1mTo2m,
            RevenueRange::From2mTo5m,
            RevenueRange::Over5m,
        ] {
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, format!("\"{}\"", range.as_str()));
        }
    }

    #[test]
    fn test_deserialize_range() {
        let range: RevenueRange = serde_json::from_str("\"1m-2m\"").unwrap();
        assert_eq!(range, RevenueRange::From1mTo2m);
    }

    #[test]
    fn test_unknown_range_rejected() {
        let result: Result<RevenueRange, _> = serde_json::from_str("\"10m-plus\"");
        assert!(result.is_err());
    }
}
