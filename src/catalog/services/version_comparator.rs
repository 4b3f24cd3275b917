use crate::catalog::domain::{Dimension, NONE_LABEL};
use std::cmp::Ordering;

/// VersionComparator - Total order over version-like strings
///
/// Versions are compared segment by segment on `.`; every segment is read as
/// an integer, with anything unparseable (or missing) counting as 0. The
/// `"None"` sentinel sorts after every other value.
pub struct VersionComparator;

impl VersionComparator {
    /// Compares two version strings.
    pub fn compare(a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        if a == NONE_LABEL {
            return Ordering::Greater;
        }
        if b == NONE_LABEL {
            return Ordering::Less;
        }

        let a_parts: Vec<u64> = a.split('.').map(Self::segment_value).collect();
        let b_parts: Vec<u64> = b.split('.').map(Self::segment_value).collect();
        let len = a_parts.len().max(b_parts.len());

        for i in 0..len {
            let a_val = a_parts.get(i).copied().unwrap_or(0);
            let b_val = b_parts.get(i).copied().unwrap_or(0);
            if a_val != b_val {
                return a_val.cmp(&b_val);
            }
        }
        Ordering::Equal
    }

    /// Compares Java versions, treating the legacy `1.N` form as `N`.
    pub fn compare_java(a: &str, b: &str) -> Ordering {
        Self::compare(Self::normalize_java(a), Self::normalize_java(b))
    }

    /// Picks the comparison appropriate for a dimension.
    pub fn compare_for(dimension: Dimension, a: &str, b: &str) -> Ordering {
        match dimension {
            Dimension::Java => Self::compare_java(a, b),
            _ => Self::compare(a, b),
        }
    }

    /// `"1.8"` -> `"8"`; anything else is returned unchanged.
    pub fn normalize_java(version: &str) -> &str {
        match version.strip_prefix("1.") {
            Some(rest) if rest.split('.').next().is_some_and(|m| m.parse::<u64>().is_ok()) => rest,
            _ => version,
        }
    }

    /// Sorts in place using the dimension's ordering.
    pub fn sort_for(dimension: Dimension, values: &mut [String]) {
        values.sort_by(|a, b| Self::compare_for(dimension, a, b));
    }

    fn segment_value(segment: &str) -> u64 {
        segment.trim().parse::<u64>().unwrap_or(0)
    }
}
