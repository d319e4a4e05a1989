//! Shared query vocabulary: [`FilterKey`] and [`SortDirection`].

use std::str::FromStr;

use crate::Error;

/// A filter the API recognises as a `/<key>/<value>` path segment pair.
///
/// Variants are declared in lexicographic order of their wire names so the
/// derived `Ord` matches the order segments are written into an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterKey {
    /// Column the date range applies to. Older API revisions only.
    DateColumn,
    /// Upper bound of the date range.
    EndDate,
    /// Maximum number of rows returned.
    Limit,
    /// Sort direction of the result rows.
    Order,
    /// Lower bound of the date range.
    StartDate,
}

impl FilterKey {
    /// Every accepted filter, in endpoint order.
    pub const ALL: [FilterKey; 5] = [
        FilterKey::DateColumn,
        FilterKey::EndDate,
        FilterKey::Limit,
        FilterKey::Order,
        FilterKey::StartDate,
    ];

    /// The name used in the request path.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::DateColumn => "date_column",
            FilterKey::EndDate => "end_date",
            FilterKey::Limit => "limit",
            FilterKey::Order => "order",
            FilterKey::StartDate => "start_date",
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidFilter(s.to_string()))
    }
}

/// Sort order for API results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first). This is the default.
    #[default]
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keys_round_trip_through_names() {
        for key in FilterKey::ALL {
            assert_eq!(key.as_str().parse::<FilterKey>().unwrap(), key);
        }
    }

    #[test]
    fn filter_key_order_is_lexicographic() {
        let names: Vec<&str> = FilterKey::ALL.iter().map(FilterKey::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let mut keys = FilterKey::ALL.to_vec();
        keys.reverse();
        keys.sort();
        assert_eq!(keys, FilterKey::ALL.to_vec());
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = "not_a_filter".parse::<FilterKey>().unwrap_err();
        assert!(matches!(err, Error::InvalidFilter(name) if name == "not_a_filter"));
    }

    #[test]
    fn sort_direction_names() {
        assert_eq!(SortDirection::Asc.to_string(), "asc");
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }
}
