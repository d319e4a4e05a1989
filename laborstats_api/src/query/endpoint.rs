//! Endpoint construction: `<base>/get/<resource>[/<key>/<value>]*`.

use url::Url;

use super::filters::QueryFilters;

/// Production host of the Sweat & Toil API.
pub const DEFAULT_BASE_URL: &str = "https://data.dol.gov";

/// Fixed path prefix shared by every resource.
pub const API_PATH: &str = "get";

/// Builds the request URL for `resource_path` under `base`.
///
/// Filters are appended as `/<key>/<value>` pairs in key order, so identical
/// inputs always produce identical URLs. Filters with an empty value are skipped. Values are pushed as single path
/// segments and percent-encoded by [`Url`] where needed.
///
/// A `base` that cannot carry a path is returned unchanged; [`crate::Client`]
/// refuses such bases when it is built.
pub fn build_endpoint(base: &Url, resource_path: &str, filters: &QueryFilters) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(API_PATH).push(resource_path);
        for (key, value) in filters.iter().filter(|(_, value)| !value.is_empty()) {
            segments.push(key.as_str()).push(value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterKey, SortDirection};

    fn default_base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn endpoint_without_filters() {
        let url = build_endpoint(&default_base(), "myPath", &QueryFilters::new());
        insta::assert_snapshot!(url.as_str(), @"https://data.dol.gov/get/myPath");
    }

    #[test]
    fn endpoint_with_limit() {
        let mut filters = QueryFilters::new();
        filters.add_filter("limit", "10").unwrap();
        let url = build_endpoint(&default_base(), "myPath", &filters);
        insta::assert_snapshot!(url.as_str(), @"https://data.dol.gov/get/myPath/limit/10");
    }

    #[test]
    fn endpoint_segments_are_sorted() {
        let filters = QueryFilters::new()
            .with_filter(FilterKey::StartDate, "2012-01-01")
            .with_order(SortDirection::Desc)
            .with_limit(5)
            .with_filter(FilterKey::EndDate, "2014-01-01");
        let url = build_endpoint(&default_base(), "childlabor_cty", &filters);
        insta::assert_snapshot!(
            url.as_str(),
            @"https://data.dol.gov/get/childlabor_cty/end_date/2014-01-01/limit/5/order/desc/start_date/2012-01-01"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();
        let url = build_endpoint(&base, "childlabor_reg", &QueryFilters::new().with_limit(1));
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/get/childlabor_reg/limit/1");
    }

    #[test]
    fn endpoint_skips_empty_values() {
        let filters = QueryFilters::new()
            .with_filter(FilterKey::Limit, "")
            .with_order(SortDirection::Desc);
        let url = build_endpoint(&default_base(), "childlabor_goo", &filters);
        insta::assert_snapshot!(url.as_str(), @"https://data.dol.gov/get/childlabor_goo/order/desc");
    }

    #[test]
    fn endpoint_escapes_separators_in_values() {
        let filters = QueryFilters::new().with_filter(FilterKey::DateColumn, "a/b");
        let url = build_endpoint(&default_base(), "childlabor_sta", &filters);
        assert_eq!(url.path(), "/get/childlabor_sta/date_column/a%2Fb");
    }
}
