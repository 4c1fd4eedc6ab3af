//! Offset/pageSize pagination with continuation links

use axum::http::Uri;
use url::form_urlencoded;

use super::filter::PredicateMap;
use crate::error::{MetadexError, Result};
use crate::models::{Metadata, ResultPage};

pub const OFFSET_PARAMETER: &str = "offset";
pub const PAGE_SIZE_PARAMETER: &str = "pageSize";

pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parsed pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    pub offset: usize,
    pub page_size: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse offset/pageSize from the request query, applying defaults for
/// absent parameters
pub fn parse_paging(query: &PredicateMap) -> Result<PageParams> {
    let mut params = PageParams::default();

    if let Some(raw) = first_value(query, OFFSET_PARAMETER) {
        let offset: i64 = raw
            .parse()
            .map_err(|_| MetadexError::InvalidPaging("offset must be numeric".to_string()))?;
        if offset < 0 {
            return Err(MetadexError::InvalidPaging(
                "offset must be greater than or equal to 0".to_string(),
            ));
        }
        params.offset = offset as usize;
    }

    if let Some(raw) = first_value(query, PAGE_SIZE_PARAMETER) {
        let page_size: i64 = raw
            .parse()
            .map_err(|_| MetadexError::InvalidPaging("pageSize must be numeric".to_string()))?;
        if page_size < 1 {
            return Err(MetadexError::InvalidPaging(
                "pageSize must be greater than 0".to_string(),
            ));
        }
        params.page_size = page_size as usize;
    }

    Ok(params)
}

fn first_value<'a>(query: &'a PredicateMap, key: &str) -> Option<&'a str> {
    query
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// Slice one page out of `results` and build the continuation link.
///
/// Offsets past the end produce an empty page, not an error. The
/// continuation link is empty when the page reaches the end of the results.
pub fn page_results(
    results: Vec<Metadata>,
    offset: usize,
    page_size: usize,
    request_uri: &Uri,
) -> ResultPage {
    let total = results.len();
    let begin = offset.min(total);
    let end = offset.saturating_add(page_size).min(total);

    let next_link = if end < total {
        next_link(request_uri, end, page_size)
    } else {
        String::new()
    };

    let resources = results.into_iter().skip(begin).take(end - begin).collect();
    ResultPage {
        resources,
        next_link,
    }
}

/// Re-encode the request query with the continuation offset and page size
fn next_link(request_uri: &Uri, offset: usize, page_size: usize) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(raw) = request_uri.query() {
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key != OFFSET_PARAMETER && key != PAGE_SIZE_PARAMETER {
                serializer.append_pair(&key, &value);
            }
        }
    }
    serializer.append_pair(OFFSET_PARAMETER, &offset.to_string());
    serializer.append_pair(PAGE_SIZE_PARAMETER, &page_size.to_string());
    let query = serializer.finish();

    match request_uri.authority() {
        Some(authority) => {
            let scheme = request_uri.scheme_str().unwrap_or("http");
            format!("{}://{}{}?{}", scheme, authority, request_uri.path(), query)
        }
        None => format!("{}?{}", request_uri.path(), query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Maintainer;
    use url::Url;
    use uuid::Uuid;

    fn record(title: &str) -> Metadata {
        Metadata {
            id: Uuid::new_v4(),
            title: title.to_string(),
            version: "1.0.0".to_string(),
            maintainers: vec![Maintainer {
                name: "someone".to_string(),
                email: "someone@example.com".to_string(),
            }],
            company: "Acme".to_string(),
            website: Url::parse("https://example.com").unwrap(),
            source: Url::parse("https://github.com/example/app").unwrap(),
            license: "MIT".to_string(),
            description: "an app".to_string(),
        }
    }

    fn three_records() -> Vec<Metadata> {
        vec![record("r0"), record("r1"), record("r2")]
    }

    fn query(pairs: &[(&str, &str)]) -> PredicateMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect()
    }

    #[test]
    fn test_parse_paging_defaults() {
        let params = parse_paging(&PredicateMap::new()).unwrap();
        assert_eq!(params.offset, DEFAULT_OFFSET);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_parse_paging_explicit_values() {
        let params = parse_paging(&query(&[("offset", "23"), ("pageSize", "30")])).unwrap();
        assert_eq!(params.offset, 23);
        assert_eq!(params.page_size, 30);
    }

    #[test]
    fn test_parse_paging_non_numeric_offset() {
        let err = parse_paging(&query(&[("offset", "NotANumber")])).unwrap_err();
        assert_eq!(err.to_string(), "offset must be numeric");
    }

    #[test]
    fn test_parse_paging_negative_offset() {
        let err = parse_paging(&query(&[("offset", "-1")])).unwrap_err();
        assert_eq!(err.to_string(), "offset must be greater than or equal to 0");
    }

    #[test]
    fn test_parse_paging_non_numeric_page_size() {
        let err = parse_paging(&query(&[("pageSize", "NotANumber")])).unwrap_err();
        assert_eq!(err.to_string(), "pageSize must be numeric");
    }

    #[test]
    fn test_parse_paging_zero_page_size() {
        let err = parse_paging(&query(&[("pageSize", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "pageSize must be greater than 0");
    }

    #[test]
    fn test_first_page_links_to_next() {
        let uri: Uri = "/metadata?offset=0&pageSize=2".parse().unwrap();
        let page = page_results(three_records(), 0, 2, &uri);

        assert_eq!(page.resources.len(), 2);
        assert_eq!(page.resources[0].title, "r0");
        assert_eq!(page.resources[1].title, "r1");
        assert_eq!(page.next_link, "/metadata?offset=2&pageSize=2");
    }

    #[test]
    fn test_last_partial_page_has_no_next_link() {
        let uri: Uri = "/metadata".parse().unwrap();
        let page = page_results(three_records(), 2, 2, &uri);

        assert_eq!(page.resources.len(), 1);
        assert_eq!(page.resources[0].title, "r2");
        assert!(page.next_link.is_empty());
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let uri: Uri = "/metadata".parse().unwrap();
        let page = page_results(three_records(), 4, 2, &uri);

        assert!(page.resources.is_empty());
        assert!(page.next_link.is_empty());
    }

    #[test]
    fn test_page_size_larger_than_results() {
        let uri: Uri = "/metadata".parse().unwrap();
        let page = page_results(three_records(), 0, 20, &uri);

        assert_eq!(page.resources.len(), 3);
        assert!(page.next_link.is_empty());
    }

    #[test]
    fn test_next_link_keeps_filter_parameters() {
        let uri: Uri = "/metadata?company=Acme&offset=0&pageSize=1".parse().unwrap();
        let page = page_results(three_records(), 0, 1, &uri);

        assert_eq!(page.next_link, "/metadata?company=Acme&offset=1&pageSize=1");
    }

    #[test]
    fn test_next_link_preserves_authority_when_present() {
        let uri: Uri = "http://localhost:8080/metadata?pageSize=1".parse().unwrap();
        let page = page_results(three_records(), 0, 1, &uri);

        assert_eq!(
            page.next_link,
            "http://localhost:8080/metadata?offset=1&pageSize=1"
        );
    }
}
