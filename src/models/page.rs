use serde::{Deserialize, Serialize};

use super::record::Metadata;

/// One page of filtered results plus a continuation reference
///
/// `next_link` is empty when no further results remain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    pub resources: Vec<Metadata>,
    #[serde(rename = "nextLink")]
    pub next_link: String,
}

impl ResultPage {
    pub fn new(resources: Vec<Metadata>, next_link: impl Into<String>) -> Self {
        Self {
            resources,
            next_link: next_link.into(),
        }
    }

    /// Whether a continuation reference is present
    pub fn has_more(&self) -> bool {
        !self.next_link.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_link_serialized_name() {
        let page = ResultPage::new(Vec::new(), "/metadata?offset=2&pageSize=2");
        let encoded = serde_json::to_string(&page).unwrap();
        assert!(encoded.contains("\"nextLink\""));
        assert!(page.has_more());
    }

    #[test]
    fn test_empty_page_has_no_more() {
        assert!(!ResultPage::default().has_more());
    }
}
