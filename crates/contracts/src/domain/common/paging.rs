use serde::{Deserialize, Serialize};

/// Paging block returned next to `items` by paged endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next: bool,
    pub has_previous: bool,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_items: u64,
}

/// `{ items, pageInfo }` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let json = r#"{
            "items": [1, 2, 3],
            "pageInfo": {"hasNext": true, "hasPrevious": false, "totalPages": 4, "currentPage": 0, "totalItems": 30}
        }"#;
        let page: Paged<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.page_info.has_next);
        assert_eq!(page.page_info.total_pages, 4);
    }

    #[test]
    fn test_missing_page_info() {
        let page: Paged<i32> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(page.page_info, PageInfo::default());
    }
}
