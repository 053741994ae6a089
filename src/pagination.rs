use serde::{Deserialize, Serialize};

/// Hard cap on page size, applied regardless of what the caller asks for.
pub const MAX_PAGE_SIZE: u64 = 100;

const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: default_page(), limit: default_limit() }
    }
}

impl PageParams {
    /// 1-indexed page number.
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
}

impl PageInfo {
    pub fn new(params: &PageParams, total_items: u64) -> Self {
        let items_per_page = params.limit();
        Self {
            current_page: params.page(),
            total_pages: total_items.div_ceil(items_per_page),
            total_items,
            items_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_limit_to_maximum() {
        let params = PageParams { page: 1, limit: 500 };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);

        let params = PageParams { page: 0, limit: 0 };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let params: PageParams = serde_json::from_str("{}").expect("empty params");
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PageParams { page: 2, limit: 20 };
        let info = PageInfo::new(&params, 41);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_items, 41);
        assert_eq!(info.items_per_page, 20);
        assert_eq!(info.current_page, 2);
    }

    #[test]
    fn envelope_uses_client_facing_field_names() {
        let info = PageInfo::new(&PageParams::default(), 5);
        let value = serde_json::to_value(&info).expect("serializes");
        assert!(value.get("currentPage").is_some());
        assert!(value.get("totalPages").is_some());
        assert!(value.get("totalItems").is_some());
        assert!(value.get("itemsPerPage").is_some());
    }
}
