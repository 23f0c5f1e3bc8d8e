use crate::domain::DomainError;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page selection for paged upstream collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Result<Self, DomainError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(DomainError::validation(format!(
                "page_size moet tussen 1 en {} liggen",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self { page, page_size })
    }

    /// Build from optional query values, applying defaults
    pub fn from_query(page: Option<u32>, page_size: Option<u32>) -> Result<Self, DomainError> {
        Self::new(page.unwrap_or(0), page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The same page size, `page` pages further
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Query pairs in the upstream naming
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::from_query(None, None).unwrap();
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.page_size(), 50);
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(Pagination::new(0, 0).is_err());
        assert!(Pagination::new(0, 101).is_err());
        assert!(Pagination::new(3, 1).is_ok());
        assert!(Pagination::new(3, 100).is_ok());
    }

    #[test]
    fn test_query_pairs_use_upstream_names() {
        let pairs = Pagination::new(2, 25).unwrap().query_pairs();
        assert_eq!(pairs[0], ("page", "2".to_string()));
        assert_eq!(pairs[1], ("pageSize", "25".to_string()));
    }
}
