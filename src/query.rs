//! Filtering, search and pagination over the service collection
//!
//! `count` and `page` share the same [`ServiceQuery::matches`] predicate, so
//! the reported total can never drift from what pagination actually walks.

use serde::Serialize;

use crate::model::{Service, ServiceCategory, ServiceStatus};

/// Page size used when none (or zero) is requested
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter and pagination parameters for listing services
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceQuery {
    pub status: Option<ServiceStatus>,
    pub category: Option<ServiceCategory>,

    /// Case-insensitive substring of name or description
    pub search: Option<String>,

    /// 1-based page number
    pub page: usize,

    pub limit: usize,
}

impl Default for ServiceQuery {
    fn default() -> Self {
        Self {
            status: None,
            category: None,
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub services: Vec<Service>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl ServiceQuery {
    pub fn with_status(mut self, status: ServiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: ServiceCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Page number with 0 treated as the first page
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    /// Page size with 0 treated as the default
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.limit
        }
    }

    /// Whether a service passes every given criterion
    pub fn matches(&self, service: &Service) -> bool {
        if self.status.is_some_and(|status| service.status != status) {
            return false;
        }

        if self
            .category
            .is_some_and(|category| service.category != category)
        {
            return false;
        }

        match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                service.name.to_lowercase().contains(&term)
                    || service.description.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    /// Number of services matching the filters, ignoring pagination
    pub fn count(&self, services: &[Service]) -> usize {
        services.iter().filter(|s| self.matches(s)).count()
    }

    /// The requested page of matching services, in collection order
    ///
    /// A page past the end is empty.
    pub fn query(&self, services: &[Service]) -> Vec<Service> {
        let limit = self.effective_limit();
        let start = (self.effective_page() - 1).saturating_mul(limit);

        services
            .iter()
            .filter(|s| self.matches(s))
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Requested page together with totals
    pub fn paginate(&self, services: &[Service]) -> Page {
        let total = self.count(services);
        let limit = self.effective_limit();

        Page {
            services: self.query(services),
            pagination: Pagination {
                total,
                page: self.effective_page(),
                limit,
                total_pages: total.div_ceil(limit),
            },
        }
    }
}
