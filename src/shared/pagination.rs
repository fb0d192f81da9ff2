use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Standard pagination query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageRequest {
    /// Page index (0-based, default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    pub page: i64,

    /// Number of items per page (default: 20, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub size: i64,

    /// Sort specification: `field` or `field,asc|desc` (default: `id,asc`)
    pub sort: Option<String>,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    /// Get clamped page size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Calculate SQL OFFSET from the 0-based page index
    pub fn offset(&self) -> i64 {
        self.page.max(0) * self.limit()
    }

    /// Build an `ORDER BY` fragment from the sort parameter.
    ///
    /// Only columns named in `sortable` are accepted; the fragment is
    /// interpolated into SQL, so it must never contain client input verbatim.
    pub fn order_by(&self, sortable: &[&str]) -> Result<String> {
        let spec = self.sort.as_deref().unwrap_or("id,asc");
        let mut parts = spec.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        let direction = parts.next().unwrap_or("asc").trim();

        if !sortable.contains(&field) {
            return Err(AppError::BadRequest(format!("Cannot sort by '{}'", field)));
        }
        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => "ASC",
            "desc" => "DESC",
            other => {
                return Err(AppError::BadRequest(format!(
                    "Invalid sort direction '{}'",
                    other
                )))
            }
        };

        Ok(format!("{} {}", field, direction))
    }
}

/// One window of a paged query plus the unfiltered record count.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    /// Number of pages at the given window size
    pub fn total_pages(&self, size: i64) -> i64 {
        if self.total_count == 0 {
            0
        } else {
            (self.total_count + size - 1) / size
        }
    }
}
