use crate::core::config::PaginationConfig;
use crate::features::reports::dtos::{ReportFilterParams, ReportListItemDto, ReportQueryParams};
use crate::shared::constants::STATUS_FILTER_ALL;
use crate::shared::types::{Paginated, PaginationMeta};

/// Filtering and pagination for the report tables.
///
/// Everything here is pure: the same input always gives the same output and
/// the original order of the list is kept.
#[derive(Debug, Clone, Default)]
pub struct ReportAggregator {
    pagination: PaginationConfig,
}

impl ReportAggregator {
    pub fn new(pagination: PaginationConfig) -> Self {
        Self { pagination }
    }

    // ========================================================================
    // Filter
    // ========================================================================

    /// Keep reports matching both the status dropdown and the search box
    pub fn filter(
        &self,
        items: &[ReportListItemDto],
        params: &ReportFilterParams,
    ) -> Vec<ReportListItemDto> {
        let status = params.status_filter.trim().to_lowercase();
        let search = params.search_text.to_lowercase();

        items
            .iter()
            .filter(|item| Self::matches_status(item, &status))
            .filter(|item| Self::matches_search(item, &search))
            .cloned()
            .collect()
    }

    fn matches_status(item: &ReportListItemDto, status: &str) -> bool {
        status.is_empty()
            || status == STATUS_FILTER_ALL
            || item.status_name.trim().to_lowercase() == status
    }

    fn matches_search(item: &ReportListItemDto, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }

        [&item.owner_name, &item.category_name, &item.location_name]
            .iter()
            .any(|field| field.to_lowercase().contains(search))
    }

    // ========================================================================
    // Paginate
    // ========================================================================

    /// Cut one page out of an already filtered list.
    ///
    /// `page` is clamped into `[1, total_pages]`; an empty list still has one
    /// (empty) page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn paginate<T>(&self, items: Vec<T>, page_size: usize, page: usize) -> Paginated<T> {
        let pagination = PaginationMeta::new(page, page_size, items.len());

        let items = items
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.page_size)
            .collect();

        Paginated { items, pagination }
    }

    /// Filter then paginate, resolving the page size against configuration
    pub fn list(
        &self,
        items: &[ReportListItemDto],
        params: &ReportQueryParams,
    ) -> Paginated<ReportListItemDto> {
        let filtered = self.filter(items, &params.filter);
        let page_size = self.pagination.resolve(params.page_size);

        tracing::debug!(
            total = items.len(),
            matched = filtered.len(),
            page = params.page,
            page_size,
            "Report table filtered"
        );

        self.paginate(filtered, page_size, params.page)
    }
}
