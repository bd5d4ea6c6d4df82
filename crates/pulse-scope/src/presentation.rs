//! # Presentation Filtering
//!
//! Last stage of the scoping pipeline: narrow the availability rows to the
//! ones actually rendered, without touching selection state. Free-text
//! search and the "show selected only" toggle compose with AND. Sorting and
//! pagination live here too — they are display concerns layered on top of
//! the merge output, never folded into it.

use serde::{Deserialize, Serialize};

use crate::availability::RegionAvailability;

/// Free-text search plus the selected-only toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationFilter {
    /// Case-insensitive substring matched against each row's label or
    /// region id. Empty matches everything.
    pub search: String,
    /// When set, rows that are not checked are dropped.
    pub selected_only: bool,
}

impl PresentationFilter {
    /// Assemble a filter.
    pub fn new(search: impl Into<String>, selected_only: bool) -> Self {
        Self {
            search: search.into(),
            selected_only,
        }
    }

    /// Whether a single row passes both filters.
    pub fn matches(&self, row: &RegionAvailability) -> bool {
        if self.selected_only && !row.checked {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        row.label.to_lowercase().contains(&needle)
            || row.region.as_str().to_lowercase().contains(&needle)
    }

    /// The rows passing both filters, in input order.
    ///
    /// Pure: the input is never mutated, and the result is always a subset
    /// of it. Selected-only with an empty selection yields an empty vector,
    /// which callers render as an empty state.
    pub fn apply(&self, rows: &[RegionAvailability]) -> Vec<RegionAvailability> {
        rows.iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect()
    }
}

/// Sort rows by label, ascending, case-insensitive, ties broken by region
/// id.
///
/// The tie-break makes the order fully deterministic even for duplicate
/// labels, so snapshot-style assertions stay stable.
pub fn sort_rows_by_label(rows: &mut [RegionAvailability]) {
    rows.sort_by_cached_key(|row| (row.label.to_lowercase(), row.region.clone()));
}

/// A 1-based page request. Number and size clamp to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    /// Default page size of the region tables.
    pub const DEFAULT_SIZE: usize = 25;

    /// A page request; zero `number` or `size` clamp to 1.
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }

    /// The first page at the default size.
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Rows per page.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            number: usize,
            size: usize,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.number, raw.size))
    }
}

/// One page of rows plus the totals paginators render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// The rows on this page, in input order.
    pub rows: Vec<RegionAvailability>,
    /// Rows across all pages.
    pub total_rows: usize,
    /// Pages at the requested size; zero when the input is empty.
    pub total_pages: usize,
    /// The request that produced this view.
    pub page: Page,
}

/// Slice one page out of the filtered rows.
///
/// A page past the end yields empty `rows` with the totals intact, which the
/// table renders as an empty page rather than an error.
pub fn paginate(rows: &[RegionAvailability], page: Page) -> PageView {
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(page.size());
    let start = (page.number() - 1).saturating_mul(page.size());
    let rows = if start >= total_rows {
        Vec::new()
    } else {
        let end = (start + page.size()).min(total_rows);
        rows[start..end].to_vec()
    };
    PageView {
        rows,
        total_rows,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::RegionId;

    fn row(code: &str, label: &str, count: usize, checked: bool) -> RegionAvailability {
        RegionAvailability {
            region: RegionId::new(code).unwrap(),
            label: label.to_string(),
            count,
            checked,
        }
    }

    fn sample_rows() -> Vec<RegionAvailability> {
        vec![
            row("us-ord", "Chicago, IL", 3, true),
            row("us-east", "Newark, NJ", 1, false),
            row("eu-west", "London, UK", 0, true),
        ]
    }

    // -- PresentationFilter --

    #[test]
    fn default_filter_passes_everything() {
        let rows = sample_rows();
        assert_eq!(PresentationFilter::default().apply(&rows), rows);
    }

    #[test]
    fn search_matches_label_case_insensitively() {
        let rows = sample_rows();
        let hits = PresentationFilter::new("CHI", false).apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "Chicago, IL");
    }

    #[test]
    fn search_matches_region_id_too() {
        let rows = sample_rows();
        let hits = PresentationFilter::new("eu-", false).apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region.as_str(), "eu-west");
    }

    #[test]
    fn search_without_hits_yields_empty() {
        let rows = sample_rows();
        assert!(PresentationFilter::new("tokyo", false).apply(&rows).is_empty());
    }

    #[test]
    fn selected_only_drops_unchecked_rows() {
        let rows = sample_rows();
        let hits = PresentationFilter::new("", true).apply(&rows);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.checked));
    }

    #[test]
    fn selected_only_with_no_selection_yields_empty_list() {
        let rows = vec![
            row("us-ord", "Chicago, IL", 3, false),
            row("us-east", "Newark, NJ", 1, false),
        ];
        let hits = PresentationFilter::new("", true).apply(&rows);
        assert_eq!(hits, Vec::new());
    }

    #[test]
    fn search_and_selected_only_compose_with_and() {
        let rows = sample_rows();
        // "n" matches Newark (unchecked) and London (checked)
        let hits = PresentationFilter::new("n", true).apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "London, UK");
    }

    #[test]
    fn apply_preserves_input_order_and_input() {
        let rows = sample_rows();
        let filter = PresentationFilter::new("", true);
        let hits = filter.apply(&rows);
        assert_eq!(hits[0].region.as_str(), "us-ord");
        assert_eq!(hits[1].region.as_str(), "eu-west");
        // input untouched
        assert_eq!(rows.len(), 3);
    }

    // -- sorting --

    #[test]
    fn sort_is_case_insensitive_ascending() {
        let mut rows = vec![
            row("us-sea", "seattle, WA", 0, false),
            row("us-ord", "Chicago, IL", 0, false),
            row("us-mia", "Miami, FL", 0, false),
        ];
        sort_rows_by_label(&mut rows);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Chicago, IL", "Miami, FL", "seattle, WA"]);
    }

    #[test]
    fn sort_breaks_label_ties_by_region_id() {
        let mut rows = vec![
            row("us-ord-2", "Chicago, IL", 0, false),
            row("us-ord", "Chicago, IL", 0, false),
        ];
        sort_rows_by_label(&mut rows);
        let ids: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(ids, vec!["us-ord", "us-ord-2"]);
    }

    #[test]
    fn sort_is_deterministic_across_input_orders() {
        let mut forward = sample_rows();
        let mut reversed: Vec<RegionAvailability> = sample_rows().into_iter().rev().collect();
        sort_rows_by_label(&mut forward);
        sort_rows_by_label(&mut reversed);
        assert_eq!(forward, reversed);
    }

    // -- pagination --

    #[test]
    fn paginate_slices_full_pages() {
        let rows = sample_rows();
        let view = paginate(&rows, Page::new(1, 2));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total_rows, 3);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows[0].region.as_str(), "us-ord");
    }

    #[test]
    fn paginate_last_page_is_partial() {
        let rows = sample_rows();
        let view = paginate(&rows, Page::new(2, 2));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].region.as_str(), "eu-west");
    }

    #[test]
    fn paginate_past_the_end_yields_empty_rows_with_totals() {
        let rows = sample_rows();
        let view = paginate(&rows, Page::new(9, 2));
        assert!(view.rows.is_empty());
        assert_eq!(view.total_rows, 3);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn paginate_empty_input() {
        let view = paginate(&[], Page::first());
        assert!(view.rows.is_empty());
        assert_eq!(view.total_rows, 0);
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn page_clamps_zero_to_one() {
        let page = Page::new(0, 0);
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), 1);
    }

    #[test]
    fn page_deserialize_clamps() {
        let page: Page = serde_json::from_str("{\"number\":0,\"size\":0}").unwrap();
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), 1);
    }
}
