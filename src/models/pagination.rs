//! Count-based pagination for the book list

use serde::{Deserialize, Serialize};

/// Books shown per list page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A resolved, in-range page of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: i64,
    pub offset: i64,
    pub limit: i64,
    pub page_count: i64,
}

/// Number of pages needed to show `total_count` rows, `page_size` at a time
pub fn page_count(total_count: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    let total_count = total_count.max(0);
    total_count / page_size + i64::from(total_count % page_size != 0)
}

/// Resolve `requested_page` against a list of `total_count` rows.
///
/// Returns `None` when the page lies outside `1..=page_count`, which includes
/// every page of an empty list.
pub fn paginate(total_count: i64, page_size: i64, requested_page: i64) -> Option<Page> {
    let page_count = page_count(total_count, page_size);
    if requested_page < 1 || requested_page > page_count {
        return None;
    }
    Some(Page {
        number: requested_page,
        offset: (requested_page - 1) * page_size,
        limit: page_size,
        page_count,
    })
}

/// `?pageNum=` query string of the list page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "pageNum")]
    pub page_num: Option<String>,
}

impl PageQuery {
    /// Requested page number, defaulting to 1.
    ///
    /// `None` means the value was present but not an integer.
    pub fn requested_page(&self) -> Option<i64> {
        match &self.page_num {
            None => Some(1),
            Some(raw) => raw.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn twenty_five_rows_make_three_pages() {
        let page = paginate(25, 10, 3).unwrap();
        assert_eq!(page.page_count, 3);
        assert_eq!(page.offset, 20);
        assert_eq!(page.limit, 10);
        assert_eq!(paginate(25, 10, 4), None);
    }

    #[test]
    fn pages_outside_range_are_rejected() {
        assert_eq!(paginate(25, 10, 0), None);
        assert_eq!(paginate(25, 10, -1), None);
        assert_eq!(paginate(0, 10, 1), None);
    }

    #[test]
    fn offsets_grow_with_page_number() {
        let offsets: Vec<i64> = (1..=page_count(95, 10))
            .map(|n| paginate(95, 10, n).unwrap().offset)
            .collect();
        assert_eq!(offsets, (0..10).map(|i| i * 10).collect::<Vec<_>>());
    }

    #[test]
    fn page_count_matches_ceiling_for_many_sizes() {
        for total in 0..60 {
            for size in 1..12 {
                let expected = (total as f64 / size as f64).ceil() as i64;
                assert_eq!(page_count(total, size), expected, "{total}/{size}");
                assert!(paginate(total, size, expected + 1).is_none());
            }
        }
    }

    #[test]
    fn page_query_defaults_to_first_page() {
        assert_eq!(PageQuery::default().requested_page(), Some(1));
        let query = PageQuery {
            page_num: Some("2".to_string()),
        };
        assert_eq!(query.requested_page(), Some(2));
        let query = PageQuery {
            page_num: Some("two".to_string()),
        };
        assert_eq!(query.requested_page(), None);
    }
}
