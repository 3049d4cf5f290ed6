use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub is_last_page: bool,
}

impl Pagination {
    /// `page` is 1-based; `limit` must be non-zero.
    pub fn new(total: usize, page: u64, limit: u64) -> Self {
        let total_pages = (total as u64).div_ceil(limit);
        Self {
            page,
            limit,
            total_pages,
            is_last_page: page == total_pages,
        }
    }

    /// Half-open index range `[(page-1)*limit, page*limit)` clipped to `total`.
    pub fn window(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page.saturating_sub(1).saturating_mul(self.limit)) as usize;
        let end = start.saturating_add(self.limit as usize);
        start.min(total)..end.min(total)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.window(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(n: u64, l: u64, p: u64) -> usize {
        let remaining = n as i64 - ((p as i64 - 1) * l as i64);
        remaining.clamp(0, l as i64) as usize
    }

    #[test]
    fn page_sizes_match_formula() {
        let items: Vec<u64> = (0..21).collect();
        for limit in 1..=10 {
            for page in 1..=25 {
                let p = Pagination::new(items.len(), page, limit);
                assert_eq!(
                    p.slice(&items).len(),
                    expected_len(21, limit, page),
                    "limit={limit} page={page}"
                );
            }
        }
    }

    #[test]
    fn last_page_flag() {
        let p = Pagination::new(17, 3, 8);
        assert_eq!(p.total_pages, 3);
        assert!(p.is_last_page);

        let p = Pagination::new(17, 2, 8);
        assert!(!p.is_last_page);

        // Past the end is not the last page.
        let p = Pagination::new(17, 4, 8);
        assert!(!p.is_last_page);
    }

    #[test]
    fn second_page_window() {
        let items: Vec<u64> = (1..=10).collect();
        let p = Pagination::new(items.len(), 2, 4);
        assert_eq!(p.slice(&items), &[5, 6, 7, 8]);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let p = Pagination::new(0, 1, 8);
        assert_eq!(p.total_pages, 0);
        assert!(!p.is_last_page);
        assert!(p.slice::<u8>(&[]).is_empty());
    }
}
