/// One page of search results plus the upstream total. The two are always
/// produced together so a page count can never disagree with the items it
/// was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> ResultSet<T> {
    pub fn empty() -> Self {
        Self { items: Vec::new(), total: 0 }
    }

    pub fn total_pages(&self, page_size: u64) -> u32 {
        total_pages(self.total, page_size)
    }
}

/// `ceil(total / page_size)`.
pub fn total_pages(total: u64, page_size: u64) -> u32 {
    assert!(page_size > 0);
    (total.div_ceil(page_size)).min(u32::MAX as u64) as u32
}

/// Gate for page-change requests. A rejected change issues no navigation and
/// therefore no fetch.
pub fn page_change_allowed(
    new_page: u32,
    current_page: u32,
    total_pages: u32,
    in_flight: bool,
) -> bool {
    new_page >= 1 && new_page <= total_pages && new_page != current_page && !in_flight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        // totalPages = 3 throughout
        assert!(!page_change_allowed(0, 1, 3, false));
        assert!(!page_change_allowed(4, 1, 3, false));
        assert!(page_change_allowed(3, 1, 3, false));
        assert!(page_change_allowed(2, 3, 3, false));
    }

    #[test]
    fn same_page_is_rejected() {
        assert!(!page_change_allowed(2, 2, 3, false));
    }

    #[test]
    fn in_flight_fetch_blocks_page_changes() {
        assert!(!page_change_allowed(2, 1, 3, true));
    }

    #[test]
    fn result_set_page_count_matches_free_function() {
        let set = ResultSet { items: vec![(); 12], total: 25 };
        assert_eq!(set.total_pages(12), 3);
    }
}
