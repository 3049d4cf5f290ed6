use crate::models::{Menu, Pagination};

use super::Database;

/// One page of menus and the metadata describing it.
pub fn paginate(db: &Database, page: u64, limit: u64) -> (Vec<Menu>, Pagination) {
    let pagination = Pagination::new(db.menus.len(), page, limit);
    (pagination.slice(&db.menus).to_vec(), pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(count: u64) -> Database {
        Database::with_menus(
            (1..=count)
                .map(|id| Menu::new(id, format!("Menu {id}"), format!("/images/menus/{id}.jpg"), 10))
                .collect(),
        )
    }

    #[test]
    fn first_page_uses_limit() {
        let (menus, pagination) = paginate(&db(20), 1, 8);
        assert_eq!(menus.len(), 8);
        assert_eq!(menus[0].id, 1);
        assert_eq!(pagination.total_pages, 3);
        assert!(!pagination.is_last_page);
    }

    #[test]
    fn last_page_is_partial() {
        let (menus, pagination) = paginate(&db(20), 3, 8);
        let ids: Vec<u64> = menus.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![17, 18, 19, 20]);
        assert!(pagination.is_last_page);
    }

    #[test]
    fn page_past_end_is_empty() {
        let (menus, _) = paginate(&db(5), 4, 2);
        assert!(menus.is_empty());
    }
}
