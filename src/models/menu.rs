use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dish on the menu. Menus are owned by the seed data and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: u64,
    pub name: String,
    pub image: String,
    /// Whole currency units.
    pub price: i64,
    /// Any extra fields present in the document are carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Menu {
    pub fn new(id: u64, name: impl Into<String>, image: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            price,
            extra: Map::new(),
        }
    }
}

/// Linear scan by id.
pub fn find_menu(menus: &[Menu], id: u64) -> Option<&Menu> {
    menus.iter().find(|menu| menu.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = json!({
            "id": 3,
            "name": "Nasi Goreng",
            "image": "/images/menus/3.jpg",
            "price": 25000,
            "category": "rice"
        });
        let menu: Menu = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(menu.extra.get("category"), Some(&json!("rice")));
        assert_eq!(serde_json::to_value(&menu).unwrap(), raw);
    }

    #[test]
    fn find_menu_by_id() {
        let menus = vec![Menu::new(1, "A", "a.jpg", 10), Menu::new(2, "B", "b.jpg", 20)];
        assert_eq!(find_menu(&menus, 2).map(|m| m.price), Some(20));
        assert!(find_menu(&menus, 9).is_none());
    }
}
