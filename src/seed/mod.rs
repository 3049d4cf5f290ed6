use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::db::Database;
use crate::models::Menu;

static DISHES: &[&str] = &[
    "Nasi Goreng",
    "Mie Goreng",
    "Sate Ayam",
    "Bakso",
    "Soto Ayam",
    "Rendang",
    "Gado-Gado",
    "Ayam Bakar",
    "Nasi Uduk",
    "Pempek",
    "Rawon",
    "Martabak",
    "Es Teh",
    "Es Jeruk",
    "Kopi Susu",
];

static STYLES: &[&str] = &[
    "Special", "Spicy", "Original", "Jumbo", "Komplit", "Pedas", "Manis", "Kampung",
];

/// Generate a dish name from a base dish and a style, e.g. "Bakso Jumbo".
fn random_menu_name(rng: &mut impl Rng) -> String {
    let dish = DISHES.choose(rng).unwrap_or(&"Nasi Goreng");
    let style = STYLES.choose(rng).unwrap_or(&"Original");
    format!("{} {}", dish, style)
}

/// `count` menus with ids `1..=count`, image paths and whole-thousand prices.
pub fn generate_menus(rng: &mut impl Rng, count: usize) -> Vec<Menu> {
    (1..=count as u64)
        .map(|id| {
            Menu::new(
                id,
                random_menu_name(rng),
                format!("/images/menus/{}.jpg", id),
                rng.gen_range(5..=60) * 1_000,
            )
        })
        .collect()
}

/// A fresh document: seeded menus, empty cart and orders.
pub fn seed_database(count: usize) -> Database {
    info!("Seeding {} menus...", count);
    Database::with_menus(generate_menus(&mut rand::thread_rng(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ids_are_sequential_from_one() {
        let menus = generate_menus(&mut StdRng::seed_from_u64(7), 12);
        let ids: Vec<u64> = menus.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn prices_are_positive_thousands() {
        for menu in generate_menus(&mut StdRng::seed_from_u64(1), 50) {
            assert!((5_000..=60_000).contains(&menu.price));
            assert_eq!(menu.price % 1_000, 0);
            assert_eq!(menu.image, format!("/images/menus/{}.jpg", menu.id));
        }
    }

    #[test]
    fn seeded_database_has_empty_cart_and_orders() {
        let db = seed_database(3);
        assert_eq!(db.menus.len(), 3);
        assert!(db.cart.is_empty());
        assert!(db.orders.is_empty());
    }
}
