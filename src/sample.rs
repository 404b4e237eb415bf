//! Sample Data Derivation
//!
//! Turns records from the remote demo listing into displayable items for the
//! bulk load operation. The remote records only carry an id and a title, so
//! category and location are assigned cyclically by position and quantity and
//! price are filled with random placeholder values.

use crate::api::RemoteRecord;
use crate::models::Item;

/// How many remote records a bulk load keeps.
pub const SAMPLE_LIMIT: usize = 10;

/// Titles longer than this are cut off.
const TITLE_MAX_CHARS: usize = 50;

const CATEGORIES: [&str; 6] = [
    "Electrónica",
    "Muebles",
    "Herramientas",
    "Suministros",
    "Alimentos",
    "Otros",
];

const SHELVES: [&str; 6] = ["A1", "A2", "B1", "B2", "C1", "C2"];

/// Derive the replacement item set from the remote listing.
///
/// `rng` must yield uniform values in `[0, 1)`; the caller passes
/// `js_sys::Math::random` in the app and a deterministic closure in tests.
/// Quantities land in 1..=100 and prices in 5000..=54999.
pub fn derive_sample_items(records: &[RemoteRecord], rng: &mut dyn FnMut() -> f64) -> Vec<Item> {
    records
        .iter()
        .take(SAMPLE_LIMIT)
        .enumerate()
        .map(|(index, record)| Item {
            id: record.id,
            title: record.title.chars().take(TITLE_MAX_CHARS).collect(),
            category: CATEGORIES[index % CATEGORIES.len()].to_string(),
            quantity: (rng() * 100.0) as i32 + 1,
            price: f64::from((rng() * 50_000.0) as i32 + 5_000),
            location: format!("Estante {}", SHELVES[index % SHELVES.len()]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<RemoteRecord> {
        (0..count)
            .map(|i| RemoteRecord { id: i as i64 + 1, title: format!("registro {i}") })
            .collect()
    }

    #[test]
    fn keeps_at_most_ten_records() {
        let derived = derive_sample_items(&records(25), &mut || 0.5);
        assert_eq!(derived.len(), SAMPLE_LIMIT);
        let derived = derive_sample_items(&records(3), &mut || 0.5);
        assert_eq!(derived.len(), 3);
    }

    #[test]
    fn ids_and_titles_come_from_the_records() {
        let derived = derive_sample_items(&records(2), &mut || 0.5);
        assert_eq!(derived[0].id, 1);
        assert_eq!(derived[0].title, "registro 0");
        assert_eq!(derived[1].id, 2);
    }

    #[test]
    fn categories_and_shelves_cycle_by_position() {
        let derived = derive_sample_items(&records(10), &mut || 0.5);
        assert_eq!(derived[0].category, "Electrónica");
        assert_eq!(derived[5].category, "Otros");
        assert_eq!(derived[6].category, "Electrónica");
        assert_eq!(derived[9].category, "Suministros");
        assert_eq!(derived[0].location, "Estante A1");
        assert_eq!(derived[6].location, "Estante A1");
        assert_eq!(derived[9].location, "Estante B2");
    }

    #[test]
    fn long_titles_are_cut_at_fifty_chars() {
        let long = RemoteRecord { id: 1, title: "x".repeat(80) };
        let derived = derive_sample_items(&[long], &mut || 0.5);
        assert_eq!(derived[0].title.len(), 50);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let long = RemoteRecord { id: 1, title: "ñ".repeat(60) };
        let derived = derive_sample_items(&[long], &mut || 0.5);
        assert_eq!(derived[0].title.chars().count(), 50);
    }

    #[test]
    fn quantity_and_price_stay_in_range_at_rng_extremes() {
        let low = derive_sample_items(&records(1), &mut || 0.0);
        assert_eq!(low[0].quantity, 1);
        assert_eq!(low[0].price, 5_000.0);

        let high = derive_sample_items(&records(1), &mut || 0.999_999_9);
        assert_eq!(high[0].quantity, 100);
        assert_eq!(high[0].price, 54_999.0);
    }
}
