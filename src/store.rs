//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Kind of transient banner currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, auto-dismissing banner. At most one is visible at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current inventory, newest manual addition first
    pub items: Vec<Item>,
    /// Banner currently shown, if any
    pub notice: Option<Notice>,
    /// Requests in flight; the loading indicator shows while > 0
    pub pending_requests: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Prepend a newly created item to the store
pub fn store_prepend_item(store: &AppStore, item: Item) {
    store.items().write().insert(0, item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: i64) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Replace the whole item list in the store
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> Item {
        Item {
            id,
            title: format!("item {id}"),
            category: "Otros".into(),
            quantity: 1,
            price: 10.0,
            location: "Estante A1".into(),
        }
    }

    #[test]
    fn prepend_puts_new_items_first() {
        let store = AppStore::new(AppState::default());
        store_prepend_item(&store, item(1));
        store_prepend_item(&store, item(2));
        let ids: Vec<i64> = store.items().get_untracked().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let store = AppStore::new(AppState {
            items: vec![item(3), item(2), item(1)],
            ..Default::default()
        });
        store_remove_item(&store, 2);
        let ids: Vec<i64> = store.items().get_untracked().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn remove_of_unknown_id_changes_nothing() {
        let store = AppStore::new(AppState { items: vec![item(1)], ..Default::default() });
        store_remove_item(&store, 99);
        assert_eq!(store.items().get_untracked().len(), 1);
    }

    #[test]
    fn replace_discards_the_previous_list() {
        let store = AppStore::new(AppState { items: vec![item(1)], ..Default::default() });
        store_replace_items(&store, vec![item(7), item(8)]);
        let ids: Vec<i64> = store.items().get_untracked().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }
}
