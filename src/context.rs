//! Application Context
//!
//! The controller handle provided via the Leptos Context API. Owns the
//! non-reactive bookkeeping around the store: the write-revision counter that
//! serializes overlapping mutations, the single banner hide timer, and the
//! in-flight request counter.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::Item;
use crate::store::{
    store_prepend_item, store_remove_item, store_replace_items, AppStateStoreFields, AppStore,
    Notice,
};

/// How long a banner stays visible.
const NOTICE_HIDE_MS: u32 = 3_000;

/// Revision captured when an operation is dispatched. A commit is accepted
/// only while the revision is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteToken(u64);

/// The state moved on while this operation's request was in flight.
#[derive(Debug, thiserror::Error)]
#[error("state changed since the operation started")]
pub struct StaleWrite;

/// App-wide controller handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Bumped on every committed mutation
    revision: StoredValue<u64>,
    /// Pending banner hide timer; replacing the handle drops and thereby
    /// cancels the previous timeout
    hide_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            revision: StoredValue::new(0),
            hide_timer: StoredValue::new_local(None),
        }
    }

    // ========================
    // Serialized mutations
    // ========================

    /// Capture the current revision before suspending at a network call.
    pub fn begin_write(&self) -> WriteToken {
        WriteToken(self.revision.get_value())
    }

    fn accept(&self, token: WriteToken) -> Result<(), StaleWrite> {
        if self.revision.get_value() != token.0 {
            return Err(StaleWrite);
        }
        self.revision.update_value(|r| *r += 1);
        Ok(())
    }

    /// Prepend a newly created item, unless the token went stale.
    pub fn commit_add(&self, token: WriteToken, item: Item) -> Result<(), StaleWrite> {
        self.accept(token)?;
        store_prepend_item(&self.store, item);
        Ok(())
    }

    /// Remove an item by id, unless the token went stale.
    pub fn commit_remove(&self, token: WriteToken, item_id: i64) -> Result<(), StaleWrite> {
        self.accept(token)?;
        store_remove_item(&self.store, item_id);
        Ok(())
    }

    /// Replace the whole list, unless the token went stale.
    pub fn commit_replace(&self, token: WriteToken, items: Vec<Item>) -> Result<(), StaleWrite> {
        self.accept(token)?;
        store_replace_items(&self.store, items);
        Ok(())
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify_success(&self, text: &str) {
        self.notify(Notice::success(text));
    }

    pub fn notify_error(&self, text: &str) {
        self.notify(Notice::error(text));
    }

    fn notify(&self, notice: Notice) {
        let store = self.store;
        store.notice().set(Some(notice));
        let timer = Timeout::new(NOTICE_HIDE_MS, move || store.notice().set(None));
        self.hide_timer.set_value(Some(timer));
    }

    // ========================
    // Loading indicator
    // ========================

    pub fn begin_request(&self) {
        self.store.pending_requests().update(|n| *n += 1);
    }

    pub fn end_request(&self) {
        self.store.pending_requests().update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_loading(&self) -> bool {
        self.store.pending_requests().get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;

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

    fn ids(ctx: &AppContext) -> Vec<i64> {
        ctx.store.items().get_untracked().iter().map(|i| i.id).collect()
    }

    #[test]
    fn sequential_commits_all_apply() {
        let ctx = AppContext::new(AppStore::new(AppState::default()));
        ctx.commit_add(ctx.begin_write(), item(1)).unwrap();
        ctx.commit_add(ctx.begin_write(), item(2)).unwrap();
        assert_eq!(ids(&ctx), vec![2, 1]);
    }

    #[test]
    fn overlapping_commit_with_stale_token_is_rejected() {
        let ctx = AppContext::new(AppStore::new(AppState::default()));
        let first = ctx.begin_write();
        let second = ctx.begin_write();
        ctx.commit_add(first, item(1)).unwrap();
        assert!(ctx.commit_add(second, item(2)).is_err());
        assert_eq!(ids(&ctx), vec![1]);
    }

    #[test]
    fn replace_invalidates_an_earlier_token() {
        let ctx = AppContext::new(AppStore::new(AppState::default()));
        let add = ctx.begin_write();
        ctx.commit_replace(ctx.begin_write(), vec![item(7)]).unwrap();
        assert!(ctx.commit_add(add, item(1)).is_err());
        assert_eq!(ids(&ctx), vec![7]);
    }

    #[test]
    fn rejected_commit_leaves_revision_usable() {
        let ctx = AppContext::new(AppStore::new(AppState::default()));
        let stale = ctx.begin_write();
        ctx.commit_add(ctx.begin_write(), item(1)).unwrap();
        assert!(ctx.commit_remove(stale, 1).is_err());
        // A fresh token still commits.
        ctx.commit_remove(ctx.begin_write(), 1).unwrap();
        assert_eq!(ids(&ctx), Vec::<i64>::new());
    }

    #[test]
    fn request_counter_tracks_overlapping_requests() {
        let ctx = AppContext::new(AppStore::new(AppState::default()));
        assert!(!ctx.is_loading());
        ctx.begin_request();
        ctx.begin_request();
        ctx.end_request();
        assert!(ctx.is_loading());
        ctx.end_request();
        assert!(!ctx.is_loading());
    }
}
