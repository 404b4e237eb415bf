//! Message Banner Component
//!
//! The single transient notification slot. Showing a banner replaces
//! whatever was visible before; the context auto-hides it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{AppStateStoreFields, NoticeKind};

#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        {move || store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "message success",
                NoticeKind::Error => "message error",
            };
            view! { <div class=class role="status">{notice.text}</div> }
        })}
    }
}
