//! Inventario App
//!
//! Main application component: owns the store and controller context, the
//! bulk-load action, and the page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ItemForm, ItemList, MessageBanner};
use crate::context::AppContext;
use crate::sample::derive_sample_items;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    let ctx = AppContext::new(store);
    provide_context(ctx);

    let load_samples = move |_| {
        let token = ctx.begin_write();
        ctx.begin_request();
        spawn_local(async move {
            match api::fetch_records().await {
                Ok(records) => {
                    let items = derive_sample_items(&records, &mut || js_sys::Math::random());
                    web_sys::console::log_1(
                        &format!("[APP] derived {} sample items", items.len()).into(),
                    );
                    match ctx.commit_replace(token, items) {
                        Ok(()) => ctx.notify_success("Datos cargados"),
                        Err(_) => {
                            web_sys::console::warn_1(&"[APP] stale write, load discarded".into());
                            ctx.notify_error("La operación fue descartada por un cambio más reciente");
                        }
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] bulk load failed: {err}").into());
                    ctx.notify_error("Error al cargar datos");
                }
            }
            ctx.end_request();
        });
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Inventario"</h1>
                <button class="btn btn-load" on:click=load_samples>
                    "Cargar datos de ejemplo"
                </button>
            </header>

            <MessageBanner />

            <Show when=move || ctx.is_loading()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <ItemForm />
            <ItemList />
        </div>
    }
}
