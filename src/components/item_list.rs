//! Item List Component
//!
//! Renders the whole inventory as cards, or an empty-state message. Each
//! card carries its own delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Item;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <section class="posts-list">
            <Show
                when=move || !store.items().get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p class="empty-state-text">"No hay productos en el inventario"</p>
                    </div>
                }
            >
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </Show>
        </section>
    }
}

#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = item.id;

    let delete = Callback::new(move |_: ()| {
        let token = ctx.begin_write();
        ctx.begin_request();
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => match ctx.commit_remove(token, id) {
                    Ok(()) => ctx.notify_success("Producto eliminado"),
                    Err(_) => {
                        web_sys::console::warn_1(&"[LIST] stale write, delete discarded".into());
                        ctx.notify_error("La operación fue descartada por un cambio más reciente");
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("[LIST] delete failed: {err}").into());
                    ctx.notify_error("Error al eliminar");
                }
            }
            ctx.end_request();
        });
    });

    view! {
        <article class="post-item">
            <div class="post-header">
                <h3 class="post-title">{item.title.clone()}</h3>
                <span class="post-id">"ID: " {item.id}</span>
            </div>

            <div class="post-details">
                <div class="detail-item">
                    <span class="detail-label">"Categoría"</span>
                    <span class="detail-value">
                        <span class="category-badge">{item.category.clone()}</span>
                    </span>
                </div>
                <div class="detail-item">
                    <span class="detail-label">"Ubicación"</span>
                    <span class="detail-value">{item.location.clone()}</span>
                </div>
                <div class="detail-item">
                    <span class="detail-label">"Cantidad"</span>
                    <span class="detail-value">{format!("{} unidades", item.quantity)}</span>
                </div>
                <div class="detail-item">
                    <span class="detail-label">"Precio"</span>
                    <span class="detail-value">{format!("${}", item.price)}</span>
                </div>
            </div>

            <div class="post-footer">
                <span class="post-stock">"Stock: " <strong>{item.stock_label()}</strong></span>
                <DeleteConfirmButton on_confirm=delete />
            </div>
        </article>
    }
}
