//! Item Form Component
//!
//! Form for adding a new inventory item. Validation runs before any network
//! call; the item is committed locally only after the create request comes
//! back with a success status.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::ItemDraft;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let title_ref: NodeRef<html::Input> = NodeRef::new();

    let field_setter = move |setter: WriteSignal<String>| {
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            setter.set(input.value());
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = match ItemDraft::parse(
            title.get(),
            category.get(),
            &quantity.get(),
            &price.get(),
            location.get(),
        ) {
            Ok(draft) => draft,
            Err(_) => {
                ctx.notify_error("Todos los campos son obligatorios");
                return;
            }
        };

        let token = ctx.begin_write();
        ctx.begin_request();
        spawn_local(async move {
            match api::create_item(&draft).await {
                Ok(()) => {
                    let item = draft.into_item(js_sys::Date::now() as i64);
                    match ctx.commit_add(token, item) {
                        Ok(()) => {
                            set_title.set(String::new());
                            set_category.set(String::new());
                            set_quantity.set(String::new());
                            set_price.set(String::new());
                            set_location.set(String::new());
                            if let Some(input) = title_ref.get_untracked() {
                                let _ = input.focus();
                            }
                            ctx.notify_success("Producto agregado exitosamente");
                        }
                        Err(_) => {
                            web_sys::console::warn_1(&"[FORM] stale write, add discarded".into());
                            ctx.notify_error("La operación fue descartada por un cambio más reciente");
                        }
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] create failed: {err}").into());
                    ctx.notify_error("Error al agregar producto");
                }
            }
            ctx.end_request();
        });
    };

    view! {
        <form class="post-form" on:submit=submit>
            <div class="form-field">
                <label for="title">"Producto"</label>
                <input
                    id="title"
                    type="text"
                    node_ref=title_ref
                    prop:value=move || title.get()
                    on:input=field_setter(set_title)
                />
            </div>
            <div class="form-field">
                <label for="category">"Categoría"</label>
                <input
                    id="category"
                    type="text"
                    prop:value=move || category.get()
                    on:input=field_setter(set_category)
                />
            </div>
            <div class="form-field">
                <label for="quantity">"Cantidad"</label>
                <input
                    id="quantity"
                    type="number"
                    prop:value=move || quantity.get()
                    on:input=field_setter(set_quantity)
                />
            </div>
            <div class="form-field">
                <label for="price">"Precio"</label>
                <input
                    id="price"
                    type="number"
                    step="any"
                    prop:value=move || price.get()
                    on:input=field_setter(set_price)
                />
            </div>
            <div class="form-field">
                <label for="location">"Ubicación"</label>
                <input
                    id="location"
                    type="text"
                    prop:value=move || location.get()
                    on:input=field_setter(set_location)
                />
            </div>
            <button type="submit" class="btn btn-submit">"Agregar producto"</button>
        </form>
    }
}
