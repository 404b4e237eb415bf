//! Delete Confirm Button Component
//!
//! Inline delete confirmation. Deleting takes two clicks; declining is a
//! pure no-op with no network call.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (arming, set_arming) = signal(false);

    view! {
        <Show
            when=move || arming.get()
            fallback=move || view! {
                <button class="btn btn-delete" on:click=move |_| set_arming.set(true)>
                    "Eliminar"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"¿Eliminar este producto?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_arming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Sí"
                </button>
                <button class="cancel-btn" on:click=move |_| set_arming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
