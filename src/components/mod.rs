//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_form;
mod item_list;
mod message_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use message_banner::MessageBanner;
