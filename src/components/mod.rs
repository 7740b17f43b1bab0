//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod board_view;
mod column_view;
mod card_view;
mod card_form;
mod add_column_form;
mod notification_list;
mod delete_confirm_button;

pub use header::Header;
pub use board_view::BoardView;
pub use column_view::ColumnView;
pub use card_view::CardView;
pub use card_form::CardForm;
pub use add_column_form::AddColumnForm;
pub use notification_list::NotificationList;
pub use delete_confirm_button::DeleteConfirmButton;
