//! UI Components
//!
//! Leptos components for the grocery list screen.

mod diagnostics;
mod feedback;
mod grocery_app;
mod grocery_list_view;
mod grocery_row;
mod upc_input;

pub use diagnostics::Diagnostics;
pub use feedback::{ErrorMessage, Spinner};
pub use grocery_app::GroceryApp;
pub use grocery_list_view::{ClearList, GroceryListView};
pub use grocery_row::GroceryRow;
pub use upc_input::UpcInput;
