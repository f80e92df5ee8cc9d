//! Application Context
//!
//! The controller is shared with every component through Leptos context.

use leptos::prelude::*;

use crate::controller::GroceryController;

/// The controller holds `Rc`s, so it lives in local (non-`Send`) storage.
pub type SharedController = StoredValue<GroceryController, LocalStorage>;

pub fn provide_controller(controller: GroceryController) -> SharedController {
    let shared = StoredValue::new_local(controller);
    provide_context(shared);
    shared
}

pub fn use_controller() -> SharedController {
    use_context::<SharedController>().expect("GroceryController should be provided")
}
