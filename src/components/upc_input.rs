//! UPC Input Component
//!
//! Text field that submits as soon as a full UPC code is in it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorMessage, Spinner};
use crate::context::use_controller;
use crate::state::{GroceryStateStoreFields, InputStateStoreFields};

#[component]
pub fn UpcInput() -> impl IntoView {
    let controller = use_controller();
    let store = controller.with_value(|c| c.store());
    let loading = Memo::new(move |_| store.input().loading().get());

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let controller = controller.get_value();
        // Submit the value from this event; the store may not reflect it yet
        if let Some(upc_code) = controller.input_changed(value) {
            spawn_local(async move { controller.add(upc_code).await });
        }
    };

    move || {
        if loading.get() {
            view! {
                <div class="d-flex justify-content-center mt-2 mb-2">
                    <Spinner />
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="form-group">
                    {move || store.input().error().get().map(|message| view! { <ErrorMessage message=message /> })}
                    <label for="upcCode">"UPC Code"</label>
                    <input
                        id="upcCode"
                        type="text"
                        class="form-control form-control-lg"
                        placeholder="UPC Code"
                        autofocus=true
                        prop:value=move || store.input().text().get()
                        on:input=on_input
                    />
                </div>
            }
            .into_any()
        }
    }
}
