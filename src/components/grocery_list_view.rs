//! Grocery List View Component
//!
//! Rows keyed by item id, the empty notice, and the clear-all control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorMessage, GroceryRow};
use crate::context::use_controller;
use crate::state::{GroceryStateStoreFields, ListState, ListStateStoreFields};

#[component]
pub fn GroceryListView() -> impl IntoView {
    let store = use_controller().with_value(|c| c.store());
    let empty_notice = Memo::new(move |_| store.list().with(ListState::empty_notice));

    view! {
        <div>
            {move || empty_notice.get().map(|notice| view! { <div>{notice}</div> })}
            <div class="card">
                <ul class="list-group list-group-flush">
                    <For
                        each=move || store.list().items().get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <GroceryRow item=item /> }
                    />
                </ul>
            </div>
            <Show when=move || empty_notice.get().is_none()>
                <ClearList />
            </Show>
        </div>
    }
}

/// "Clear All" button, with the failure notice above it
#[component]
pub fn ClearList() -> impl IntoView {
    let controller = use_controller();
    let store = controller.with_value(|c| c.store());

    let on_clear = move |_: leptos::ev::MouseEvent| {
        let controller = controller.get_value();
        spawn_local(async move { controller.clear_all().await });
    };

    view! {
        <div class="mt-2">
            {move || store.list().clear_error().get().map(|message| view! { <ErrorMessage message=message /> })}
            <div class="d-flex justify-content-end">
                <button type="button" class="btn btn-sm btn-danger" on:click=on_clear>
                    "Clear All"
                </button>
            </div>
        </div>
    }
}
