//! Grocery App Component
//!
//! Top-level list view: spinner while loading, error with retry, or the
//! list with its input row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorMessage, GroceryListView, Spinner, UpcInput};
use crate::context::use_controller;
use crate::state::{GroceryStateStoreFields, ListPhase, ListState, ListStateStoreFields};

#[component]
pub fn GroceryApp() -> impl IntoView {
    let controller = use_controller();
    let store = controller.with_value(|c| c.store());

    // Only re-render the body when the phase actually changes
    let phase = Memo::new(move |_| store.list().with(ListState::phase));

    // Load on mount
    Effect::new(move |_| {
        let controller = controller.get_value();
        spawn_local(async move { controller.load().await });
    });

    let on_retry = move |_: leptos::ev::MouseEvent| {
        let controller = controller.get_value();
        spawn_local(async move { controller.retry().await });
    };

    move || match phase.get() {
        ListPhase::Error => view! {
            <div>
                <ErrorMessage message=store.list().error().get().unwrap_or_default() />
                <div class="d-flex justify-content-center mt-2 mb-2">
                    <button type="button" class="btn btn-sm btn-primary" on:click=on_retry>
                        "Retry"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        ListPhase::Loading => view! {
            <div class="d-flex justify-content-center">
                <Spinner />
            </div>
        }
        .into_any(),
        ListPhase::Content => view! {
            <div>
                <h3>"Grocery List"</h3>
                <UpcInput />
                <GroceryListView />
            </div>
        }
        .into_any(),
    }
}
