//! Grocery Row Component
//!
//! One list entry. The row owns its delete state: it shows a spinner as
//! soon as delete is clicked and only comes back if the server refuses.
//! On success the row simply leaves the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Spinner;
use crate::context::use_controller;
use crate::models::GroceryItem;
use crate::state::{RowEvent, RowState};

#[component]
pub fn GroceryRow(item: GroceryItem) -> impl IntoView {
    let controller = use_controller();
    let (row_state, set_row_state) = signal(RowState::Idle);
    let GroceryItem { id, name } = item;

    let on_remove = move |_: leptos::ev::MouseEvent| {
        if row_state.get_untracked() != RowState::Idle {
            return;
        }
        set_row_state.update(|s| *s = s.on(RowEvent::DeleteClicked));
        let controller = controller.get_value();
        let id = id.clone();
        spawn_local(async move {
            controller
                .remove_item(id, move || set_row_state.update(|s| *s = s.on(RowEvent::DeleteFailed)))
                .await;
        });
    };

    view! {
        <li class="list-group-item">
            {move || match row_state.get() {
                RowState::Deleting => view! { <Spinner /> }.into_any(),
                RowState::Idle => view! {
                    <div class="d-flex justify-content-between">
                        <div>{name.clone()}</div>
                        <div class="d-flex align-items-center">
                            <button
                                type="button"
                                class="btn btn-sm btn-danger"
                                title="Remove"
                                on:click=on_remove.clone()
                            >
                                <i class="far fa-trash-alt"></i>
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </li>
    }
}
