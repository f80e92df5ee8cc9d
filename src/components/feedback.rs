//! Feedback Components
//!
//! Spinner and error banner shared by the list and the input row.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-border text-primary" role="status">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-danger" role="alert">{message}</div>
    }
}
