//! Diagnostics Component
//!
//! Collapsible view of the most recent log lines, for when the browser
//! console is out of reach (kiosk scanners, phones).

use leptos::prelude::*;

#[component]
pub fn Diagnostics() -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());

    view! {
        <details class="mt-4 small text-muted">
            <summary>"Diagnostics"</summary>
            <div class="d-flex justify-content-end mb-1">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| set_lines.set(console_logger::recent_lines())
                >
                    "Refresh"
                </button>
            </div>
            <pre class="border rounded p-2">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
