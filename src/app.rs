//! Grocery List App
//!
//! Root component: wires the session token into the API client and
//! provides the controller to the grocery view.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::api::HttpGroceryApi;
use crate::components::{Diagnostics, GroceryApp};
use crate::config::AppConfig;
use crate::context::provide_controller;
use crate::controller::{timer_delay, GroceryController};
use crate::session::load_session;
use crate::state::GroceryState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let Some(token) = load_session(&config.session_key) else {
        info!("No session under {}, showing sign-in notice", config.session_key);
        return view! {
            <AppContainer>
                <div class="alert alert-info" role="alert">"Sign in to see your grocery list."</div>
            </AppContainer>
        }
        .into_any();
    };

    let api = HttpGroceryApi::new(config.api_url.clone(), token);
    let store = Store::new(GroceryState::default());
    provide_controller(GroceryController::new(Rc::new(api), store, config.retry_delay, timer_delay()));

    view! {
        <AppContainer>
            <GroceryApp />
        </AppContainer>
    }
    .into_any()
}

/// Bootstrap grid wrapper
#[component]
fn AppContainer(children: Children) -> impl IntoView {
    view! {
        <div class="container">
            <div class="row">
                <div class="col-lg-10 offset-lg-1">
                    {children()}
                    <Diagnostics />
                </div>
            </div>
        </div>
    }
}
