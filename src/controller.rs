//! Grocery Controller
//!
//! Runs the list operations against a `GroceryApi` and folds the outcomes
//! into the store. Components only call into this; they never talk to the
//! API directly.

use std::rc::Rc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::api::GroceryApi;
use crate::state::{GroceryStateStoreFields, GroceryStore};

/// Produces the pause used before a retry
pub type Delay = Rc<dyn Fn(Duration) -> LocalBoxFuture<'static, ()>>;

/// Browser timer delay
pub fn timer_delay() -> Delay {
    Rc::new(|duration| gloo_timers::future::sleep(duration).boxed_local())
}

#[derive(Clone)]
pub struct GroceryController {
    api: Rc<dyn GroceryApi>,
    store: GroceryStore,
    retry_delay: Duration,
    delay: Delay,
}

impl GroceryController {
    pub fn new(api: Rc<dyn GroceryApi>, store: GroceryStore, retry_delay: Duration, delay: Delay) -> Self {
        Self { api, store, retry_delay, delay }
    }

    pub fn store(&self) -> GroceryStore {
        self.store
    }

    /// Read the whole list from the server
    pub async fn load(&self) {
        let result = self.api.list().await;
        match &result {
            Ok(items) => info!("Loaded {} grocery items", items.len()),
            Err(e) => warn!("Failed to load grocery list: {e}"),
        }
        self.store.list().write().finish_load(result);
    }

    /// User-initiated reload after a failed read
    pub async fn retry(&self) {
        self.store.list().write().begin_retry();
        (self.delay)(self.retry_delay).await;
        self.load().await;
    }

    /// Record a keystroke. Returns the code to submit when the field holds
    /// a complete UPC; pass that straight to [`Self::add`].
    pub fn input_changed(&self, value: String) -> Option<String> {
        let upc_code = self.store.input().write().edit(value);
        if let Some(code) = &upc_code {
            debug!("Complete UPC entered: {code}");
        }
        upc_code
    }

    pub async fn add(&self, upc_code: String) {
        self.store.input().write().begin_add();
        let result = self.api.add(&upc_code).await;
        if let Err(e) = &result {
            warn!("Failed to add {upc_code}: {e}");
        }
        let added = self.store.input().write().finish_add(result);
        if let Some(item) = added {
            info!("Added {} ({})", item.name, item.id);
            self.store.list().write().prepend(item);
        }
    }

    /// Delete one item. `on_failure` runs once if the server did not
    /// confirm, and the list is left untouched.
    pub async fn remove_item(&self, id: String, on_failure: impl FnOnce()) {
        match self.api.remove(&id).await {
            Ok(()) => {
                info!("Removed item {id}");
                self.store.list().write().remove(&id);
            }
            Err(e) => {
                warn!("Failed to remove item {id}: {e}");
                on_failure();
            }
        }
    }

    pub async fn clear_all(&self) {
        let result = self.api.clear().await;
        match &result {
            Ok(()) => info!("Cleared grocery list"),
            Err(e) => warn!("Failed to clear grocery list: {e}"),
        }
        self.store.list().write().finish_clear(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use futures::future::ready;
    use reactive_stores::Store;

    use crate::api::ApiResult;
    use crate::error::ApiError;
    use crate::models::GroceryItem;
    use crate::state::{GroceryState, ListPhase, ListState, LOAD_ERROR};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Add(String),
        Remove(String),
        Clear,
    }

    /// Scripted API: each call pops the next canned response.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        lists: RefCell<VecDeque<ApiResult<Vec<GroceryItem>>>>,
        adds: RefCell<VecDeque<ApiResult<GroceryItem>>>,
        units: RefCell<VecDeque<ApiResult<()>>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl GroceryApi for FakeApi {
        async fn list(&self) -> ApiResult<Vec<GroceryItem>> {
            self.calls.borrow_mut().push(Call::List);
            self.lists.borrow_mut().pop_front().expect("unscripted list call")
        }

        async fn add(&self, upc_code: &str) -> ApiResult<GroceryItem> {
            self.calls.borrow_mut().push(Call::Add(upc_code.to_string()));
            self.adds.borrow_mut().pop_front().expect("unscripted add call")
        }

        async fn remove(&self, id: &str) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Remove(id.to_string()));
            self.units.borrow_mut().pop_front().expect("unscripted remove call")
        }

        async fn clear(&self) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Clear);
            self.units.borrow_mut().pop_front().expect("unscripted clear call")
        }
    }

    fn item(id: &str, name: &str) -> GroceryItem {
        GroceryItem { id: id.to_string(), name: name.to_string() }
    }

    fn no_delay() -> Delay {
        Rc::new(|_| ready(()).boxed_local())
    }

    fn setup(api: FakeApi) -> (Rc<FakeApi>, GroceryController) {
        let api = Rc::new(api);
        let store = Store::new(GroceryState::default());
        let controller = GroceryController::new(api.clone(), store, Duration::from_millis(500), no_delay());
        (api, controller)
    }

    fn list_state(controller: &GroceryController) -> ListState {
        controller.store().list().get_untracked()
    }

    #[test]
    fn test_load_populates_list_verbatim() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk"), item("2", "Eggs")]));
        let (api, controller) = setup(api);

        block_on(controller.load());

        let list = list_state(&controller);
        assert_eq!(list.items, vec![item("1", "Milk"), item("2", "Eggs")]);
        assert!(!list.loading);
        assert_eq!(list.error, None);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[test]
    fn test_load_failure_sets_fixed_message() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Err(ApiError::Network("rejected".into())));
        let (_api, controller) = setup(api);

        block_on(controller.load());

        let list = list_state(&controller);
        assert_eq!(list.error.as_deref(), Some(LOAD_ERROR));
        assert!(!list.loading);
    }

    #[test]
    fn test_retry_resets_state_before_delay_then_reads_once() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Err(ApiError::Status(503)));
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk")]));
        let api = Rc::new(api);
        let store = Store::new(GroceryState::default());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let delay: Delay = {
            let seen = seen.clone();
            let api = api.clone();
            Rc::new(move |duration| {
                let list = store.list().get_untracked();
                seen.borrow_mut().push((duration, list.loading, list.error, api.calls().len()));
                ready(()).boxed_local()
            })
        };
        let controller = GroceryController::new(api.clone(), store, Duration::from_millis(500), delay);

        block_on(controller.load());
        block_on(controller.retry());

        assert_eq!(*seen.borrow(), vec![(Duration::from_millis(500), true, None, 1)]);
        assert_eq!(api.calls(), vec![Call::List, Call::List]);
        assert_eq!(list_state(&controller).phase(), ListPhase::Content);
    }

    #[test]
    fn test_input_triggers_add_with_typed_value() {
        let (api, controller) = setup(FakeApi::default());

        assert_eq!(controller.input_changed("01234".into()), None);
        assert_eq!(controller.input_changed("0123456789012".into()), None);
        assert!(api.calls().is_empty());

        let code = controller.input_changed("012345678905".into());
        assert_eq!(code.as_deref(), Some("012345678905"));
    }

    #[test]
    fn test_add_success_prepends_and_clears_input() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk")]));
        api.adds.borrow_mut().push_back(Ok(item("2", "Eggs")));
        let (api, controller) = setup(api);
        block_on(controller.load());

        let code = controller.input_changed("012345678905".into()).unwrap();
        block_on(controller.add(code));

        assert_eq!(api.calls(), vec![Call::List, Call::Add("012345678905".into())]);
        assert_eq!(list_state(&controller).items, vec![item("2", "Eggs"), item("1", "Milk")]);
        let input = controller.store().input().get_untracked();
        assert_eq!(input.text, "");
        assert!(!input.loading);
        assert_eq!(input.error, None);
    }

    #[test]
    fn test_add_failure_shows_message_and_keeps_list() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk")]));
        api.adds.borrow_mut().push_back(Err(ApiError::Rejected {
            status: 400,
            message: "Unknown UPC code".into(),
        }));
        let (_api, controller) = setup(api);
        block_on(controller.load());

        let code = controller.input_changed("999999999999".into()).unwrap();
        block_on(controller.add(code));

        assert_eq!(list_state(&controller).items, vec![item("1", "Milk")]);
        let input = controller.store().input().get_untracked();
        assert_eq!(input.text, "");
        assert!(!input.loading);
        assert_eq!(input.error.as_deref(), Some("Unknown UPC code"));
    }

    #[test]
    fn test_remove_success_filters_by_id() {
        let api = FakeApi::default();
        api.lists
            .borrow_mut()
            .push_back(Ok(vec![item("1", "Milk"), item("2", "Eggs"), item("3", "Rice")]));
        api.units.borrow_mut().push_back(Ok(()));
        let (api, controller) = setup(api);
        block_on(controller.load());

        let reverted = Cell::new(0);
        block_on(controller.remove_item("2".into(), || reverted.set(reverted.get() + 1)));

        assert_eq!(reverted.get(), 0);
        assert_eq!(api.calls().last(), Some(&Call::Remove("2".into())));
        assert_eq!(list_state(&controller).items, vec![item("1", "Milk"), item("3", "Rice")]);
    }

    #[test]
    fn test_remove_failure_reverts_once_and_keeps_list() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk"), item("2", "Eggs")]));
        api.units.borrow_mut().push_back(Err(ApiError::Status(500)));
        let (_api, controller) = setup(api);
        block_on(controller.load());

        let reverted = Cell::new(0);
        block_on(controller.remove_item("1".into(), || reverted.set(reverted.get() + 1)));

        assert_eq!(reverted.get(), 1);
        assert_eq!(list_state(&controller).items, vec![item("1", "Milk"), item("2", "Eggs")]);
    }

    #[test]
    fn test_clear_all_only_empties_on_success() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk"), item("2", "Eggs")]));
        api.units.borrow_mut().push_back(Err(ApiError::Status(401)));
        api.units.borrow_mut().push_back(Ok(()));
        let (api, controller) = setup(api);
        block_on(controller.load());

        block_on(controller.clear_all());
        let list = list_state(&controller);
        assert_eq!(list.items.len(), 2);
        assert!(list.clear_error.is_some());

        block_on(controller.clear_all());
        let list = list_state(&controller);
        assert!(list.items.is_empty());
        assert_eq!(list.clear_error, None);
        assert_eq!(api.calls(), vec![Call::List, Call::Clear, Call::Clear]);
    }

    #[test]
    fn test_single_item_delete_scenario() {
        let api = FakeApi::default();
        api.lists.borrow_mut().push_back(Ok(vec![item("1", "Milk")]));
        api.units.borrow_mut().push_back(Ok(()));
        let (api, controller) = setup(api);

        block_on(controller.load());
        let list = list_state(&controller);
        assert_eq!(list.phase(), ListPhase::Content);
        assert_eq!(list.items, vec![item("1", "Milk")]);

        block_on(controller.remove_item("1".into(), || panic!("delete should succeed")));

        assert_eq!(api.calls(), vec![Call::List, Call::Remove("1".into())]);
        let list = list_state(&controller);
        assert_eq!(list.phase(), ListPhase::Content);
        assert!(list.items.is_empty());
        assert_eq!(list.empty_notice(), Some("Your list is empty!"));
    }
}
