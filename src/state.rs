//! Grocery View State
//!
//! Plain state structs behind the reactive store. Every transition the UI
//! goes through is a method here so it can be tested without a browser.

use reactive_stores::Store;

use crate::api::ApiResult;
use crate::error::ApiError;
use crate::models::GroceryItem;

/// Length of a scanned UPC-A code
pub const UPC_CODE_LENGTH: usize = 12;

pub const LOAD_ERROR: &str = "Unable to load data! :(";
pub const ADD_ERROR: &str = "Unable to add item! :(";
pub const CLEAR_ERROR: &str = "Unable to clear list! :(";
pub const EMPTY_NOTICE: &str = "Your list is empty!";

/// Root state, provided to the view as a store
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GroceryState {
    pub list: ListState,
    pub input: InputState,
}

pub type GroceryStore = Store<GroceryState>;

/// What the list area renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Error,
    Content,
}

#[derive(Clone, Debug, PartialEq, Store)]
pub struct ListState {
    /// Newest first
    pub items: Vec<GroceryItem>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when "Clear All" failed; the list itself is left alone
    pub clear_error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            clear_error: None,
        }
    }
}

impl ListState {
    /// Error beats loading beats content; the view never mixes them.
    pub fn phase(&self) -> ListPhase {
        if self.error.is_some() {
            ListPhase::Error
        } else if self.loading {
            ListPhase::Loading
        } else {
            ListPhase::Content
        }
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<GroceryItem>>) {
        match result {
            Ok(items) => self.items = items,
            Err(_) => self.error = Some(LOAD_ERROR.to_string()),
        }
        self.loading = false;
    }

    pub fn begin_retry(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Shown in place of rows when there is nothing on the list
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(EMPTY_NOTICE)
    }

    // A failed clear is stale once the list has changed under it.
    pub fn prepend(&mut self, item: GroceryItem) {
        self.items.insert(0, item);
        self.clear_error = None;
    }

    /// Drop the item with this id, leaving the rest in order
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.clear_error = None;
    }

    pub fn finish_clear(&mut self, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.items.clear();
                self.clear_error = None;
            }
            Err(_) => self.clear_error = Some(CLEAR_ERROR.to_string()),
        }
    }
}

/// The UPC entry field
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct InputState {
    pub text: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl InputState {
    /// Record what was typed. Returns the code to submit when the value
    /// is a complete UPC; callers submit that value, not `self.text`.
    ///
    /// Length is counted in chars, not UTF-16 units as a browser would.
    /// Barcode input is ASCII, where the two agree.
    pub fn edit(&mut self, value: String) -> Option<String> {
        let complete = value.chars().count() == UPC_CODE_LENGTH;
        self.text = value;
        complete.then(|| self.text.clone())
    }

    pub fn begin_add(&mut self) {
        self.loading = true;
    }

    /// Settle the field after an add. Hands back the created item on
    /// success so it can be put on the list.
    pub fn finish_add(&mut self, result: ApiResult<GroceryItem>) -> Option<GroceryItem> {
        self.text.clear();
        self.loading = false;
        match result {
            Ok(item) => {
                self.error = None;
                Some(item)
            }
            Err(err) => {
                self.error = Some(add_error_message(&err));
                None
            }
        }
    }
}

fn add_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(ADD_ERROR).to_string()
}

/// Per-row delete state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowState {
    #[default]
    Idle,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEvent {
    DeleteClicked,
    DeleteFailed,
}

impl RowState {
    pub fn on(self, event: RowEvent) -> RowState {
        match (self, event) {
            (RowState::Idle, RowEvent::DeleteClicked) => RowState::Deleting,
            (RowState::Deleting, RowEvent::DeleteFailed) => RowState::Idle,
            (state, _) => state,
        }
    }
}
