//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use heat_data::loader::LoadStats;
use heat_data::TemperatureField;
use heat_view::ModeCoordinator;
use std::cell::RefCell;
use std::rc::Rc;

/// Coordinator shared between the mode effect and the hover callback.
pub type SharedCoordinator = Rc<RefCell<ModeCoordinator>>;

/// Shared application state for the heatmap apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the CSV is still being fetched and aggregated
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Selected temperature field ("max" / "min" radio group)
    pub field: Signal<TemperatureField>,
    /// Both view controllers, None until loaded
    pub coordinator: Signal<Option<SharedCoordinator>>,
    /// Row accounting from the last load
    pub load_stats: Signal<Option<LoadStats>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            field: Signal::new(TemperatureField::Max),
            coordinator: Signal::new(None),
            load_stats: Signal::new(None),
        }
    }
}
