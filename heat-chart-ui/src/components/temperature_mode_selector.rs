//! Radio group choosing which temperature field colors the heatmaps.

use crate::state::AppState;
use dioxus::prelude::*;
use heat_data::TemperatureField;

/// Radio group name shared by both options.
pub const MODE_GROUP: &str = "temperature-type";

/// "max" / "min" radio buttons bound to `AppState::field`.
#[component]
pub fn TemperatureModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.field)();

    rsx! {
        div {
            style: "margin: 8px 0 16px 0; display: flex; gap: 16px; align-items: center;",
            span { style: "font-weight: bold;", "Color by: " }
            for field in TemperatureField::ALL {
                label {
                    key: "{field}",
                    style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: MODE_GROUP,
                        value: "{field}",
                        checked: current == field,
                        onchange: move |evt: Event<FormData>| {
                            match evt.value().parse::<TemperatureField>() {
                                Ok(selected) => state.field.set(selected),
                                Err(e) => log::warn!("{}", e),
                            }
                        },
                    }
                    {field.label()}
                }
            }
        }
    }
}
