//! Notice listing CSV rows that were dropped during loading.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders nothing when every row loaded cleanly.
#[component]
pub fn LoadStatsNotice() -> Element {
    let state = use_context::<AppState>();
    let Some(stats) = (state.load_stats)() else {
        return rsx! {};
    };
    if stats.rows_rejected == 0 && stats.inverted_rows == 0 {
        return rsx! {};
    }

    let headline = format!(
        "{} of {} rows skipped ({:.1}% loaded)",
        stats.rows_rejected,
        stats.rows_read,
        stats.success_rate()
    );

    rsx! {
        details {
            style: "margin: 8px 0; padding: 8px 12px; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px; font-size: 12px;",
            summary { "{headline}" }
            if stats.inverted_rows > 0 {
                p {
                    style: "margin: 4px 0;",
                    "{stats.inverted_rows} rows have a max temperature below their min temperature."
                }
            }
            ul {
                style: "margin: 4px 0 0 0;",
                for line in stats.errors.iter() {
                    li { "{line}" }
                }
            }
        }
    }
}
