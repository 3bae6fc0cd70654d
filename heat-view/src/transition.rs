use serde::Serialize;

/// A named, fixed-duration transition.
///
/// The chart scripts run it as `selection.transition(name).duration(ms)`.
/// Starting a transition with the same name on an element interrupts the
/// one in flight, so the latest update always wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub name: String,
    pub duration_ms: u32,
}

impl Transition {
    /// Transition for one layer ("cells", "lines", "legend") of a mount.
    pub fn for_layer(mount: &str, layer: &str, duration_ms: u32) -> Self {
        Self {
            name: format!("{}-{}", mount, layer),
            duration_ms,
        }
    }
}
