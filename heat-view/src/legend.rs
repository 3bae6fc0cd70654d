use crate::color::ColorRamp;
use crate::config::ViewConfig;
use crate::frame::{GradientStop, LegendFrame};
use crate::transition::Transition;
use heat_data::aggregate::Extent;
use heat_data::TemperatureField;

/// Legend for `field` over `domain`: a gradient sampled from `ramp` and the
/// axis domain the chart scripts draw under it.
pub fn legend_frame(
    mount: &str,
    field: TemperatureField,
    domain: Extent,
    ramp: &ColorRamp,
    config: &ViewConfig,
) -> LegendFrame {
    let n = config.legend.stops.max(2);
    let stops = (0..n)
        .map(|i| {
            let offset = i as f64 / (n - 1) as f64;
            GradientStop {
                offset,
                color: ramp.at(offset),
            }
        })
        .collect();

    LegendFrame {
        mount: mount.to_string(),
        field,
        title: field.label().to_string(),
        domain: [domain.min, domain.max],
        width: config.legend.width,
        height: config.legend.height,
        stops,
        transition: Transition::for_layer(mount, "legend", config.transition_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn stops_span_the_ramp() {
        let config = ViewConfig::default();
        let ramp = ColorRamp::temperature();
        let frame = legend_frame(
            "summary-heatmap",
            TemperatureField::Min,
            Extent { min: -12.0, max: 18.0 },
            &ramp,
            &config,
        );
        assert_eq!(frame.domain, [-12.0, 18.0]);
        assert_eq!(frame.stops.len(), config.legend.stops);
        assert_eq!(frame.stops[0].offset, 0.0);
        assert_eq!(frame.stops.last().unwrap().offset, 1.0);
        assert_eq!(frame.stops[0].color, Rgb(49, 54, 149));
        assert_eq!(frame.title, "Min temperature");
        assert_eq!(frame.transition.duration_ms, 500);
    }
}
