//! Band and linear scales, following the d3-scale conventions the chart
//! scripts use on the other side of the bridge.

use heat_data::aggregate::Extent;

/// Categorical scale mapping each distinct domain value to a band.
///
/// Outer padding is zero; `padding` is the inner padding as a fraction of
/// the step, like d3's `scaleBand().paddingInner(p)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: Ord + Copy> BandScale<T> {
    /// Build from any values; duplicates collapse and the domain is sorted.
    pub fn new<I: IntoIterator<Item = T>>(values: I, range: (f64, f64), padding: f64) -> Self {
        let mut domain: Vec<T> = values.into_iter().collect();
        domain.sort();
        domain.dedup();

        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let step = (range.1 - range.0) / (n - padding).max(1.0);
        Self {
            domain,
            start: range.0,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start of the band for `value`, `None` when it is not in the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        self.domain
            .binary_search(&value)
            .ok()
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn center(&self, value: T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth / 2.0)
    }
}

/// Continuous linear mapping from a numeric domain to a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn from_extent(extent: Extent, range: (f64, f64)) -> Self {
        Self::new((extent.min, extent.max), range)
    }

    /// Position of `value` in [0, 1] over the domain, unclamped.
    /// A zero-width domain maps everything to the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            0.5
        } else {
            (value - self.domain.0) / span
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        self.range.0 + self.normalize(value) * (self.range.1 - self.range.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_dedups_and_sorts() {
        let scale = BandScale::new([2021, 2019, 2020, 2019], (0.0, 300.0), 0.0);
        assert_eq!(scale.domain(), &[2019, 2020, 2021]);
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position(2019), Some(0.0));
        assert_eq!(scale.position(2021), Some(200.0));
        assert_eq!(scale.center(2020), Some(150.0));
        assert_eq!(scale.position(2022), None);
    }

    #[test]
    fn band_scale_inner_padding_matches_d3() {
        // d3.scaleBand().domain([1,2]).range([0,390]).paddingInner(0.05):
        // step = 390 / 1.95 = 200, bandwidth = 190
        let scale = BandScale::new([1u32, 2], (0.0, 390.0), 0.05);
        assert!((scale.bandwidth() - 190.0).abs() < 1e-9);
        assert!((scale.position(2).unwrap() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn band_scale_single_value_fills_range() {
        let scale = BandScale::new([7u32], (0.0, 50.0), 0.0);
        assert_eq!(scale.bandwidth(), 50.0);
        assert_eq!(scale.position(7), Some(0.0));
    }

    #[test]
    fn linear_scale_maps_and_inverts_range() {
        let scale = LinearScale::new((-10.0, 30.0), (100.0, 0.0));
        assert_eq!(scale.scale(-10.0), 100.0);
        assert_eq!(scale.scale(30.0), 0.0);
        assert_eq!(scale.scale(10.0), 50.0);
    }

    #[test]
    fn linear_scale_degenerate_domain_is_midpoint() {
        let scale = LinearScale::new((1.0, 1.0), (0.0, 80.0));
        assert_eq!(scale.scale(1.0), 40.0);
    }
}
