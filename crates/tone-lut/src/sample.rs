//! Sparse (input, output) intensity samples and their interpolation.

use crate::error::ValidationError;

/// One (input intensity, output intensity) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Input intensity (the `Scan` column)
    pub input: f64,
    /// Output intensity (the `Idea` column)
    pub output: f64,
}

impl Sample {
    /// Create a sample from an input and output intensity.
    #[inline]
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((input, output): (f64, f64)) -> Self {
        Self::new(input, output)
    }
}

/// A non-empty sequence of samples ordered by ascending input.
///
/// Sorting is stable, so samples sharing an input keep the order in which
/// they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Validate and sort a list of samples.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySampleSet`] for an empty list and
    /// [`ValidationError::NonFinite`] if any value is NaN or infinite.
    pub fn new(mut samples: Vec<Sample>) -> Result<Self, ValidationError> {
        if samples.is_empty() {
            return Err(ValidationError::EmptySampleSet);
        }
        for sample in &samples {
            check_finite(sample.input, "Scan")?;
            check_finite(sample.output, "Idea")?;
        }
        samples.sort_by(|a, b| a.input.total_cmp(&b.input));
        Ok(Self { samples })
    }

    /// Samples in ascending input order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample with the smallest input (first-seen among equals).
    pub fn first(&self) -> Sample {
        self.samples[0]
    }

    /// Sample with the largest input (last-seen among equals).
    pub fn last(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a `SampleSet` holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Piecewise-linear value at `q`, neither clamped nor rounded.
    ///
    /// Outside the sampled range the nearest end sample's output is
    /// returned unchanged (no extrapolation). Inside, the first segment
    /// whose upper input reaches `q` is used, so a query that hits a
    /// duplicated input exactly takes the first-seen duplicate.
    pub fn evaluate(&self, q: f64) -> f64 {
        let first = self.first();
        let last = self.last();

        if q <= first.input {
            return first.output;
        }
        if q >= last.input {
            return last.output;
        }

        // first.input < q < last.input, so some upper sample reaches q.
        for pair in self.samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.input < q {
                continue;
            }
            if b.input == q {
                return b.output;
            }
            if a.input == b.input {
                return a.output;
            }
            return lerp(a, b, q);
        }

        last.output
    }
}

/// Linear interpolation between `a` and `b` at `a.input < q < b.input`.
fn lerp(a: Sample, b: Sample, q: f64) -> f64 {
    let span = b.input - a.input;
    let scaled = (b.output - a.output) * (q - a.input);
    if span.is_finite() && scaled.is_finite() {
        return a.output + scaled / span;
    }

    // Spans near f64::MAX overflow above; halving keeps every difference finite.
    let t = (q / 2.0 - a.input / 2.0) / (b.input / 2.0 - a.input / 2.0);
    a.output * (1.0 - t) + b.output * t
}

fn check_finite(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            line: None,
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(f64, f64)]) -> SampleSet {
        SampleSet::new(pairs.iter().copied().map(Sample::from).collect()).unwrap()
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(SampleSet::new(Vec::new()), Err(ValidationError::EmptySampleSet));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = SampleSet::new(vec![Sample::new(0.0, f64::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFinite { field: "Idea", .. }
        ));

        let err = SampleSet::new(vec![Sample::new(f64::INFINITY, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFinite { field: "Scan", .. }
        ));
    }

    #[test]
    fn test_sorting_is_stable() {
        let s = set(&[(200.0, 1.0), (50.0, 2.0), (50.0, 3.0), (10.0, 4.0)]);
        let outputs: Vec<f64> = s.samples().iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![4.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_evaluate_clamps_outside_range() {
        let s = set(&[(10.0, 30.0), (100.0, 200.0)]);
        assert_eq!(s.evaluate(0.0), 30.0);
        assert_eq!(s.evaluate(10.0), 30.0);
        assert_eq!(s.evaluate(100.0), 200.0);
        assert_eq!(s.evaluate(255.0), 200.0);
    }

    #[test]
    fn test_evaluate_interpolates_linearly() {
        let s = set(&[(0.0, 0.0), (100.0, 50.0), (200.0, 250.0)]);
        assert_eq!(s.evaluate(50.0), 25.0);
        assert_eq!(s.evaluate(100.0), 50.0);
        assert_eq!(s.evaluate(150.0), 150.0);
    }

    #[test]
    fn test_single_sample_is_constant() {
        let s = set(&[(42.0, 99.0)]);
        for q in [0.0, 42.0, 255.0] {
            assert_eq!(s.evaluate(q), 99.0);
        }
    }

    #[test]
    fn test_duplicate_inputs_inside_range() {
        // At the duplicated input the first-seen output wins; above it the
        // segment starts from the last duplicate.
        let s = set(&[(0.0, 0.0), (100.0, 80.0), (100.0, 120.0), (200.0, 220.0)]);
        assert_eq!(s.evaluate(100.0), 80.0);
        assert_eq!(s.evaluate(150.0), 170.0);
        assert_eq!(s.evaluate(50.0), 40.0);
    }

    #[test]
    fn test_duplicate_inputs_at_boundaries() {
        let s = set(&[(10.0, 5.0), (10.0, 7.0), (20.0, 8.0), (20.0, 9.0)]);
        assert_eq!(s.evaluate(10.0), 5.0);
        assert_eq!(s.evaluate(20.0), 9.0);
    }

    #[test]
    fn test_extreme_input_span_stays_finite() {
        let s = set(&[(-1e308, 0.0), (1e308, 255.0)]);
        let mid = s.evaluate(120.0);
        assert!((mid - 127.5).abs() < 1e-9, "got {mid}");

        let s = set(&[(0.0, -1e308), (f64::MAX, 1e308)]);
        assert!(s.evaluate(f64::MAX / 2.0).is_finite());
    }

    #[test]
    fn test_all_samples_share_one_input() {
        let s = set(&[(128.0, 10.0), (128.0, 20.0)]);
        assert_eq!(s.evaluate(0.0), 10.0);
        assert_eq!(s.evaluate(128.0), 10.0);
        assert_eq!(s.evaluate(200.0), 20.0);
    }
}
