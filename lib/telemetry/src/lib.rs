#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;

use std::convert::Infallible;

use prometheus::{Encoder, Histogram, HistogramVec, IntCounter, IntCounterVec, TextEncoder};

lazy_static! {
    static ref SUCCESS: IntCounterVec = register_int_counter_vec!(
        "success_counter",
        "Success Count",
        &["app_layer", "class_function"]
    )
    .unwrap();
    static ref FAILURE: IntCounterVec = register_int_counter_vec!(
        "failure_counter",
        "Failure Count",
        &["app_layer", "class_function"]
    )
    .unwrap();
    static ref TIMER: HistogramVec = register_histogram_vec!(
        "timer",
        "Duration in seconds",
        &["app_layer", "class_function"]
    )
    .unwrap();
}

// Errors caused by the caller rather than the service report is_err() == false
pub trait IsErr {
    fn is_err(&self) -> bool {
        true
    }
}

impl IsErr for Infallible {
    fn is_err(&self) -> bool {
        false
    }
}

impl IsErr for () {
    fn is_err(&self) -> bool {
        false
    }
}

impl IsErr for Box<dyn std::error::Error> {}

#[derive(Clone)]
pub struct Measure {
    success: IntCounter,
    failure: IntCounter,
    timer: Histogram,
}

impl Measure {
    pub fn new(layer: &str, function: &str) -> Measure {
        Measure {
            success: SUCCESS.with_label_values(&[layer, function]),
            failure: FAILURE.with_label_values(&[layer, function]),
            timer: TIMER.with_label_values(&[layer, function]),
        }
    }

    /// Runs `inner`, recording its duration and whether it succeeded
    pub fn stats<F, T, E>(&self, inner: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: IsErr,
    {
        let r = self.timer.observe_closure_duration(inner);
        match &r {
            Ok(_) => self.success.inc(),
            Err(e) if !e.is_err() => self.success.inc(),
            Err(_) => self.failure.inc(),
        }
        r
    }
}

pub fn encode() -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::thread;
    use std::time::Duration;

    use super::*;

    enum TestError {
        Fatal,
        Recoverable,
    }

    impl IsErr for TestError {
        fn is_err(&self) -> bool {
            match self {
                Self::Fatal => true,
                Self::Recoverable => false,
            }
        }
    }

    fn assert_counts(layer: &str, function: &str, success: u64, failure: u64) {
        assert_eq!(SUCCESS.with_label_values(&[layer, function]).get(), success);
        assert_eq!(FAILURE.with_label_values(&[layer, function]).get(), failure);
        assert_eq!(
            TIMER
                .with_label_values(&[layer, function])
                .get_sample_count(),
            success + failure
        );
    }

    #[test]
    fn test_success() {
        let m = Measure::new("layer", "test_success");

        let r = m.stats(|| Ok::<_, Infallible>(3));

        assert!(matches!(r, Ok(3)));
        assert_counts("layer", "test_success", 1, 0);
    }

    #[test]
    fn test_failure() {
        let m = Measure::new("layer", "test_failure");

        let _ = m.stats(|| Err::<(), _>(TestError::Fatal));
        let _ = m.stats(|| Err::<(), _>(TestError::Fatal));

        assert_counts("layer", "test_failure", 0, 2);
    }

    #[test]
    fn test_recoverable() {
        let m = Measure::new("layer", "test_recoverable");

        let _ = m.stats(|| Err::<(), _>(TestError::Recoverable));

        assert_counts("layer", "test_recoverable", 1, 0);
    }

    #[test]
    fn test_timer() {
        let m = Measure::new("layer", "test_timer");

        let _ = m.stats(|| {
            thread::sleep(Duration::from_millis(50));
            Ok::<_, Infallible>(())
        });

        let sum = TIMER
            .with_label_values(&["layer", "test_timer"])
            .get_sample_sum();
        assert!(sum >= 0.05, "recorded {}s", sum);
    }

    #[test]
    fn test_encode() -> Result<(), Box<dyn std::error::Error>> {
        let m = Measure::new("layer", "test_encode");
        let _ = m.stats(|| Ok::<_, Infallible>(()));

        let text = encode()?;

        assert!(text.contains("success_counter"));
        assert!(text.contains("class_function=\"test_encode\""));
        Ok(())
    }
}
