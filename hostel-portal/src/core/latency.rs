//! Simulated API latency
//!
//! Login and registration wait on a [`SimulatedLatency`] before revealing
//! their outcome, the way the portal fakes a round-trip to a backend.

use futures::future::BoxFuture;
use rand::Rng;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

pub type LatencyFn = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

#[derive(Clone)]
pub enum SimulatedLatency {
    /// Resolve immediately
    Skip,
    Fixed(Duration),
    /// `base` plus a uniform random extra in `0..jitter`
    Jittered { base: Duration, jitter: Duration },
    /// Caller-supplied delay, mostly for tests
    Custom(LatencyFn),
}

impl SimulatedLatency {
    pub fn custom<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::Custom(Arc::new(move || Box::pin(f())))
    }

    /// Delay to sleep for, `None` for `Skip` and `Custom`
    pub fn sample(&self) -> Option<Duration> {
        match self {
            Self::Skip | Self::Custom(_) => None,
            Self::Fixed(d) => Some(*d),
            Self::Jittered { base, jitter } => {
                let jitter_ms = jitter.as_millis() as u64;
                let extra = if jitter_ms == 0 {
                    0
                } else {
                    rand::thread_rng().gen_range(0..jitter_ms)
                };
                Some(*base + Duration::from_millis(extra))
            }
        }
    }

    pub async fn wait(&self) {
        if let Self::Custom(f) = self {
            f().await;
            return;
        }
        if let Some(delay) = self.sample() {
            tracing::trace!(delay_ms = delay.as_millis() as u64, "Simulating latency");
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::Jittered {
            base: Duration::from_millis(1000),
            jitter: Duration::from_millis(1000),
        }
    }
}

impl fmt::Debug for SimulatedLatency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("Skip"),
            Self::Fixed(d) => f.debug_tuple("Fixed").field(d).finish(),
            Self::Jittered { base, jitter } => f
                .debug_struct("Jittered")
                .field("base", base)
                .field("jitter", jitter)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_jitter_stays_in_range() {
        let latency = SimulatedLatency::default();
        for _ in 0..100 {
            let d = latency.sample().unwrap();
            assert!(d >= Duration::from_millis(1000));
            assert!(d < Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_zero_jitter_is_fixed() {
        let latency = SimulatedLatency::Jittered {
            base: Duration::from_millis(5),
            jitter: Duration::ZERO,
        };
        assert_eq!(latency.sample(), Some(Duration::from_millis(5)));
        assert_eq!(SimulatedLatency::Skip.sample(), None);
    }

    #[tokio::test]
    async fn test_custom_latency_is_awaited() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let latency = SimulatedLatency::custom(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        latency.wait().await;
        latency.wait().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fixed_latency_sleeps() {
        let start = tokio::time::Instant::now();
        SimulatedLatency::Fixed(Duration::from_millis(20)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
