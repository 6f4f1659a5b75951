use crate::domain::model::DEFAULT_PAUSE;
use crate::domain::ports::{AsyncSleeper, Sleeper};
use async_trait::async_trait;
use std::time::Duration;

/// Blocks the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSleeper {
    duration: Duration,
}

impl DefaultSleeper {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for DefaultSleeper {
    fn default() -> Self {
        Self::new(DEFAULT_PAUSE)
    }
}

impl Sleeper for DefaultSleeper {
    fn sleep(&mut self) {
        std::thread::sleep(self.duration);
    }
}

/// Yields to the tokio runtime for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokioSleeper {
    duration: Duration,
}

impl TokioSleeper {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for TokioSleeper {
    fn default() -> Self {
        Self::new(DEFAULT_PAUSE)
    }
}

#[async_trait]
impl AsyncSleeper for TokioSleeper {
    async fn sleep(&mut self) {
        tokio::time::sleep(self.duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_sleeper_waits_one_second_by_default() {
        assert_eq!(DefaultSleeper::default().duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_default_sleeper_blocks_for_its_duration() {
        let mut sleeper = DefaultSleeper::new(Duration::from_millis(20));
        let started = Instant::now();
        sleeper.sleep();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let mut sleeper = TokioSleeper::new(Duration::from_millis(10));
        let started = tokio::time::Instant::now();
        sleeper.sleep().await;
        assert!(started.elapsed() >= Duration::from_millis(10));
    }
}
