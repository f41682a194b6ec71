use futures::{Stream, TryStreamExt};

/// Incremental mean over a stream of values; holds only a sum and a count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningAverage {
    sum: f64,
    count: u64,
}

impl RunningAverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// `None` until at least one value has been pushed.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Folds a value stream, stopping at the first error.
    pub async fn from_stream<S, E>(stream: S) -> Result<Self, E>
    where
        S: Stream<Item = Result<f64, E>>,
    {
        stream
            .try_fold(Self::new(), |mut acc, value| async move {
                acc.push(value);
                Ok(acc)
            })
            .await
    }
}
