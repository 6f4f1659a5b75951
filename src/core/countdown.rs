use crate::adapters::sleeper::DefaultSleeper;
use crate::core::{AsyncSleeper, Result, Sleeper, Step, DEFAULT_FINAL_WORD, DEFAULT_START};
use std::io::Write;
use tokio::io::AsyncWrite;

/// A countdown script: numbers from `start` down to 1, then the final word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    start: u32,
    final_word: String,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_FINAL_WORD)
    }
}

impl Countdown {
    pub fn new(start: u32, final_word: impl Into<String>) -> Self {
        Self {
            start,
            final_word: final_word.into(),
        }
    }

    /// Yields the steps one at a time; nothing is buffered up front.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        (1..=self.start)
            .rev()
            .map(Step::Number)
            .chain(std::iter::once_with(move || Step::Final(self.final_word.clone())))
    }

    /// Writes every step to `out`, calling `sleeper` once after each number.
    pub fn run<W, S>(&self, out: &mut W, sleeper: &mut S) -> Result<()>
    where
        W: Write + ?Sized,
        S: Sleeper + ?Sized,
    {
        tracing::debug!("Counting down from {}", self.start);

        for step in self.steps() {
            out.write_all(render(&step).as_bytes())?;
            out.flush()?;
            tracing::trace!("Wrote {:?}", step);

            if step.pauses_after() {
                Sleeper::sleep(sleeper);
            }
        }

        tracing::debug!("Countdown finished");
        Ok(())
    }

    pub async fn run_async<W, A>(&self, out: &mut W, sleeper: &mut A) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
        A: AsyncSleeper + ?Sized,
    {
        use tokio::io::AsyncWriteExt;

        tracing::debug!("Counting down from {} (async)", self.start);

        for step in self.steps() {
            out.write_all(render(&step).as_bytes()).await?;
            out.flush().await?;
            tracing::trace!("Wrote {:?}", step);

            if step.pauses_after() {
                AsyncSleeper::sleep(sleeper).await;
            }
        }

        tracing::debug!("Countdown finished");
        Ok(())
    }
}

fn render(step: &Step) -> String {
    match step {
        Step::Number(n) => format!("{}\n", n),
        Step::Final(word) => word.clone(),
    }
}

/// Counts down on stdout with a one second pause that cannot be swapped out.
///
/// Nothing about this function can be observed from a test without waiting
/// three real seconds and capturing the process output. Prefer [`countdown_with`].
pub fn countdown_fixed() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    countdown(&mut out)
}

/// Counts down into `out`. The one second pause is still hard-wired.
pub fn countdown<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    Countdown::default().run(out, &mut DefaultSleeper::default())
}

/// Counts down into `out`, delegating every pause to `sleeper`.
pub fn countdown_with<W, S>(out: &mut W, sleeper: &mut S) -> Result<()>
where
    W: Write + ?Sized,
    S: Sleeper + ?Sized,
{
    Countdown::default().run(out, sleeper)
}
