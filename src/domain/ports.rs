use async_trait::async_trait;

/// Blocks once between two countdown lines.
///
/// The countdown only knows that it has to pause, not for how long or how.
/// Production code passes a real timer, tests pass something that records calls.
pub trait Sleeper {
    fn sleep(&mut self);
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self) {
        (**self).sleep();
    }
}

#[async_trait]
pub trait AsyncSleeper: Send {
    async fn sleep(&mut self);
}
