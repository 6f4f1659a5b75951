use std::time::Duration;

pub const DEFAULT_START: u32 = 3;
pub const DEFAULT_FINAL_WORD: &str = "Go!";
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// One line of a countdown, in the order it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A number, written with a trailing newline and followed by a pause.
    Number(u32),
    /// The closing word, written without a trailing newline. Never followed by a pause.
    Final(String),
}

impl Step {
    pub fn pauses_after(&self) -> bool {
        matches!(self, Step::Number(_))
    }
}
