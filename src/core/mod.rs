pub mod countdown;
pub mod sum;

pub use crate::domain::model::{Step, DEFAULT_FINAL_WORD, DEFAULT_PAUSE, DEFAULT_START};
pub use crate::domain::ports::{AsyncSleeper, Sleeper};
pub use crate::utils::error::Result;
