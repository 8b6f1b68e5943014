pub mod error;
pub mod modify;
pub mod patch;
pub mod upstream;

pub use modify::{fetch_and_modify, modify_ics};
