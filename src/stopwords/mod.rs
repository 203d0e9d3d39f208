pub mod set;

pub use set::{StopWordError, StopWordSet};
