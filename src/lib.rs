pub use crate::errors::{ErrorKind, HarnessError};

pub mod assert;
pub mod cli;
pub mod errors;
pub mod runtime;
pub mod suite;
pub mod test;
