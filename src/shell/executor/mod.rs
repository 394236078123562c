mod builtin;
#[allow(clippy::module_inception)]
mod executor;

pub use executor::{Executor, Outcome};
