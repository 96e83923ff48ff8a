mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::*;
pub use fixtures::*;
pub use test_app::*;
