//! Helpers for choosing candidate paths and naming asset destinations.
//!
//! The responsibilities are split into focused submodules so that candidate selection,
//! destination naming and test-file filtering can be tested independently. The same code is
//! shared between the build-time collector and the runtime resolver.

mod bundle;
mod candidates;
mod filters;

pub use bundle::{destination_dir, relative_to_slash};
pub use candidates::{first_existing_dir, first_existing_file};
pub use filters::is_test_file;
