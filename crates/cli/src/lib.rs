pub mod cli;
pub mod discovery;
pub mod error;
pub mod marker;
pub mod merge;
pub mod order;
pub mod properties;
pub mod record;
pub mod report;
pub mod summary;

pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use properties::{Properties, Property};
pub use record::{Archive, CaseStatus, TestCase, TestSuite};

#[cfg(test)]
pub mod test_utils;
