//! Domain logic - pure commit and version rules independent of git operations

pub mod commit;
pub mod prerelease;
pub mod version;

pub use commit::{CommitMessage, Footer};
pub use prerelease::PreRelease;
pub use version::{bump, ReleaseLevel};
