//! Principal domain
//!
//! The authenticated entity is identified solely by its numeric `uid`.

mod directory;

pub use directory::PrincipalDirectory;

#[cfg(test)]
pub use directory::MockPrincipalDirectory;
