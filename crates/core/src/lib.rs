//! Domain building blocks shared by the storage and HTTP crates.
//!
//! Nothing in here touches the filesystem: the sanitizer and validators are
//! pure functions so both `glossary-db` and `glossary-api` can lean on them.

pub mod error;
pub mod naming;
pub mod types;
pub mod validation;
