#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # folio
//!
//! Native tooling for the folio portfolio page: configuration checking and
//! headless replay of recorded page-interaction traces through the
//! controller from `folio-core`.

pub use folio_core;

pub mod cli;
pub mod commands;
