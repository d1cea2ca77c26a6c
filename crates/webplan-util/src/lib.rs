#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared utilities for webplan.
//!
//! Pure helpers with no logging dependencies; the CLI owns logging.

pub mod fs;
pub mod hash;
