//! Shared models and configuration for `sitelink`.
//!
//! * **[`site`]**: site identifiers, host candidates and the resolved candidate set.
//! * **[`config`]**: runtime knobs shared by the engine and the terminal front end.

pub mod config;
pub mod site;
