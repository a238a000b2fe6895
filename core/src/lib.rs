//! # Site reachability engine
//!
//! Turns a site identifier into an ordered list of devices that answer a ping.
//!
//! * **[`resolver`]**: site identifier to candidate hosts.
//! * **[`prober`]**: one bounded liveness check per host.
//! * **[`scanner`]**: fans probes out under a concurrency cap and keeps candidate order.
//! * **[`menu`]**: the numbered view of reachable hosts and selection parsing.
//! * **[`launcher`]** and **[`credentials`]**: the outside world (SSH client, keyring).

pub mod credentials;
pub mod error;
pub mod launcher;
pub mod menu;
pub mod prober;
pub mod resolver;
pub mod scanner;
