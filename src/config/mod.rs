// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cpl.
//!
//! This module handles loading, parsing, and merging configuration from
//! files and defaults, and captures the environment identities used by
//! the exemption predicate.

pub mod default;
mod env;
mod loader;
mod schema;

pub use env::{EnvContext, ACTOR_VAR, RELEASE_BOT_VAR};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_configs,
    parse_config,
};
pub use schema::*;
