// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from the repository for linting.

mod repo;

pub use repo::{get_commit_range, open_repo, Repository};
