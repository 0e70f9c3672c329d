// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Embed the git SHA and commit date for `cpl version`. Builds from a
/// source tarball have no git metadata and fall back to the crate version.
fn main() {
    let emitted = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit();

    if let Err(e) = emitted {
        println!("cargo:warning=cpl: git metadata unavailable: {}", e);
    }
}
