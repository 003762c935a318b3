//! Common test utilities and helpers

use assert_cmd::Command;
use std::path::Path;

/// A `sortlab` command isolated from the user's config files and environment
pub fn sortlab_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sortlab").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("SORTLAB_ALGORITHM")
        .env_remove("SORTLAB_FORMAT")
        .env_remove("SORTLAB_LOG_LEVEL");
    cmd
}
