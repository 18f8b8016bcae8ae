//! Stand-in for the external put command.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct RecordingStub {
    pub program: PathBuf,
    args_file: PathBuf,
}

impl RecordingStub {
    /// Arguments of the last run, one entry per argument.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Writes an executable `fake-put` script into `dir` that records its
/// arguments and exits with `exit_code`.
pub fn recording(dir: &Path, exit_code: i32) -> RecordingStub {
    let program = dir.join("fake-put");
    let args_file = dir.join("fake-put.args");
    let script = format!(
        "#!/bin/sh\n: > '{args}'\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{args}'; done\nexit {exit_code}\n",
        args = args_file.display(),
    );
    fs::write(&program, script).unwrap();
    let mut perms = fs::metadata(&program).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&program, perms).unwrap();
    RecordingStub { program, args_file }
}
