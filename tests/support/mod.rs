/*!
Test support helpers shared across integration tests.

- fake_tf(): path to a shell script standing in for `tf` (Unix only)
- scenario(..): a scratch working directory whose control files steer the fake

The fake echoes every argument as `arg:<value>` on stdout, then:
- `quiet` present: skip the argument echo
- `workfold.txt` present and first argument is `workfold`: print its content
- `stderr.txt` present: copy it to stderr
- `exit-code.txt` present: exit with that code (default 0)

The script is written once per test process before any test spawns it, so a parallel fork
cannot inherit an open write handle to it ("text file busy").
*/

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tempfile::TempDir;

const FAKE_TF: &str = r#"#!/bin/sh
if [ ! -f quiet ]; then
  for a in "$@"; do printf 'arg:%s\n' "$a"; done
fi
if [ "$1" = "workfold" ] && [ -f workfold.txt ]; then cat workfold.txt; fi
if [ -f stderr.txt ]; then cat stderr.txt >&2; fi
if [ -f exit-code.txt ]; then exit "$(cat exit-code.txt)"; fi
exit 0
"#;

static FAKE_TF_PATH: Lazy<PathBuf> = Lazy::new(|| {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("fake-tf-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create fake tf dir");
    let path = dir.join("tf");
    fs::write(&path, FAKE_TF).expect("write fake tf");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tf");
    }
    path
});

pub fn fake_tf() -> &'static Path {
    FAKE_TF_PATH.as_path()
}

/// Scratch working directory for one test.
pub struct Scenario {
    pub dir: TempDir,
}

impl Scenario {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn quiet(self) -> Self {
        fs::write(self.path().join("quiet"), "").expect("write quiet");
        self
    }

    pub fn exit_code(self, code: i32) -> Self {
        fs::write(self.path().join("exit-code.txt"), code.to_string()).expect("write exit code");
        self
    }

    pub fn stderr(self, text: &str) -> Self {
        fs::write(self.path().join("stderr.txt"), text).expect("write stderr");
        self
    }

    pub fn workfold(self, text: &str) -> Self {
        fs::write(self.path().join("workfold.txt"), text).expect("write workfold");
        self
    }
}

pub fn scenario() -> Scenario {
    // Force script creation before the first spawn in this process.
    let _ = fake_tf();
    Scenario {
        dir: tempfile::tempdir().expect("tmpdir"),
    }
}

/// Arguments the fake received, in order.
pub fn echoed_args(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|l| l.strip_prefix("arg:"))
        .map(str::to_string)
        .collect()
}
