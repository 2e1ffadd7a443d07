//! Helpers to run the binaries of the solver in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Distinguishes the output files of runs within one test process.
static RUN_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// The captured result of one run of a binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{instance_name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn run_colouring_solver(instance_name: &str, args: &[&str]) -> Run {
    run_binary(
        env!("CARGO_BIN_EXE_colouring-solver"),
        "colouring",
        args,
        &[instance_path(instance_name)],
    )
}

pub(crate) fn run_shortest_path(instance_names: &[&str], args: &[&str]) -> Run {
    let instances = instance_names
        .iter()
        .map(|name| instance_path(name))
        .collect::<Vec<_>>();
    run_binary(
        env!("CARGO_BIN_EXE_shortest-path"),
        "shortest-path",
        args,
        &instances,
    )
}

/// Runs `executable` with `args` followed by the instance paths. Output is redirected to files in
/// the temporary directory, which are removed again after they are read.
fn run_binary(
    executable: impl AsRef<Path>,
    prefix: &str,
    args: &[&str],
    instances: &[PathBuf],
) -> Run {
    let name = instances
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy())
        .collect::<Vec<_>>()
        .join("+");
    let run = RUN_COUNTER.fetch_add(1, Ordering::Relaxed);
    let stem = format!("{prefix}.{name}.{}.{run}", std::process::id());
    let out_dir = std::env::temp_dir();
    let log_file_path = out_dir.join(format!("{stem}.log"));
    let err_file_path = out_dir.join(format!("{stem}.err"));

    let mut command = Command::new(executable.as_ref());
    let _ = command.args(args).args(instances);

    let mut child = command
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run binary.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("binary took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting binary: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");
    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    Run {
        status,
        stdout,
        stderr,
    }
}
