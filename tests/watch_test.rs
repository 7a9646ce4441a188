//! Watch mode against a real file system.

use std::fs;
use std::path::Path;
use std::time::Duration;

use component_metadata::{OUTPUT_PATH, Pipeline, ReactExtractor, RebuildWatcher, WatchError};
use tempfile::TempDir;

fn pipeline(root: &Path) -> Pipeline {
    Pipeline::new(root, Box::new(ReactExtractor::new().unwrap()))
}

/// Poll until `check` holds or the timeout expires.
async fn wait_for(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    check()
}

#[test]
fn test_build_requires_pipeline() {
    let result = RebuildWatcher::builder().build();
    assert!(matches!(result, Err(WatchError::InitFailed { .. })));
}

#[test]
fn test_build_requires_components_dir() {
    let temp_dir = TempDir::new().unwrap();
    let result = RebuildWatcher::builder()
        .pipeline(pipeline(temp_dir.path()))
        .build();
    assert!(matches!(result, Err(WatchError::PathWatchFailed { .. })));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_runs_when_ready_and_on_change() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    let atoms = root.join("src/components/atoms");
    fs::create_dir_all(&atoms).unwrap();
    fs::write(atoms.join("Legacy.md"), "# Legacy v1\n").unwrap();

    let watcher = RebuildWatcher::builder()
        .pipeline(pipeline(&root))
        .build()
        .unwrap();
    let handle = tokio::spawn(watcher.watch());

    let output = root.join(OUTPUT_PATH);
    let read = || fs::read_to_string(&output).unwrap_or_default();

    assert!(
        wait_for(Duration::from_secs(10), || read().contains("Legacy v1")).await,
        "initial run did not write metadata"
    );

    fs::write(atoms.join("Legacy.md"), "# Legacy v2\n").unwrap();
    assert!(
        wait_for(Duration::from_secs(10), || read().contains("Legacy v2")).await,
        "change did not trigger a rebuild"
    );

    fs::remove_file(atoms.join("Legacy.md")).unwrap();
    assert!(
        wait_for(Duration::from_secs(10), || !read().contains("Legacy")).await,
        "deletion did not trigger a rebuild"
    );

    handle.abort();
}

#[cfg(unix)]
#[test]
fn test_interrupt_stops_watch_mode_cleanly() {
    use std::process::{Command, Stdio};
    use std::time::Instant;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let atoms = root.join("src/components/atoms");
    fs::create_dir_all(&atoms).unwrap();
    fs::write(atoms.join("Legacy.md"), "# Legacy\n").unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_component-metadata"))
        .arg("--root")
        .arg(root)
        .arg("--watch")
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let output = root.join(OUTPUT_PATH);
    let deadline = Instant::now() + Duration::from_secs(10);
    while !output.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(output.exists(), "initial run did not write metadata");

    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(status.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let exit = loop {
        if let Some(exit) = child.try_wait().unwrap() {
            break exit;
        }
        if Instant::now() >= deadline {
            child.kill().unwrap();
            panic!("watch mode did not stop on interrupt");
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    assert!(exit.success());
}
