use std::path::PathBuf;
use std::process::{Command, ExitStatus};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_fsj") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "fsj.exe" } else { "fsj" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve fsj binary path for integration test"),
    }
}

pub fn run_cli(args: &[&str]) -> CmdResult {
    let output = Command::new(resolve_bin_path())
        .args(args)
        .output()
        .expect("failed to spawn fsj binary");

    CmdResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
