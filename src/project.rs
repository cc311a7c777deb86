use crate::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

pub const SKETCH_FILE: &str = "main.cpp";
pub const PIO_INI: &str = "platformio.ini";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("--board is required for build/upload")]
    MissingBoard,
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with status {code}")]
    ToolFailed { program: String, code: i32 },
}

impl ProjectError {
    /// Process exit code the binary should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProjectError::ToolFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let wrap = |source| ProjectError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, content).map_err(wrap)
}

/// Writes the generated sketch into `out_dir`, creating it if needed.
pub fn write_sketch(out_dir: &Path, cpp: &str) -> Result<PathBuf> {
    let path = out_dir.join(SKETCH_FILE);
    write_file(&path, cpp)?;
    Ok(path)
}

/// Board id needed for build/upload.
pub fn require_board(config: &Config) -> Result<&str> {
    config.board.as_deref().ok_or(ProjectError::MissingBoard)
}

pub fn platformio_ini(config: &Config, board: &str) -> String {
    format!(
        "[env:{board}]\nplatform = {}\nboard = {board}\nframework = {}\nbuild_src_dir = .\n",
        config.platform, config.framework
    )
}

/// Creates a minimal `platformio.ini` unless one exists. Returns the path
/// when a file was written.
pub fn ensure_platformio_ini(out_dir: &Path, config: &Config, board: &str) -> Result<Option<PathBuf>> {
    let path = out_dir.join(PIO_INI);
    if path.exists() {
        return Ok(None);
    }
    write_file(&path, &platformio_ini(config, board))?;
    Ok(Some(path))
}

/// Arguments for `pio run`; board and port pass through unmodified.
pub fn pio_args(out_dir: &Path, board: &str, port: Option<&str>, upload: bool) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "--project-dir".to_string(),
        out_dir.display().to_string(),
        "--environment".to_string(),
        board.to_string(),
    ];
    if upload {
        args.extend(["--target".to_string(), "upload".to_string()]);
    }
    if let Some(port) = port {
        args.extend(["--upload-port".to_string(), port.to_string()]);
    }
    args
}

/// Runs PlatformIO. A non-zero exit (or death by signal, reported as 1)
/// becomes `ToolFailed`.
pub fn run_pio(program: &str, args: &[String]) -> Result<()> {
    println!("[cmd] {} {}", program, args.join(" "));
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| ProjectError::Spawn {
            program: program.to_string(),
            source,
        })?;
    match status.code().unwrap_or(1) {
        0 => Ok(()),
        code => Err(ProjectError::ToolFailed {
            program: program.to_string(),
            code,
        }),
    }
}
