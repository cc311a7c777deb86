use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use vb2arduino::config::Config;
use vb2arduino::ir::BlockMarker;
use vb2arduino::project;

#[derive(Parser)]
#[command(name = "vb2arduino", about = "VB6-like to Arduino transpiler")]
struct Cli {
    /// VB-like source file
    input: PathBuf,

    /// Output directory (default: from config or "generated")
    #[arg(long)]
    out: Option<PathBuf>,

    /// PlatformIO board id (e.g., esp32-s3-devkitm-1)
    #[arg(long)]
    board: Option<String>,

    /// Run `pio run` after transpiling
    #[arg(long)]
    build: bool,

    /// Run `pio run --target upload`
    #[arg(long)]
    upload: bool,

    /// Upload port for PlatformIO
    #[arg(long)]
    port: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn marker_name(marker: BlockMarker) -> &'static str {
    match marker {
        BlockMarker::If => "If",
        BlockMarker::For => "For",
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["vb2arduino.config.json", "config/vb2arduino.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(out) = cli.out {
        config.out_dir = out;
    }
    if cli.board.is_some() {
        config.board = cli.board;
    }
    if cli.port.is_some() {
        config.port = cli.port;
    }

    let source = project::read_source(&cli.input).unwrap_or_else(|e| die(&e.to_string()));
    let translation = vb2arduino::transpile(&source);

    for marker in &translation.open_blocks {
        eprintln!("validation warning: {} block not closed", marker_name(*marker));
    }
    if translation.unmatched_closers > 0 {
        eprintln!(
            "validation warning: {} closer(s) without a matching opener",
            translation.unmatched_closers
        );
    }

    let sketch = project::write_sketch(&config.out_dir, &translation.cpp)
        .unwrap_or_else(|e| die(&e.to_string()));
    println!("[ok] Transpiled to {}", sketch.display());

    if !cli.build && !cli.upload {
        return;
    }

    let board = match project::require_board(&config) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("[error] {}", e);
            process::exit(e.exit_code());
        }
    };

    match project::ensure_platformio_ini(&config.out_dir, &config, board) {
        Ok(Some(ini)) => println!("[init] Wrote {}", ini.display()),
        Ok(None) => {}
        Err(e) => die(&e.to_string()),
    }

    let args = project::pio_args(&config.out_dir, board, config.port.as_deref(), cli.upload);
    if let Err(e) = project::run_pio(&config.pio, &args) {
        eprintln!("error: {}", e);
        process::exit(e.exit_code());
    }
}
