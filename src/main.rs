use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use tablero::api::client::HttpBoardClient;
use tablero::audio::{AudioGate, ChimeDriver};
use tablero::board::{Board, driver};
use tablero::config::BoardSettings;
use tablero::traits::AlertSink;
use tablero::ui::command::{Input, USAGE, parse_input};
use tablero::ui::console::{ConsoleNotifier, ConsoleView};
use tablero::util::logging::init_logging;

/// Shared display and control board for the kiosk call-service system.
#[derive(Parser, Debug)]
#[command(name = "tablero", version, about)]
struct Args {
    /// Base URL of the kiosk backend.
    #[arg(long)]
    server_url: Option<String>,

    /// Poll period in milliseconds.
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Alert sound file (wav/ogg/mp3/flac).
    #[arg(long)]
    sound: Option<PathBuf>,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = BoardSettings::load();
    if let Some(url) = args.server_url {
        settings.server_url = url;
    }
    if let Some(ms) = args.poll_interval_ms {
        settings.poll_interval_ms = ms;
    }
    if let Some(sound) = args.sound {
        settings.sound_path = Some(sound);
    }
    if let Some(dir) = args.log_dir {
        settings.log_dir = Some(dir);
    }

    init_logging(settings.log_dir.as_deref(), args.verbose)?;
    info!("tablero iniciando, backend {}", settings.server_url);

    let chime: Option<Box<dyn AlertSink>> = match settings.sound_path.as_deref() {
        Some(path) => match ChimeDriver::new(path) {
            Ok(chime) => Some(Box::new(chime)),
            Err(err) => {
                warn!("sin sonido de alerta: {err:#}");
                None
            }
        },
        None => None,
    };
    let audio = Arc::new(AudioGate::new(chime));

    let api = HttpBoardClient::new(settings.server_url.clone())?;
    let board = Board::new(
        api,
        Box::new(ConsoleView::new()),
        Box::new(ConsoleNotifier),
        Arc::clone(&audio),
    );
    let handle = driver::spawn(board, Duration::from_millis(settings.poll_interval_ms));

    println!("{USAGE}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        // Any operator input is the interaction that unlocks audio.
        audio.unlock();
        match parse_input(&line) {
            Input::Command(cmd) => {
                if !handle.send(cmd).await {
                    break;
                }
            }
            Input::Quit => break,
            Input::Help => println!("{USAGE}"),
            Input::Empty => {}
        }
    }

    handle.shutdown().await;
    Ok(())
}
