use anyhow::Result;
use chrono::Local;
use gym_audience::{config, logging, preview, Config, Session};
use std::{env, path::PathBuf, time::Instant};
use tracing::{info, warn};

const USAGE: &str = "Usage: gym-audience <INPUT_CSV> [OUTPUT_DIR]";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) config + logging ─────────────────────────────────────────
    let (mut cfg, rejected) = Config::load()?;
    logging::init(&cfg.log_level);
    config::log_rejected(&rejected);

    // usage: gym-audience <INPUT_CSV> [OUTPUT_DIR]
    let mut args = env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        anyhow::bail!(USAGE);
    };
    if let Some(dir) = args.next() {
        cfg.out_dir = PathBuf::from(dir);
    }
    info!(
        input = %input.display(),
        out_dir = %cfg.out_dir.display(),
        "startup"
    );

    // ─── 2) upload + convert ─────────────────────────────────────────
    let start = Instant::now();
    let mut session = Session::new();
    session.upload(&input);
    let Some(summary) = session.convert().await? else {
        anyhow::bail!(USAGE);
    };
    if summary.rows_kept == 0 {
        warn!("no rows with an email or cell value; output holds only the header");
    }
    info!(
        summary = %serde_json::to_string(&summary)?,
        elapsed = ?start.elapsed(),
        "conversion finished"
    );

    // ─── 3) preview ──────────────────────────────────────────────────
    println!("{}", preview::render(session.converted(), cfg.preview_rows));

    // ─── 4) download ─────────────────────────────────────────────────
    if let Some(path) = session.download(&cfg.out_dir)? {
        println!(
            "\nwrote {} ({} row(s)) at {}",
            path.display(),
            summary.rows_kept,
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}
