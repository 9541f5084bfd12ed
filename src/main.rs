use anyhow::Result;
use radfilter::filter::filter_csv_files;
use std::{
    io::{self, Write},
    path::Path,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) ask for the input directory ──────────────────────────────
    print!("Enter the path to the directory containing the CSV files: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let dir = line.trim();

    if !Path::new(dir).is_dir() {
        error!("{} is not a valid directory", dir);
        return Ok(());
    }

    // ─── 3) filter every .csv file in place ──────────────────────────
    info!(dir = %dir, "filtering csv files");
    filter_csv_files(Path::new(dir))?;
    info!("done");
    Ok(())
}
