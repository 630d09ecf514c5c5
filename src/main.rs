mod download;

use anyhow::Result;
use log::{error, info};
use reqwest::StatusCode;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;
use std::path::Path;

use download::{fetch_and_save, DownloadOutcome};

const EXPORT_URL: &str =
    "https://auth-db1668.hstgr.io/index.php?route=/database/export&db=369860774_cmdc&lang=en";
const OUTPUT_FILE: &str = "database_export.sql";

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("cmdc")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "db_export_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(LevelFilter::Info, config, fs::File::create(log_file)?)?;

    Ok(())
}

fn failure_line(status: StatusCode) -> String {
    format!(
        "Failed to download the database. Status code: {}",
        status.as_u16()
    )
}

fn main() -> Result<()> {
    setup_logging()?;

    info!("cmdc database export starting");
    info!("Export URL: {}", EXPORT_URL);

    match fetch_and_save(EXPORT_URL, Path::new(OUTPUT_FILE)) {
        Ok(DownloadOutcome::Saved { bytes }) => {
            info!("Export saved to {}: {} bytes", OUTPUT_FILE, bytes);
            println!("Database exported successfully.");
            Ok(())
        }
        Ok(DownloadOutcome::Rejected { status }) => {
            error!("Export rejected with status {}", status);
            println!("{}", failure_line(status));
            std::process::exit(1);
        }
        Err(e) => {
            error!("Export failed: {:#}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_line_carries_the_status_code() {
        let line = failure_line(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            line,
            "Failed to download the database. Status code: 503"
        );
    }
}
