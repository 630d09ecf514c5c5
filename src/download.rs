use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::fs;
use std::io::Write;
use std::path::Path;

/// What happened to a single export fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The full body was written to the destination file.
    Saved { bytes: u64 },
    /// The server answered with a non-200 status. Nothing was written.
    Rejected { status: StatusCode },
}

/// Performs one blocking GET against `url` and, on a 200 response, writes
/// the whole body to `destination`, truncating any existing file.
///
/// A non-200 status is a normal outcome, not an error. Network failures and
/// filesystem failures after the status check propagate as errors. The body
/// is read fully before the destination is opened, so the file is never
/// created or modified unless a complete 200 response arrived.
pub fn fetch_and_save(url: &str, destination: &Path) -> Result<DownloadOutcome> {
    log::info!("Downloading from {} to {:?}", url, destination);

    let response = reqwest::blocking::get(url)
        .context("Failed to reach the export endpoint")?;

    let status = response.status();
    if status != StatusCode::OK {
        log::warn!("Export request rejected with status {}", status);
        return Ok(DownloadOutcome::Rejected { status });
    }

    let bytes = response.bytes()
        .context("Failed to read response body")?;

    let mut file = fs::File::create(destination)
        .context("Failed to create output file")?;
    file.write_all(&bytes)
        .context("Failed to write downloaded data")?;

    log::info!("Download completed: {} bytes", bytes.len());
    Ok(DownloadOutcome::Saved {
        bytes: bytes.len() as u64,
    })
}
