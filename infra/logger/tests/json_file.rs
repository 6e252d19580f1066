use slugeq_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_output_is_line_delimited() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("slugeq-json")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&dir)
        .json(true)
        .init()?;
    assert!(logger.guard().is_some());

    tracing::info!(element_id = 42, enabled = false, "Override recorded");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let file = fs::read_dir(&dir)?
        .flatten()
        .map(|e| e.path())
        .find(|p| p.extension().and_then(|e| e.to_str()) == Some("log"))
        .ok_or("no log file written")?;

    let line = fs::read_to_string(file)?;
    let first = line.lines().next().ok_or("empty log file")?;
    let event: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(event["fields"]["message"], "Override recorded");
    assert_eq!(event["fields"]["element_id"], 42);

    Ok(())
}
