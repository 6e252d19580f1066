use slugeq_logger::{Logger, parse_level};

#[test]
fn configured_level_drives_console_logger() {
    let level = parse_level(" debug ").unwrap();

    let logger = Logger::builder().name("slugeq-console").console(true).level(level).init().unwrap();
    tracing::debug!(element_id = 1, "Decided by content type");

    assert!(logger.guard().is_none());
}
