use slugeq_domain::element::ElementId;
use std::path::{Path, PathBuf};

/// Directory under the root holding the record shards.
pub(crate) const RECORDS_DIR: &str = "records";
pub(crate) const RECORD_EXT: &str = "json";
/// Infix marking in-flight temp files (`<id>.json.slugeqtmp.<pid>-<handle>.<n>`).
pub(crate) const TMP_MARKER: &str = ".slugeqtmp.";
/// Taken temp names skipped before an upsert gives up.
pub(crate) const MAX_TMP_ATTEMPTS: u32 = 16;

/// Physical path of the record for `id`: `<root>/records/<lo>/<hi>/<id>.json`.
///
/// Shards come from the two lowest bytes of the id so sequential ids spread evenly.
pub(crate) fn record_path(root: &Path, id: ElementId) -> PathBuf {
    let lo = id.0 & 0xff;
    let hi = (id.0 >> 8) & 0xff;
    root.join(RECORDS_DIR)
        .join(format!("{lo:02x}"))
        .join(format!("{hi:02x}"))
        .join(format!("{id}.{RECORD_EXT}"))
}

/// Recovers the element id from a record file name; temp files and strangers yield `None`.
pub(crate) fn parse_record_name(path: &Path) -> Option<ElementId> {
    if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_land_in_different_shards() {
        let root = Path::new("/data");
        let a = record_path(root, ElementId(1));
        let b = record_path(root, ElementId(2));

        assert_eq!(a, PathBuf::from("/data/records/01/00/1.json"));
        assert_ne!(a.parent(), b.parent());
    }

    #[test]
    fn high_byte_shards_large_ids() {
        let path = record_path(Path::new("r"), ElementId(0x1234));
        assert_eq!(path, PathBuf::from("r/records/34/12/4660.json"));
    }

    #[test]
    fn record_names_roundtrip_and_reject_temp_files() {
        let path = record_path(Path::new("r"), ElementId(4660));
        assert_eq!(parse_record_name(&path), Some(ElementId(4660)));
        assert_eq!(parse_record_name(Path::new("r/4660.json.slugeqtmp.3")), None);
        assert_eq!(parse_record_name(Path::new("r/notes.json")), None);
    }
}
