//! File-level conversion: JSON document in, event timeline file out

use crate::timeline::write_timeline;
use crate::{extract_events, Error, EventLine, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem to name the timeline file
const OUTPUT_SUFFIX: &str = "_events.txt";

/// UTF-8 byte-order mark some exporters write ahead of the document
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Conversion options
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Write the column header line before the events
    pub header: bool,
}

/// Returns true if the path ends in `.json` (ASCII case-insensitive)
pub fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Derives `<path-without-extension>_events.txt` next to the input
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// Opens and parses an exported asset document
pub fn load_document(path: &Path) -> Result<Value> {
    let unreadable = |reason: String| Error::FileUnreadable {
        path: path.to_path_buf(),
        reason,
    };

    if !has_json_extension(path) {
        return Err(unreadable("not a .json file".to_string()));
    }

    let mut file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
    let metadata = file.metadata().map_err(|e| unreadable(e.to_string()))?;
    if !metadata.is_file() {
        return Err(unreadable("not a regular file".to_string()));
    }

    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut bytes).map_err(|e| unreadable(e.to_string()))?;

    debug!("parsing {} ({} bytes)", path.display(), bytes.len());
    let document = serde_json::from_slice(strip_bom(&bytes))?;
    Ok(document)
}

/// Drops a leading UTF-8 byte-order mark
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Loads a document and extracts its event timeline
pub fn extract_file(path: &Path) -> Result<Vec<EventLine>> {
    let document = load_document(path)?;
    extract_events(&document)
}

/// Converts one JSON document into its sibling `_events.txt` file.
///
/// Nothing is written unless extraction succeeds. Returns the output path.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let lines = extract_file(path)?;
    let out = output_path(path);

    let file = File::create(&out)?;
    write_timeline(BufWriter::new(file), &lines, options.header)?;
    info!("wrote {} events to {}", lines.len(), out.display());

    Ok(out)
}
