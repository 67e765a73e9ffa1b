//! Archive export and import for entity collections.
//!
//! An export is a gzipped tar archive built fully in memory, containing a
//! single pretty-printed JSON document named after the collection:
//!
//! ```json
//! { "<plural>": [ ... ], "exportDate": 1700000000, "totalCount": 6 }
//! ```
//!
//! `read_archive` is the inverse and exists so an exported collection can
//! be loaded back and compared structurally against the live store.

use std::io::Read;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{MarketError, MarketResult};

/// Parsed contents of an exported archive.
#[derive(Debug, Clone)]
pub struct ExportManifest<T> {
    pub records: Vec<T>,
    pub export_date: u64,
    pub total_count: usize,
}

/// Build the archive bytes for a collection snapshot.
///
/// `collection` is the plural entity name; it becomes both the document
/// key and the file name inside the archive (`<collection>.json`).
pub fn write_archive<T: Serialize>(
    collection: &str,
    records: &[T],
    exported_at: u64,
) -> MarketResult<Vec<u8>> {
    let mut doc = Map::new();
    doc.insert(
        collection.to_owned(),
        serde_json::to_value(records).map_err(codec_err)?,
    );
    doc.insert("exportDate".to_owned(), Value::from(exported_at));
    doc.insert("totalCount".to_owned(), Value::from(records.len() as u64));
    let json = serde_json::to_vec_pretty(&Value::Object(doc)).map_err(codec_err)?;

    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_gnu();
    header.set_size(json.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(exported_at);
    header.set_cksum();
    builder
        .append_data(&mut header, format!("{collection}.json"), json.as_slice())
        .map_err(archive_err)?;

    let encoder = builder.into_inner().map_err(archive_err)?;
    encoder.finish().map_err(archive_err)
}

/// Parse an archive produced by `write_archive` back into records.
pub fn read_archive<T: DeserializeOwned>(
    collection: &str,
    bytes: &[u8],
) -> MarketResult<ExportManifest<T>> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let wanted = format!("{collection}.json");

    for entry in archive.entries().map_err(archive_err)? {
        let mut entry = entry.map_err(archive_err)?;
        let path = entry.path().map_err(archive_err)?;
        if path.to_string_lossy() != wanted {
            continue;
        }

        let mut json = String::new();
        entry.read_to_string(&mut json).map_err(archive_err)?;
        let mut doc: Map<String, Value> = serde_json::from_str(&json).map_err(codec_err)?;

        let records = doc.remove(collection).ok_or_else(|| {
            MarketError::Export(format!("archive document is missing the '{collection}' key"))
        })?;
        let records: Vec<T> = serde_json::from_value(records).map_err(codec_err)?;
        let export_date = doc
            .get("exportDate")
            .and_then(Value::as_u64)
            .ok_or_else(|| MarketError::Export("archive document is missing 'exportDate'".into()))?;
        let total_count = doc
            .get("totalCount")
            .and_then(Value::as_u64)
            .ok_or_else(|| MarketError::Export("archive document is missing 'totalCount'".into()))?
            as usize;

        return Ok(ExportManifest {
            records,
            export_date,
            total_count,
        });
    }

    Err(MarketError::Export(format!(
        "archive has no entry named {wanted}"
    )))
}

fn codec_err(e: serde_json::Error) -> MarketError {
    MarketError::Export(format!("JSON codec failed: {e}"))
}

fn archive_err(e: std::io::Error) -> MarketError {
    MarketError::Export(format!("archive I/O failed: {e}"))
}
