use crate::design::RawConstruct;
use crate::error::ClipResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads a constructs CSV: one header row, then `id,element,element,...` per row.
/// Blank cells are dropped; the first blank line or row left with no elements ends the batch.
pub fn load_constructs<P: AsRef<Path>>(path: P) -> ClipResult<Vec<RawConstruct>> {
    let path = path.as_ref();
    debug!("Loading constructs from: {}", path.display());
    let file = File::open(path)?;
    load_constructs_from_reader(file)
}

pub fn load_constructs_from_reader<R: Read>(mut reader: R) -> ClipResult<Vec<RawConstruct>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(until_blank_line(&text).as_bytes());

    let mut rows = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let cells: Vec<&str> = rec.iter().map(str::trim).filter(|c| !c.is_empty()).collect();

        if cells.len() < 2 {
            debug!("Row {} has no elements; end of construct list", row_idx + 2);
            break;
        }

        rows.push(RawConstruct {
            id: cells[0].to_string(),
            elements: cells[1..].iter().map(|s| s.to_string()).collect(),
        });
    }

    info!("Loaded {} constructs", rows.len());
    Ok(rows)
}

/// Everything before the first blank line after the header. The csv reader
/// would otherwise skip blank lines and keep reading.
fn until_blank_line(text: &str) -> &str {
    let mut end = 0;
    for (i, line) in text.split_inclusive('\n').enumerate() {
        if i > 0 && line.trim().is_empty() {
            debug!("Blank line {}; end of construct list", i + 1);
            return &text[..end];
        }
        end += line.len();
    }
    text
}
