use crate::error::{ClipForgeError, ClipResult};
use crate::plate::WellAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Where a linker or part stock sits on the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLocation {
    pub well: WellAddress,
    /// Deck slot holding the source plate.
    pub plate: String,
    /// ng/µL, when the source sheet lists one.
    pub concentration: Option<f64>,
}

pub trait SourceInventory {
    fn locate(&self, name: &str) -> Option<&StockLocation>;
}

impl SourceInventory for HashMap<String, StockLocation> {
    fn locate(&self, name: &str) -> Option<&StockLocation> {
        self.get(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsvInventory {
    stocks: HashMap<String, StockLocation>,
}

impl CsvInventory {
    /// Loads one source sheet per plate; the i-th file sits at `deck_positions[i]`.
    pub fn load<P: AsRef<Path>>(paths: &[P], deck_positions: &[String]) -> ClipResult<Self> {
        if paths.len() > deck_positions.len() {
            return Err(ClipForgeError::TooManySourcePlates {
                count: paths.len(),
                limit: deck_positions.len(),
            });
        }

        let mut inventory = Self::default();
        for (path, slot) in paths.iter().zip(deck_positions) {
            let path = path.as_ref();
            let file = File::open(path)?;
            let n = inventory.add_from_reader(file, slot)?;
            info!("Source plate {} (slot {}): {} stocks", path.display(), slot, n);
        }
        Ok(inventory)
    }

    /// Reads `name,well[,concentration]` rows after a header. Returns rows added.
    pub fn add_from_reader<R: Read>(&mut self, reader: R, plate: &str) -> ClipResult<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut added = 0;
        for result in rdr.records() {
            let rec = result?;
            let name = rec.get(0).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let well: WellAddress = rec.get(1).unwrap_or_default().parse()?;

            let concentration = match rec.get(2).map(str::trim) {
                Some(raw) if !raw.is_empty() => match raw.parse::<f64>() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        warn!("Ignoring unreadable concentration '{}' for {}", raw, name);
                        None
                    }
                },
                _ => None,
            };

            let location = StockLocation {
                well,
                plate: plate.to_string(),
                concentration,
            };
            if let Some(prev) = self.stocks.insert(name.to_string(), location) {
                warn!(
                    "'{}' listed twice; slot {} {} replaced by slot {} {}",
                    name, prev.plate, prev.well, plate, well
                );
            }
            added += 1;
        }
        Ok(added)
    }

    pub fn insert(&mut self, name: impl Into<String>, location: StockLocation) {
        self.stocks.insert(name.into(), location);
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl SourceInventory for CsvInventory {
    fn locate(&self, name: &str) -> Option<&StockLocation> {
        self.stocks.get(name)
    }
}
