use std::path::Path;

use crate::errors::CoreError;
use crate::models::holding::Holding;

/// Flat CSV row store for holdings.
///
/// Columns: `Symbol,Shares,Buy_Price` — the serde renames on [`Holding`]
/// map rows directly. Row order in the file is holding order.
pub struct CsvStore;

impl CsvStore {
    /// Load all holdings from the CSV at `path`.
    ///
    /// If the file does not exist yet, it is initialized with a header-only
    /// CSV and an empty list is returned, so a fresh session starts from a
    /// valid store. Unreadable media surface as `FileIO`, malformed rows
    /// as `Csv`.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Holding>, CoreError> {
        let path = path.as_ref();
        if !path.try_exists()? {
            Self::save(path, &[])?;
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut holdings = Vec::new();
        for row in reader.deserialize() {
            let holding: Holding = row?;
            holdings.push(holding);
        }
        Ok(holdings)
    }

    /// Write all holdings to the CSV at `path`, header first.
    ///
    /// Overwrites the whole file on every save — the store is small and
    /// row-oriented, and a full rewrite keeps it consistent with the
    /// in-memory portfolio.
    pub fn save(path: impl AsRef<Path>, holdings: &[Holding]) -> Result<(), CoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        if holdings.is_empty() {
            // serde-based writers only emit headers with the first record;
            // write them explicitly so an empty store still has its schema.
            writer.write_record(["Symbol", "Shares", "Buy_Price"])?;
        }
        for holding in holdings {
            writer.serialize(holding)?;
        }
        writer.flush()?;
        Ok(())
    }
}
