//! Contact log CSV export

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::ServiceRecord;

/// Write the combined contact list with the emergency log column layout
/// (Name, Phone, Amenity, Latitude, Longitude, Distance (km)).
pub fn write_contacts_csv(path: &Path, records: &[ServiceRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .context("failed to write contact row")?;
    }

    writer.flush().context("failed to flush contact export")?;
    Ok(())
}
