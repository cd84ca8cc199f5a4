/*!
 * Export of a single project's display fields.
 *
 * The document-rendering collaborator receives a flat, ordered mapping of
 * localized label to value; building that mapping is this module's job.
 * Rendering itself (PDF layout, opening the file) happens elsewhere and
 * never touches persisted data.
 */

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::database::ProjectRecord;
use crate::localization::Localizer;

/// Build the ordered label-to-value mapping for one project
///
/// Labels are looked up in the active catalog; an unmapped label key comes
/// back verbatim, so the export never fails on a missing translation.
pub fn project_fields(record: &ProjectRecord, localizer: &Localizer) -> Vec<(String, String)> {
    vec![
        (
            localizer.translate("project_id").to_string(),
            record.id.to_string(),
        ),
        (
            localizer.translate("project_name").to_string(),
            record.name.clone(),
        ),
        (
            localizer.translate("project_location").to_string(),
            record.location.clone(),
        ),
        (
            localizer.translate("project_created").to_string(),
            record.created_at.clone(),
        ),
    ]
}

/// Write a plain-text summary document for one project
///
/// This is the handoff format for the rendering collaborator; a failure
/// here is reported to the caller and leaves the store untouched.
pub fn write_summary<P: AsRef<Path>>(
    path: P,
    record: &ProjectRecord,
    localizer: &Localizer,
) -> Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    writeln!(file, "{}", localizer.translate("export_title"))?;
    writeln!(file)?;

    for (label, value) in project_fields(record, localizer) {
        writeln!(file, "{}: {}", label, value)?;
    }

    Ok(())
}
