//! CSV export of the milestone catalog.

use std::path::Path;

use babylog_catalog::Milestone;
use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::error::{Error, Result};

/// UTF-8 byte-order mark, so spreadsheet applications detect the encoding.
const BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 8] = [
    "id",
    "title",
    "category",
    "monthFrom",
    "monthTo",
    "isCore",
    "detail",
    "prerequisiteId",
];

/// Render milestones as CSV, one row each, preceded by a byte-order mark.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn milestones_csv(milestones: &[Milestone]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BOM.to_vec());

    writer.write_record(HEADER)?;
    for m in milestones {
        let month_from = m.month_from.to_string();
        let month_to = m.month_to.to_string();
        writer.write_record([
            m.id,
            m.title,
            m.category.as_str(),
            month_from.as_str(),
            month_to.as_str(),
            if m.is_core { "TRUE" } else { "FALSE" },
            m.detail,
            m.prerequisite_id.unwrap_or(""),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))
}

/// The default export file name for a given day.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("babylog_milestones_{}.csv", today.format("%Y-%m-%d"))
}

/// Write the CSV export to `path`.
///
/// # Errors
///
/// Returns an error if the CSV cannot be rendered or the file cannot be written.
pub fn write_milestones_csv(path: &Path, milestones: &[Milestone]) -> Result<()> {
    let bytes = milestones_csv(milestones)?;
    std::fs::write(path, &bytes)?;
    info!("Exported {} milestones to {}", milestones.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use babylog_catalog::{Catalog, MilestoneCategory};

    use super::*;

    #[test]
    fn test_catalog_export_shape() {
        let catalog = Catalog::builtin();
        let bytes = milestones_csv(catalog.milestones()).unwrap();

        assert!(bytes.starts_with(BOM));
        let text = std::str::from_utf8(&bytes[BOM.len()..]).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "id,title,category,monthFrom,monthTo,isCore,detail,prerequisiteId");
        assert_eq!(lines.len(), catalog.milestones().len() + 1);
        assert!(!text.contains('\r'));

        let mut reader = csv::Reader::from_reader(&bytes[BOM.len()..]);
        let records: Vec<_> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(records.len(), catalog.milestones().len());
        let sit = records.iter().find(|r| &r[0] == "kdst_6_sit_support").unwrap();
        assert_eq!(&sit[2], "gross_motor");
        assert_eq!(&sit[7], "kdst_4_neck_control");
        assert!(&sit[5] == "TRUE" || &sit[5] == "FALSE");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let milestones = [Milestone {
            id: "quoted",
            title: "Says \"mama\"",
            detail: "Clear \"ma-ma\", with intent",
            month_from: 9,
            month_to: 12,
            category: MilestoneCategory::Language,
            is_core: true,
            prerequisite_id: None,
        }];
        let bytes = milestones_csv(&milestones).unwrap();
        let text = std::str::from_utf8(&bytes[BOM.len()..]).unwrap();

        assert_eq!(
            text.lines().nth(1).unwrap(),
            r#"quoted,"Says ""mama""",language,9,12,TRUE,"Clear ""ma-ma"", with intent","#
        );
    }

    #[test]
    fn test_export_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_file_name(day), "babylog_milestones_2024-03-05.csv");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_milestones_csv(&path, Catalog::builtin().milestones()).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(BOM));
    }
}
