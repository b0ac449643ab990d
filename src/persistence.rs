use crate::group::GroupingReport;
use crate::storage::ReportSink;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// JSON file storage for a grouping report. Stands in for the database the
/// orchestrator would normally write group records to.
pub struct ReportFile {
    file_path: std::path::PathBuf,
}

impl ReportFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn save_report(report: &GroupingReport, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)
            .context("Failed to serialize report to JSON")?;

        let mut file = File::create(path).context("Failed to create file for writing")?;

        file.write_all(json.as_bytes())
            .context("Failed to write report to file")?;

        Ok(())
    }

    pub fn load_report(path: &Path) -> Result<GroupingReport> {
        let mut file = File::open(path).context("Failed to open file for reading")?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("Failed to read file contents")?;

        let report: GroupingReport =
            serde_json::from_str(&contents).context("Failed to deserialize report from JSON")?;

        Ok(report)
    }

    pub fn save(&self, report: &GroupingReport) -> Result<()> {
        Self::save_report(report, &self.file_path)
    }

    pub fn load(&self) -> Result<GroupingReport> {
        Self::load_report(&self.file_path)
    }

    pub fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)
                .context("Failed to remove existing file")?;
        }
        Ok(())
    }
}

impl ReportSink for ReportFile {
    fn persist_report(&mut self, report: &GroupingReport) -> Result<()> {
        self.save(report)
    }
}
