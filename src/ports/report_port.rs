//! Report generation port trait.

use crate::domain::error::SigengineError;
use crate::domain::report::AnalysisReport;
use std::io::Write;

/// Port for rendering an analysis report.
pub trait ReportPort {
    fn write(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<(), SigengineError>;

    /// Default implementation: renders into a `String`.
    fn render(&self, report: &AnalysisReport) -> Result<String, SigengineError> {
        let mut buf = Vec::new();
        self.write(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| SigengineError::Report {
            reason: format!("report is not valid UTF-8: {e}"),
        })
    }
}
