//! JSON report adapter implementing ReportPort.

use std::io::Write;

use crate::domain::error::SigengineError;
use crate::domain::report::AnalysisReport;
use crate::ports::report_port::ReportPort;

#[derive(Debug, Default)]
pub struct JsonReportAdapter {
    pub pretty: bool,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportPort for JsonReportAdapter {
    fn write(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<(), SigengineError> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *out, report)
        } else {
            serde_json::to_writer(&mut *out, report)
        };
        result.map_err(|e| SigengineError::Report {
            reason: format!("failed to serialize report: {e}"),
        })?;
        writeln!(out)?;
        Ok(())
    }
}
