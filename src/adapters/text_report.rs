//! Plain-text report adapter implementing ReportPort.
//!
//! Prints the parameters, the latest indicator values and one line per
//! signal. Indicators without enough data are shown as `n/a`.

use std::io::Write;

use crate::domain::error::SigengineError;
use crate::domain::report::AnalysisReport;
use crate::domain::signal::Signal;
use crate::ports::report_port::ReportPort;

#[derive(Debug, Default)]
pub struct TextReportAdapter {
    /// Only print the signal table.
    pub signals_only: bool,
}

impl TextReportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals_only() -> Self {
        Self { signals_only: true }
    }
}

fn write_signal(out: &mut dyn Write, signal: &Signal) -> std::io::Result<()> {
    writeln!(
        out,
        "  {:<16} {:<8} {:>6.1}  {}",
        signal.indicator.to_string(),
        signal.action.to_string().to_uppercase(),
        signal.strength,
        signal.reason
    )
}

fn write_report(report: &AnalysisReport, out: &mut dyn Write, signals_only: bool) -> std::io::Result<()> {
    if !signals_only {
        writeln!(out, "=== Indicator Summary ===")?;
        writeln!(out, "Points:       {}", report.points)?;
        writeln!(out, "Parameters:   {}", report.params)?;

        match &report.latest {
            None => writeln!(out, "Latest:       n/a (empty series)")?,
            Some(latest) => {
                writeln!(out, "Latest:       {} @ {:.4}", latest.label, latest.price)?;
                match &latest.rsi {
                    Some(r) => writeln!(out, "RSI:          {:.2}", r.value)?,
                    None => writeln!(out, "RSI:          n/a")?,
                }
                match &latest.macd {
                    Some(m) => writeln!(
                        out,
                        "MACD:         {:.4} (signal {:.4}, histogram {:.4})",
                        m.macd, m.signal, m.histogram
                    )?,
                    None => writeln!(out, "MACD:         n/a")?,
                }
                match &latest.bollinger {
                    Some(b) => writeln!(
                        out,
                        "Bollinger:    {:.4} / {:.4} / {:.4}",
                        b.upper, b.middle, b.lower
                    )?,
                    None => writeln!(out, "Bollinger:    n/a")?,
                }
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "=== Signals ===")?;
    if report.signals.is_empty() {
        writeln!(out, "  (not enough data for any indicator)")?;
    }
    for signal in &report.signals {
        write_signal(out, signal)?;
    }
    Ok(())
}

impl ReportPort for TextReportAdapter {
    fn write(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<(), SigengineError> {
        write_report(report, out, self.signals_only)?;
        Ok(())
    }
}
