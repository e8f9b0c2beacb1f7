// src/io/display.rs

use serde::Serialize;
use std::io::Write;

use crate::error::ReportError;
use crate::io::format::{format_currency, format_weeks};
use crate::model::metrics::EstimateView;

pub const CTA_ENABLED: &str = "Ready to fill that chair? Book your free strategy call.";
pub const CTA_LOCKED: &str = "Adjust any field above to unlock your free strategy call.";

/// Where an estimate ends up.
///
/// The estimator hands over a complete view; formatting and call-to-action
/// gating are the surface's job.
pub trait DisplaySurface {
    fn render(&mut self, view: &EstimateView) -> Result<(), ReportError>;
}

// =========================================================================
// 1. Text cards (terminal)
// =========================================================================

#[derive(Debug)]
pub struct TextCard<W: Write> {
    out: W,
}

impl<W: Write> TextCard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TextCard<W> {
    fn render(&mut self, view: &EstimateView) -> Result<(), ReportError> {
        let m = &view.metrics;
        let r = &view.resolved;
        let out = &mut self.out;

        writeln!(out, "== Empty Chair Revenue Loss ==")?;
        writeln!(
            out,
            "{:<32}{:>14}",
            "Revenue Lost Per Week",
            format_currency(m.lost_revenue_per_week)
        )?;
        writeln!(
            out,
            "{:<32}{:>14}  (over {})",
            "Total Loss Before Seat Filled",
            format_currency(m.cumulative_loss),
            format_weeks(r.weeks_to_fill)
        )?;
        writeln!(out, "{:<32}{:>14}", "Monthly Loss", format_currency(m.monthly_loss))?;
        writeln!(out, "{:<32}{:>14}", "Yearly Loss", format_currency(m.yearly_loss))?;
        writeln!(
            out,
            "{:<32}{:>14}  ({} x {} clients x {})",
            "Weekly Revenue Per Chair",
            format_currency(m.weekly_revenue_per_chair),
            format_currency(r.average_ticket),
            r.clients_per_day,
            r.days_open
        )?;

        if let Some(i) = &view.intervention {
            let label = format!("Break-even on {} fee", format_currency(i.fee));
            let weeks = i
                .break_even
                .weeks()
                .map_or_else(|| i.break_even.to_string(), format_weeks);
            writeln!(out, "{label:<32}{weeks:>14}")?;
        }

        let unset = view.input.unset_fields();
        if !unset.is_empty() {
            let names: Vec<&str> = unset.iter().map(|f| f.as_str()).collect();
            writeln!(out, "Using defaults for: {}", names.join(", "))?;
        }

        writeln!(
            out,
            "{}",
            if view.cta_enabled { CTA_ENABLED } else { CTA_LOCKED }
        )?;
        out.flush()?;
        Ok(())
    }
}

// =========================================================================
// 2. JSON
// =========================================================================

#[derive(Debug)]
pub struct JsonReport<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonReport<W> {
    /// One compact object per line.
    pub fn lines(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(out: W) -> Self {
        Self { out, pretty: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for JsonReport<W> {
    fn render(&mut self, view: &EstimateView) -> Result<(), ReportError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, view)?;
        } else {
            serde_json::to_writer(&mut self.out, view)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

// =========================================================================
// 3. CSV
// =========================================================================

/// Flat row shape; the csv crate cannot serialize nested structs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRow {
    pub average_ticket: f64,
    pub clients_per_day: f64,
    pub empty_chairs: u32,
    pub days_open: u8,
    pub weeks_to_fill: f64,
    pub weekly_revenue_per_chair: f64,
    pub lost_revenue_per_week: f64,
    pub cumulative_loss: f64,
    pub monthly_loss: f64,
    pub yearly_loss: f64,
    pub intervention_fee: Option<f64>,
    pub break_even_weeks: Option<f64>,
    pub cta_enabled: bool,
}

impl From<&EstimateView> for EstimateRow {
    fn from(view: &EstimateView) -> Self {
        let r = &view.resolved;
        let m = &view.metrics;
        Self {
            average_ticket: r.average_ticket,
            clients_per_day: r.clients_per_day,
            empty_chairs: r.empty_chairs,
            days_open: r.days_open.get(),
            weeks_to_fill: r.weeks_to_fill,
            weekly_revenue_per_chair: m.weekly_revenue_per_chair,
            lost_revenue_per_week: m.lost_revenue_per_week,
            cumulative_loss: m.cumulative_loss,
            monthly_loss: m.monthly_loss,
            yearly_loss: m.yearly_loss,
            intervention_fee: view.intervention.map(|i| i.fee),
            break_even_weeks: view.intervention.and_then(|i| i.break_even.weeks()),
            cta_enabled: view.cta_enabled,
        }
    }
}

/// Writes one row per render; the header goes out with the first row.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }
}

impl<W: Write> DisplaySurface for CsvReport<W> {
    fn render(&mut self, view: &EstimateView) -> Result<(), ReportError> {
        self.writer.serialize(EstimateRow::from(view))?;
        self.writer.flush()?;
        Ok(())
    }
}
