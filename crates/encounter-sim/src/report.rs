//! Rendering of per-tick outcomes.

use anyhow::Result;
use serde::Serialize;
use target_of_interest::{Decision, Status, TickReport, Timestamp};

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One human-readable line per tick.
    #[default]
    Summary,
    /// One JSON object per tick.
    Json,
}

/// What one tick did, flattened for output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: usize,
    pub now: Timestamp,
    pub outcome: &'static str,
    pub status: Option<&'static str>,
    pub decision: Option<Decision>,
}

impl TickRecord {
    pub fn new(tick: usize, now: Timestamp, report: &TickReport) -> Self {
        let (outcome, status, decision) = match *report {
            TickReport::Deferred => ("deferred", None, None),
            TickReport::Evaluated { status, decision } => {
                ("evaluated", Some(status_label(status)), decision)
            }
            TickReport::Finished => ("finished", None, None),
        };
        Self {
            tick,
            now,
            outcome,
            status,
            decision,
        }
    }

    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => Ok(serde_json::to_string(self)?),
            Format::Summary => Ok(self.summary()),
        }
    }

    fn summary(&self) -> String {
        let head = format!("#{:<3} {:>7}ms", self.tick, self.now.0);
        match (self.status, self.decision) {
            (Some(status), Some(decision)) => {
                format!("{head}  {status:<7}  {}", describe(decision))
            }
            (Some(status), None) => format!("{head}  {status:<7}  (no action)"),
            _ => format!("{head}  {}", self.outcome),
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Success => "success",
        Status::Failure => "failure",
        Status::Running => "running",
    }
}

fn describe(decision: Decision) -> String {
    match decision {
        Decision::Exclude(guid) | Decision::EngagePriority(guid) | Decision::EngageBoss(guid) => {
            format!("{decision} {guid}")
        }
        Decision::Routine(step) => format!("{decision} {step}"),
        Decision::Complete | Decision::FlushExclusions => decision.to_string(),
    }
}
