use std::any::Any;
use std::fmt::Write as _;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use console::style;
use rayon::prelude::*;
use serde::Serialize;

use crate::checks::{CheckCase, CheckContext, CheckError};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Serial,
    /// Cases share nothing, so they may run on the rayon pool.
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    Errored { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub results: Vec<CaseResult>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("case panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("case panicked: {}", s)
    } else {
        "case panicked".to_string()
    }
}

/// Run one case in a fresh context and classify how it ended. A panic in
/// the case body is contained and reported as an error for that case.
fn run_case(case: &CheckCase, settings: &Settings) -> CaseResult {
    let started = Instant::now();
    let span = tracing::info_span!("case", name = %case.name);
    let _enter = span.enter();

    let res = catch_unwind(AssertUnwindSafe(|| {
        CheckContext::new(settings)
            .map_err(CheckError::from)
            .and_then(|ctx| case.run(&ctx))
    }));
    let outcome = match res {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(CheckError::Assertion(message))) => Outcome::Failed { message },
        Ok(Err(e @ CheckError::Execution(_))) => Outcome::Errored {
            message: e.to_string(),
        },
        Err(payload) => Outcome::Errored {
            message: panic_message(payload.as_ref()),
        },
    };
    match &outcome {
        Outcome::Passed => tracing::info!("passed"),
        Outcome::Failed { message } => tracing::warn!(%message, "failed"),
        Outcome::Errored { message } => tracing::error!(%message, "errored"),
    }
    CaseResult {
        name: case.name.clone(),
        outcome,
        duration_ms: started.elapsed().as_millis(),
    }
}

/// Run `cases` and collect their results in the order given, whatever the
/// mode.
pub fn run_suite(cases: &[CheckCase], settings: &Settings, mode: RunMode) -> Report {
    let results = match mode {
        RunMode::Serial => cases.iter().map(|c| run_case(c, settings)).collect(),
        RunMode::Parallel => cases.par_iter().map(|c| run_case(c, settings)).collect(),
    };
    Report { results }
}

impl Report {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored { .. }))
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.results.len()
    }

    pub fn get(&self, name: &str) -> Option<&CaseResult> {
        self.results.iter().find(|r| r.name == name)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Verbose, one line per case, then failure details and a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for r in &self.results {
            let status = match r.outcome {
                Outcome::Passed => style("PASSED").green(),
                Outcome::Failed { .. } => style("FAILED").red(),
                Outcome::Errored { .. } => style("ERROR").red().bold(),
            };
            let _ = writeln!(out, "{} {} ({} ms)", r.name, status, r.duration_ms);
        }
        for r in &self.results {
            if let Outcome::Failed { message } | Outcome::Errored { message } = &r.outcome {
                let _ = writeln!(out, "\n{}: {}", style(&r.name).bold(), message);
            }
        }
        let _ = writeln!(
            out,
            "\n{} passed, {} failed, {} errors",
            self.passed(),
            self.failed(),
            self.errored()
        );
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
