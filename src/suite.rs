// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered test suites: named steps run in sequence, teardown always runs.

use crate::error::Result;
use futures::future::BoxFuture;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

type StepFn<C> = Box<dyn for<'a> Fn(&'a C) -> BoxFuture<'a, Result<()>> + Send + Sync>;

struct Step<C> {
    name: String,
    run: StepFn<C>,
}

/// A named, labelled sequence of steps sharing a context `C`.
///
/// Once a step fails the remaining steps are skipped. Teardown steps run
/// afterwards no matter what, each one independently of the others.
pub struct Suite<C> {
    name: String,
    labels: Vec<&'static str>,
    steps: Vec<Step<C>>,
    after_all: Vec<Step<C>>,
}

impl<C: Sync> Suite<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            steps: Vec::new(),
            after_all: Vec::new(),
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.labels.push(label);
        self
    }

    /// Append a step
    pub fn it<F>(mut self, name: impl Into<String>, run: F) -> Self
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, Result<()>> + Send + Sync + 'static,
    {
        self.steps.push(Step {
            name: name.into(),
            run: Box::new(run),
        });
        self
    }

    /// Append a teardown step
    pub fn after_all<F>(mut self, name: impl Into<String>, run: F) -> Self
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, Result<()>> + Send + Sync + 'static,
    {
        self.after_all.push(Step {
            name: name.into(),
            run: Box::new(run),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub async fn run(&self, ctx: &C) -> SuiteReport {
        info!("Running suite '{}'", self.name);
        let start = Instant::now();

        let mut steps = Vec::with_capacity(self.steps.len());
        let mut failed = false;
        for step in &self.steps {
            if failed {
                warn!("[{}] skipped", step.name);
                steps.push(StepResult::skipped(&step.name));
                continue;
            }
            let result = run_step(step, ctx).await;
            failed = !result.outcome.is_passed();
            steps.push(result);
        }

        let mut teardown = Vec::with_capacity(self.after_all.len());
        for step in &self.after_all {
            teardown.push(run_step(step, ctx).await);
        }

        SuiteReport {
            suite: self.name.clone(),
            steps,
            teardown,
            duration: start.elapsed(),
        }
    }
}

async fn run_step<C>(step: &Step<C>, ctx: &C) -> StepResult {
    info!("[{}] started", step.name);
    let start = Instant::now();

    let outcome = match (step.run)(ctx).await {
        Ok(()) => {
            info!("[{}] passed in {:?}", step.name, start.elapsed());
            Outcome::Passed
        }
        Err(e) => {
            error!("[{}] failed: {}", step.name, e);
            Outcome::Failed(e.to_string())
        }
    };

    StepResult {
        name: step.name.clone(),
        outcome,
        duration: start.elapsed(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(String),
    Skipped,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub name: String,
    pub outcome: Outcome,
    pub duration: Duration,
}

impl StepResult {
    fn skipped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outcome: Outcome::Skipped,
            duration: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub suite: String,
    pub steps: Vec<StepResult>,
    pub teardown: Vec<StepResult>,
    pub duration: Duration,
}

impl SuiteReport {
    /// Every step and every teardown step passed
    pub fn success(&self) -> bool {
        self.steps
            .iter()
            .chain(&self.teardown)
            .all(|s| s.outcome.is_passed())
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(&s.outcome)).count()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Suite '{}' {} in {:?}: {} passed, {} failed, {} skipped",
            self.suite,
            if self.success() { "PASSED" } else { "FAILED" },
            self.duration,
            self.count(Outcome::is_passed),
            self.count(|o| matches!(o, Outcome::Failed(_))),
            self.count(|o| matches!(o, Outcome::Skipped)),
        )?;
        for step in self.steps.iter().chain(&self.teardown) {
            match &step.outcome {
                Outcome::Passed => writeln!(f, "  [PASS] {} ({:?})", step.name, step.duration)?,
                Outcome::Failed(msg) => writeln!(f, "  [FAIL] {}: {}", step.name, msg)?,
                Outcome::Skipped => writeln!(f, "  [SKIP] {}", step.name)?,
            }
        }
        Ok(())
    }
}
