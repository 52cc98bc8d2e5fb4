//! Scripted command runner for unit tests.

use crate::install::{CommandRunner, InstallError, StructuredCommand};
use crate::ProbeError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

/// Replays canned results keyed by the rendered command line.
///
/// Results scripted for the same command are returned in order and the
/// last one repeats. Captures default to [`ProbeError::NotFound`]; runs
/// default to success.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    outputs: RefCell<HashMap<String, VecDeque<Result<String, ProbeError>>>>,
    failing_runs: HashSet<String>,
    commands: RefCell<Vec<String>>,
    runs: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(self, command: &str, result: Result<String, ProbeError>) -> Self {
        self.outputs
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub(crate) fn with_output(self, command: &str, output: &str) -> Self {
        self.push(command, Ok(output.to_string()))
    }

    pub(crate) fn fail_capture(self, command: &str, error: ProbeError) -> Self {
        self.push(command, Err(error))
    }

    pub(crate) fn fail_run(mut self, command: &str) -> Self {
        self.failing_runs.insert(command.to_string());
        self
    }

    /// Every command seen, captures and runs, in call order.
    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Only the commands run with inherited stdio.
    pub(crate) fn runs(&self) -> Vec<String> {
        self.runs.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &StructuredCommand) -> Result<(), InstallError> {
        let line = command.to_string();
        self.commands.borrow_mut().push(line.clone());
        self.runs.borrow_mut().push(line.clone());
        if self.failing_runs.contains(&line) {
            return Err(InstallError::InstallerFailed {
                message: format!("`{}` exited with code Some(1)", line),
                exit_code: Some(1),
                fix: "See installer output above for details".to_string(),
            });
        }
        Ok(())
    }

    async fn capture(
        &self,
        command: &StructuredCommand,
        _limit: Duration,
    ) -> Result<String, ProbeError> {
        let line = command.to_string();
        self.commands.borrow_mut().push(line.clone());
        let mut outputs = self.outputs.borrow_mut();
        match outputs.get_mut(&line) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(Err(ProbeError::NotFound)),
            Some(queue) => queue.front().cloned().unwrap_or(Err(ProbeError::NotFound)),
            None => Err(ProbeError::NotFound),
        }
    }
}
