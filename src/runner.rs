use crate::audit::CommandHistory;
use crate::error::AppResult;
use crate::git::{
    Action, Executor, RemoteSpec, StatusResult, is_safe_to_run_unattended, parse_status_porcelain,
    status_query,
};
use crate::report::{ActionOutcome, RepoReport, Reporter};
use crate::scanner::RepoScanner;
use std::io::Write;
use std::path::Path;

/// Counters for one complete run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub repositories: usize,
    pub actions_run: usize,
    pub skipped: usize,
    pub failures: usize,
    pub scan_errors: usize,
}

/// Applies one action to every repository under a root, one at a time
pub struct Runner {
    action: Action,
    remote: RemoteSpec,
    executor: Box<dyn Executor + Send>,
    history: Option<CommandHistory>,
}

impl Runner {
    pub fn new(action: Action, remote: RemoteSpec, executor: Box<dyn Executor + Send>) -> Self {
        Self {
            action,
            remote,
            executor,
            history: None,
        }
    }

    /// Record every executed action command in `history`
    pub fn with_history(mut self, history: CommandHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Scan `root` and report every repository found
    ///
    /// Failures inside a repository end up in its report. Only a bad root or
    /// a failing output stream stop the run.
    pub fn run<W: Write>(&self, root: &Path, reporter: &mut Reporter<W>) -> AppResult<RunSummary> {
        let scanner = RepoScanner::new(root)?;
        reporter.header(root)?;

        let mut summary = RunSummary::default();
        for found in scanner {
            match found {
                Ok(repo) => {
                    let report = self.inspect(&repo);
                    match report.outcome {
                        ActionOutcome::Skipped(_) => summary.skipped += 1,
                        ActionOutcome::Failed { .. } => summary.failures += 1,
                        ActionOutcome::Ran { .. } | ActionOutcome::ShowStatus { .. } => {
                            summary.actions_run += 1
                        }
                    }
                    summary.repositories += 1;
                    reporter.repository(&report)?;
                }
                Err(e) => {
                    log::warn!("{}", e);
                    summary.scan_errors += 1;
                    reporter.scan_error(&e)?;
                }
            }
        }

        log::info!(
            "{} repositories, {} actions run, {} skipped, {} failed",
            summary.repositories,
            summary.actions_run,
            summary.skipped,
            summary.failures
        );
        Ok(summary)
    }

    /// Query status, apply the policy and run the action in one repository
    pub fn inspect(&self, repo: &Path) -> RepoReport {
        let (status, status_error) = self.query_status(repo);
        log::debug!("{}: {:?}", repo.display(), status);

        let kind = self.action.kind();
        let outcome = if !is_safe_to_run_unattended(kind, &status) {
            log::info!("Skipping {} in {}: working tree has changes", kind, repo.display());
            ActionOutcome::Skipped(kind)
        } else {
            match &self.action {
                Action::Status(options) => ActionOutcome::ShowStatus {
                    summary: options.summary,
                },
                _ => self.execute(repo),
            }
        };

        RepoReport {
            path: repo.to_path_buf(),
            status,
            status_error,
            outcome,
        }
    }

    fn query_status(&self, repo: &Path) -> (StatusResult, Option<String>) {
        match self.executor.run(repo, &status_query()) {
            Ok(output) => (parse_status_porcelain(&output.stdout), None),
            Err(e) => {
                log::warn!("Status query failed in {}: {}", repo.display(), e);
                (StatusResult::default(), Some(e.to_string()))
            }
        }
    }

    fn execute(&self, repo: &Path) -> ActionOutcome {
        let kind = self.action.kind();
        let command = self.action.command(&self.remote);
        let result = self.executor.run(repo, &command);

        if let Some(history) = &self.history {
            if !self.executor.is_dry_run() {
                if let Err(e) = history.log_command(&command.to_string(), repo, result.is_ok()) {
                    log::warn!("Failed to write {}: {}", history.log_path().display(), e);
                }
            }
        }

        match result {
            Ok(output) => ActionOutcome::Ran {
                kind,
                output: output.combined(),
            },
            Err(e) => ActionOutcome::Failed {
                kind,
                error: e.to_string(),
            },
        }
    }
}
