use crate::error::{GitError, GitResult};
use crate::git::action::GitCommand;
use std::path::Path;
use std::process::{Command, Output};

/// Result of executing a git command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

impl CommandOutput {
    /// stdout followed by stderr, skipping streams that are blank
    ///
    /// git writes progress and most of pull/push/fetch's messages to stderr.
    pub fn combined(&self) -> String {
        join_streams(&self.stdout, &self.stderr)
    }
}

fn join_streams(stdout: &str, stderr: &str) -> String {
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs git commands inside a repository
///
/// The status parser only ever sees `stdout`, so a canned implementation is
/// enough to drive the whole pipeline in tests and dry runs.
pub trait Executor {
    fn run(&self, repo_path: &Path, command: &GitCommand) -> GitResult<CommandOutput>;

    /// True when nothing is really executed
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Executes git as a child process
#[derive(Debug, Default)]
pub struct GitExecutor;

impl GitExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Process command output into CommandOutput struct
    fn process_output(&self, output: Output, command: &GitCommand) -> GitResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        // Return error for failed commands
        if !success {
            return Err(GitError::CommandFailed(format!(
                "Command '{}' failed with exit code {}: {}",
                command,
                exit_code,
                join_streams(&stdout, &stderr)
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }
}

impl Executor for GitExecutor {
    fn run(&self, repo_path: &Path, command: &GitCommand) -> GitResult<CommandOutput> {
        log::debug!("$ {} [{}]", command, repo_path.display());

        // Branch-summary wording is only parsed in English
        let output = Command::new(command.program())
            .args(command.args())
            .current_dir(repo_path)
            .env("LANGUAGE", "en_US:en")
            .env("LANG", "en_US.UTF-8")
            .output()
            .map_err(|e| GitError::SpawnFailed(e.to_string()))?;

        self.process_output(output, command)
    }
}

/// Sample status served to every status query during a dry run
pub const SAMPLE_STATUS: &str = "## master...origin/master [ahead 1, behind 2]
D  COPYING.llvm
 D COPYING.unrar
R  COPYING.unrar -> COPYING.unra
?? COPYING.unra
A  blabla.file
AM blabla1.file
M  COPYING
 M COPYING.lzma";

/// Logs commands instead of running them
#[derive(Debug, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for DryRunExecutor {
    fn run(&self, repo_path: &Path, command: &GitCommand) -> GitResult<CommandOutput> {
        log::warn!("Executing: {} in {}", command, repo_path.display());

        let stdout = match command.subcommand() {
            Some("status") => SAMPLE_STATUS.to_string(),
            _ => String::new(),
        };

        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
            exit_code: 0,
            success: true,
        })
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
