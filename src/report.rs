use crate::error::ScanError;
use crate::git::{ActionKind, StatusResult};
use crossterm::style::{Color, Stylize, style};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "-- Starting rgit...";
const INDENT: &str = "   ";
const NO_BRANCH: &str = "-";

/// What happened to the requested action in one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Not run because the working tree has changes
    Skipped(ActionKind),
    /// Ran to completion, with what the command printed on stdout and stderr
    Ran { kind: ActionKind, output: String },
    /// The status action; details come from the parsed status
    ShowStatus { summary: bool },
    /// The command could not be run or exited non-zero
    Failed { kind: ActionKind, error: String },
}

/// Everything the reporter needs to render one repository
#[derive(Debug, Clone)]
pub struct RepoReport {
    pub path: PathBuf,
    pub status: StatusResult,
    /// Set when the status query itself failed
    pub status_error: Option<String>,
    pub outcome: ActionOutcome,
}

/// Renders scan progress and per-repository results as text
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    path_width: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool, path_width: usize) -> Self {
        Self {
            out,
            color,
            path_width,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&mut self, block: &str) -> io::Result<()> {
        self.out.write_all(block.as_bytes())?;
        self.out.flush()
    }

    pub fn header(&mut self, root: &Path) -> io::Result<()> {
        let block = format!(
            "{}\nScanning sub directories of {}\n",
            self.paint(HEADER, Color::Magenta),
            root.display()
        );
        self.emit(&block)
    }

    /// Report a directory the scanner could not read
    pub fn scan_error(&mut self, error: &ScanError) -> io::Result<()> {
        let block = format!("-- {}\n", self.paint(&format!("skipped: {}", error), Color::Red));
        self.emit(&block)
    }

    /// Render one repository as a single block
    pub fn repository(&mut self, report: &RepoReport) -> io::Result<()> {
        let block = self.render_repository(report);
        self.emit(&block)
    }

    pub fn render_repository(&self, report: &RepoReport) -> String {
        let status = &report.status;
        let mut path = format!(
            "{:<width$}",
            report.path.display(),
            width = self.path_width
        );
        // Long paths still need a gap before the branch
        if !path.ends_with(' ') {
            path.push(' ');
        }

        let mut block = format!(
            "-- {}{} : ",
            self.paint(&path, Color::Blue),
            status.branch().unwrap_or(NO_BRANCH)
        );

        if status.changes() {
            block.push_str(&self.paint("Changes", Color::Red));
        } else {
            block.push_str(&self.paint("No Changes", Color::Green));
        }

        if let Some(tracking) = work_tree_state(status) {
            block.push_str(&self.paint(&tracking, Color::Red));
        }

        match &report.outcome {
            ActionOutcome::Skipped(kind) => block.push_str(&format!(" ({} skipped)\n", kind)),
            ActionOutcome::Ran { kind, .. }
            | ActionOutcome::Failed { kind, .. } => block.push_str(&format!(" ({})\n", kind)),
            ActionOutcome::ShowStatus { .. } => {
                block.push_str(&format!(" ({})\n", ActionKind::Status))
            }
        }

        if let Some(error) = &report.status_error {
            block.push_str(&format!(
                "{}{}\n",
                INDENT,
                self.paint(&format!("status failed: {}", error), Color::Red)
            ));
        }

        match &report.outcome {
            ActionOutcome::Ran { output, .. } => {
                block.push_str(output);
                if !output.is_empty() && !output.ends_with('\n') {
                    block.push('\n');
                }
            }
            ActionOutcome::Failed { error, .. } => {
                block.push_str(&self.paint(&format!("error: {}", error), Color::Red));
                block.push('\n');
            }
            ActionOutcome::ShowStatus { summary: false } => {
                block.push_str(&self.render_details(&report.path, status));
            }
            ActionOutcome::ShowStatus { summary: true } | ActionOutcome::Skipped(_) => {}
        }

        block
    }

    /// Per-file detail in the order `git status` uses
    fn render_details(&self, repo: &Path, status: &StatusResult) -> String {
        let mut text = String::new();
        let entry = |label: &str, path: &str| {
            format!("{}{}{}\n", INDENT.repeat(2), label, repo.join(path).display())
        };

        if status.staged() {
            text.push_str(&format!("{}Changes to be committed:\n", INDENT));
            for path in &status.modified_staged {
                text.push_str(&self.paint(&entry("modified: ", path), Color::Green));
            }
            for path in &status.deleted_staged {
                text.push_str(&self.paint(&entry("deleted:  ", path), Color::Green));
            }
            for path in &status.added {
                text.push_str(&self.paint(&entry("new file: ", path), Color::Green));
            }
            for renamed in &status.renamed {
                let line = format!(
                    "{}renamed:  {} -> {}\n",
                    INDENT.repeat(2),
                    repo.join(&renamed.from).display(),
                    repo.join(&renamed.to).display()
                );
                text.push_str(&self.paint(&line, Color::Green));
            }
        }

        if !status.unmerged.is_empty() {
            text.push_str(&format!("{}Unmerged paths:\n", INDENT));
            for unmerged in &status.unmerged {
                let label = format!("{}: ", unmerged.description());
                text.push_str(&self.paint(&entry(&label, &unmerged.path), Color::Red));
            }
        }

        if status.not_staged() {
            text.push_str(&format!("{}Changes not staged for commit:\n", INDENT));
            for path in &status.modified_work_tree {
                text.push_str(&self.paint(&entry("modified: ", path), Color::Red));
            }
            for path in &status.deleted_work_tree {
                text.push_str(&self.paint(&entry("deleted:  ", path), Color::Red));
            }
        }

        if !status.untracked.is_empty() {
            text.push_str(&format!("{}Untracked files:\n", INDENT));
            for path in &status.untracked {
                text.push_str(&self.paint(&entry("", path), Color::Red));
            }
        }

        text
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// ` [ahead N, behind M]`, or `None` when in sync with upstream
pub fn work_tree_state(status: &StatusResult) -> Option<String> {
    if !status.diverged() {
        return None;
    }

    let mut parts = Vec::new();
    if status.ahead > 0 {
        parts.push(format!("ahead {}", status.ahead));
    }
    if status.behind > 0 {
        parts.push(format!("behind {}", status.behind));
    }

    Some(format!(" [{}]", parts.join(", ")))
}
