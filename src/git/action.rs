use crate::config::settings::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Program every action runs
pub const GIT_PROGRAM: &str = "git";

/// Flags that make `git status` print the branch-summary line and two-character codes
const STATUS_QUERY_FLAGS: [&str; 2] = ["-sb", "--porcelain"];

/// The git subcommands rgit knows how to apply across repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Pull,
    Push,
    Fetch,
    Status,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Pull => "pull",
            ActionKind::Push => "push",
            ActionKind::Fetch => "fetch",
            ActionKind::Status => "status",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of `git pull --rebase=<mode>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RebaseMode {
    False,
    True,
    Preserve,
}

impl RebaseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RebaseMode::False => "false",
            RebaseMode::True => "true",
            RebaseMode::Preserve => "preserve",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullOptions {
    pub all: bool,
    pub rebase: Option<RebaseMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    /// Only show the change/no-change line, no per-file detail
    pub summary: bool,
}

/// Requested action together with its kind-specific options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pull(PullOptions),
    Push,
    Fetch,
    Status(StatusOptions),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Pull(_) => ActionKind::Pull,
            Action::Push => ActionKind::Push,
            Action::Fetch => ActionKind::Fetch,
            Action::Status(_) => ActionKind::Status,
        }
    }

    /// Short tag shown in the report, e.g. `(pull)`
    pub fn label(&self) -> String {
        format!("({})", self.kind())
    }

    fn options(&self) -> Vec<String> {
        match self {
            Action::Pull(options) => {
                let mut flags = Vec::new();
                if options.all {
                    flags.push("--all".to_string());
                }
                if let Some(mode) = options.rebase {
                    flags.push(format!("--rebase={}", mode.as_str()));
                }
                flags
            }
            Action::Status(_) => STATUS_QUERY_FLAGS.iter().map(|f| f.to_string()).collect(),
            Action::Push | Action::Fetch => Vec::new(),
        }
    }

    /// Build `git <kind> <options> <remote> <branch>`
    pub fn command(&self, remote: &RemoteSpec) -> GitCommand {
        let mut args = vec![self.kind().as_str().to_string()];
        args.extend(self.options());
        args.extend(remote.args().iter().cloned());
        GitCommand::new(args)
    }
}

/// The command whose output feeds the status parser
pub fn status_query() -> GitCommand {
    Action::Status(StatusOptions::default()).command(&RemoteSpec::default())
}

/// Remote given as `remote:branch` on the command line
///
/// Each colon-separated part becomes one positional argument, so
/// `origin:main` turns into `origin main`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteSpec {
    parts: Vec<String>,
}

impl RemoteSpec {
    pub fn args(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromStr for RemoteSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "Remote '{}' must not contain whitespace. Use remotename:branchname",
                s
            )));
        }

        let parts = s
            .split(':')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { parts })
    }
}

impl fmt::Display for RemoteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(":"))
    }
}

/// A git invocation, program excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn program(&self) -> &'static str {
        GIT_PROGRAM
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", GIT_PROGRAM)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
