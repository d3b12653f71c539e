use crate::config::{Config, ConfigError};
use crate::git::{Action, PullOptions, RebaseMode, RemoteSpec, StatusOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rgit",
    version,
    about = "rgit executes git commands recursively",
    long_about = "rgit scans the sub directories of a directory for git repositories \
    and runs the same git action in each of them. pull and push only run in \
    repositories without local changes."
)]
pub struct Cli {
    #[arg(short, long, help = "Print debug logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = ".",
        help = "The directory to scan sub dirs from. The default is current working directory"
    )]
    pub dir: PathBuf,

    #[arg(
        short,
        long,
        value_name = "REMOTE:BRANCH",
        help = "Set the remote name (remotename:branchname)"
    )]
    pub remote: Option<String>,

    #[arg(
        long,
        help = "Don't execute anything actually. Just display executed commands"
    )]
    pub dry_run: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, value_name = "FILE", help = "Read configuration from FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Fetch from and integrate with another repository or a local branch")]
    Pull {
        #[arg(long, help = "Fetch all remotes")]
        all: bool,

        #[arg(
            short,
            long,
            value_enum,
            help = "When true, rebase the current branch on top of the upstream branch after fetching. \
            When preserve, also pass --preserve-merges along to git rebase. \
            When false, merge the upstream branch into the current branch"
        )]
        rebase: Option<RebaseMode>,
    },

    #[command(about = "Update remote refs along with associated objects")]
    Push,

    #[command(about = "Download objects and refs from another repository")]
    Fetch,

    #[command(about = "Show the working tree status")]
    Status {
        #[arg(short, long, help = "Display only the summary line for each repository")]
        summary: bool,
    },
}

impl Commands {
    pub fn to_action(&self) -> Action {
        match self {
            Commands::Pull { all, rebase } => Action::Pull(PullOptions {
                all: *all,
                rebase: *rebase,
            }),
            Commands::Push => Action::Push,
            Commands::Fetch => Action::Fetch,
            Commands::Status { summary } => Action::Status(StatusOptions { summary: *summary }),
        }
    }
}

impl Cli {
    /// `--remote` when given, the configured default otherwise
    pub fn remote_spec(&self, config: &Config) -> Result<RemoteSpec, ConfigError> {
        self.remote
            .as_deref()
            .unwrap_or(&config.scan.remote)
            .parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rgit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pull_options() {
        let cli = parse(&["-d", "/src", "pull", "--all", "--rebase", "preserve"]);
        assert_eq!(cli.dir, PathBuf::from("/src"));
        assert_eq!(
            cli.command.to_action(),
            Action::Pull(PullOptions {
                all: true,
                rebase: Some(RebaseMode::Preserve),
            })
        );
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["--verbose", "--dry-run", "-r", "origin:main", "fetch"]);
        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert_eq!(cli.dir, PathBuf::from("."));

        let remote = cli.remote_spec(&Config::default_config()).unwrap();
        assert_eq!(remote.args(), ["origin", "main"]);
    }

    #[test]
    fn test_status_summary() {
        let cli = parse(&["status", "--summary"]);
        assert_eq!(
            cli.command.to_action(),
            Action::Status(StatusOptions { summary: true })
        );
    }

    #[test]
    fn test_remote_falls_back_to_config() {
        let cli = parse(&["push"]);
        let mut config = Config::default_config();
        config.scan.remote = "upstream:release".to_string();

        assert_eq!(cli.remote_spec(&config).unwrap().to_string(), "upstream:release");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result = Cli::try_parse_from(["rgit", "merge"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_action_is_required() {
        let result = Cli::try_parse_from(["rgit", "--dry-run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_rebase_mode() {
        let result = Cli::try_parse_from(["rgit", "pull", "--rebase", "sometimes"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidValue);
    }
}
