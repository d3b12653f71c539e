pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod runner;
pub mod scanner;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult, GitError, GitResult, ScanError};
pub use git::{Action, ActionKind, StatusResult, is_safe_to_run_unattended, parse_status_porcelain};
pub use report::Reporter;
pub use runner::{RunSummary, Runner};
pub use scanner::RepoScanner;
