pub mod action;
pub mod executor;
pub mod parser;
pub mod policy;
pub mod status;

// Re-export commonly used types
pub use action::{
    Action, ActionKind, GitCommand, PullOptions, RebaseMode, RemoteSpec, StatusOptions,
    status_query,
};
pub use executor::{CommandOutput, DryRunExecutor, Executor, GitExecutor};
pub use parser::parse_status_porcelain;
pub use policy::is_safe_to_run_unattended;
pub use status::{Conflict, Head, RenamedPath, StatusResult, UnmergedEntry};
