use crate::git::action::ActionKind;
use crate::git::status::StatusResult;

/// Whether `kind` may run in a repository without asking anyone
///
/// `fetch` and `status` never touch the working tree, so they always run.
/// `pull` and `push` only run on a clean tree.
pub fn is_safe_to_run_unattended(kind: ActionKind, status: &StatusResult) -> bool {
    match kind {
        ActionKind::Fetch | ActionKind::Status => true,
        ActionKind::Pull | ActionKind::Push => !status.changes(),
    }
}
