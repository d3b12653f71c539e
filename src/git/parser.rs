use crate::git::status::{Conflict, Head, RenamedPath, StatusResult, UnmergedEntry};

/// Marker that starts the branch-summary line of `git status -sb`
pub const BRANCH_MARKER: &str = "##";

const DETACHED_SPEC: &str = "HEAD (no branch)";
const UNBORN_PREFIXES: [&str; 2] = ["No commits yet on ", "Initial commit on "];

/// Parse `git status --porcelain -sb` output
///
/// Parsing is lenient: unknown status codes and short lines are skipped, and
/// empty output yields an empty result with no branch information.
pub fn parse_status_porcelain(output: &str) -> StatusResult {
    let mut result = StatusResult::default();
    let mut lines = output.lines().peekable();

    if let Some(first) = lines.peek() {
        if first.starts_with(BRANCH_MARKER) {
            parse_branch_line(first, &mut result);
            lines.next();
        }
    }

    for line in lines {
        parse_entry_line(line, &mut result);
    }

    result
}

/// Parse `## <branch>[...<upstream>][ [ahead N][, behind N]]`
fn parse_branch_line(line: &str, result: &mut StatusResult) {
    let line = line.trim().trim_start_matches(BRANCH_MARKER);

    let (branch_spec, tracking) = match line.split_once('[') {
        Some((spec, tracking)) => (spec, Some(tracking)),
        None => (line, None),
    };

    let (head, remote) = parse_branch_spec(branch_spec.trim());
    result.head = Some(head);
    result.branch_remote = remote;

    if let Some(tracking) = tracking {
        let (ahead, behind) = parse_ahead_behind(tracking);
        result.ahead = ahead;
        result.behind = behind;
    }
}

fn parse_branch_spec(spec: &str) -> (Head, Option<String>) {
    if spec == DETACHED_SPEC {
        return (Head::Detached, None);
    }

    for prefix in UNBORN_PREFIXES {
        if let Some(branch) = spec.strip_prefix(prefix) {
            return (Head::Branch(branch.trim().to_string()), None);
        }
    }

    match spec.split_once("...") {
        Some((branch, remote)) => (
            Head::Branch(branch.to_string()),
            Some(remote.trim().to_string()),
        ),
        None => (Head::Branch(spec.to_string()), None),
    }
}

fn parse_ahead_behind(tracking: &str) -> (usize, usize) {
    let mut ahead = 0;
    let mut behind = 0;

    for part in tracking.trim().trim_end_matches(']').split(',') {
        let mut words = part.split_whitespace();
        let label = words.next();
        let count = words
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);

        match label {
            Some("ahead") => ahead = count,
            Some("behind") => behind = count,
            _ => {}
        }
    }

    (ahead, behind)
}

/// Classify one `XY <path>` line into the result
fn parse_entry_line(line: &str, result: &mut StatusResult) {
    let mut chars = line.chars();
    let (Some(index), Some(worktree)) = (chars.next(), chars.next()) else {
        return;
    };
    let payload = chars.as_str().trim();

    if let Some(conflict) = Conflict::from_code(index, worktree) {
        result.unmerged.push(UnmergedEntry {
            path: payload.to_string(),
            conflict,
        });
        return;
    }

    if index == 'D' {
        result.deleted_staged.push(payload.to_string());
    }
    if worktree == 'D' {
        result.deleted_work_tree.push(payload.to_string());
    }
    if index == '?' && worktree == '?' {
        result.untracked.push(payload.to_string());
    }
    if index == 'R' {
        result.renamed.push(parse_renamed(payload));
    }
    if index == 'A' {
        result.added.push(payload.to_string());
    }
    if index == 'M' {
        result.modified_staged.push(payload.to_string());
    }
    if worktree == 'M' {
        result.modified_work_tree.push(payload.to_string());
    }
}

fn parse_renamed(payload: &str) -> RenamedPath {
    match payload.split_once("->") {
        Some((from, to)) => RenamedPath {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        },
        // git always prints the arrow for R; keep the path rather than drop the entry
        None => RenamedPath {
            from: payload.to_string(),
            to: payload.to_string(),
        },
    }
}
