use std::fmt;

/// Name shown for a HEAD that is not on any branch
pub const DETACHED: &str = "detached";

/// Where HEAD points, as reported by the branch-summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(String),
    Detached,
}

impl Head {
    pub fn name(&self) -> &str {
        match self {
            Head::Branch(name) => name,
            Head::Detached => DETACHED,
        }
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A staged rename, `from -> to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedPath {
    pub from: String,
    pub to: String,
}

/// Kind of unresolved merge conflict reported for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    BothModified,
    AddedByUs,
    DeletedByThem,
    AddedByThem,
    DeletedByUs,
    BothAdded,
    BothDeleted,
}

impl Conflict {
    /// Map a two-character porcelain code onto a conflict, if it is one
    pub fn from_code(index: char, worktree: char) -> Option<Self> {
        match (index, worktree) {
            ('U', 'U') => Some(Conflict::BothModified),
            ('A', 'U') => Some(Conflict::AddedByUs),
            ('U', 'D') => Some(Conflict::DeletedByThem),
            ('U', 'A') => Some(Conflict::AddedByThem),
            ('D', 'U') => Some(Conflict::DeletedByUs),
            ('A', 'A') => Some(Conflict::BothAdded),
            ('D', 'D') => Some(Conflict::BothDeleted),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Conflict::BothModified => "both modified",
            Conflict::AddedByUs => "added by us",
            Conflict::DeletedByThem => "deleted by them",
            Conflict::AddedByThem => "added by them",
            Conflict::DeletedByUs => "deleted by us",
            Conflict::BothAdded => "both added",
            Conflict::BothDeleted => "both deleted",
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A path in unresolved merge state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmergedEntry {
    pub path: String,
    pub conflict: Conflict,
}

impl UnmergedEntry {
    pub fn description(&self) -> &'static str {
        self.conflict.description()
    }
}

/// Classified working tree and index state of one repository
///
/// Built by [`crate::git::parser::parse_status_porcelain`]. Every category
/// keeps the order in which paths appeared in the status output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResult {
    /// `None` when the output carried no branch-summary line
    pub head: Option<Head>,
    pub branch_remote: Option<String>,
    pub ahead: usize,
    pub behind: usize,
    pub deleted_staged: Vec<String>,
    pub deleted_work_tree: Vec<String>,
    pub untracked: Vec<String>,
    pub renamed: Vec<RenamedPath>,
    pub added: Vec<String>,
    pub modified_staged: Vec<String>,
    pub modified_work_tree: Vec<String>,
    pub unmerged: Vec<UnmergedEntry>,
}

impl StatusResult {
    /// Branch name, `"detached"` for a detached HEAD
    pub fn branch(&self) -> Option<&str> {
        self.head.as_ref().map(Head::name)
    }

    /// Anything is staged in the index
    pub fn staged(&self) -> bool {
        !self.modified_staged.is_empty()
            || !self.added.is_empty()
            || !self.renamed.is_empty()
            || !self.deleted_staged.is_empty()
    }

    /// Tracked files differ from the index
    pub fn not_staged(&self) -> bool {
        !self.modified_work_tree.is_empty() || !self.deleted_work_tree.is_empty()
    }

    /// Any category, conflicts included, is non-empty
    pub fn changes(&self) -> bool {
        self.staged() || self.not_staged() || !self.untracked.is_empty() || !self.unmerged.is_empty()
    }

    /// Local branch has diverged from its upstream in either direction
    pub fn diverged(&self) -> bool {
        self.ahead > 0 || self.behind > 0
    }
}
