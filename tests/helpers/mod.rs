#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn git(repo_path: &Path, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
}

/// Initialize a git repository with a test identity at `repo_path`
pub fn init_repo(repo_path: &Path) {
    fs::create_dir_all(repo_path).expect("Failed to create repo dir");
    git(repo_path, &["init"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
}

/// Helper to create a test git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();
    init_repo(&repo_path);
    (temp_dir, repo_path)
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// Clone `upstream` into `clone` and give the clone a test identity
pub fn clone_repo(upstream: &Path, clone: &Path) {
    Command::new("git")
        .args(["clone", "-q"])
        .arg(upstream)
        .arg(clone)
        .output()
        .expect("Failed to clone");
    git(clone, &["config", "user.name", "Test User"]);
    git(clone, &["config", "user.email", "test@example.com"]);
}

/// Stage a path
pub fn stage(repo_path: &Path, file: &str) {
    git(repo_path, &["add", file]);
}

/// A directory that only looks like a repository: it holds an empty `.git`
pub fn create_fake_repo(path: &Path) {
    fs::create_dir_all(path.join(".git")).expect("Failed to create .git dir");
}
