use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only record of the actions rgit ran in each repository
pub struct CommandHistory {
    log_path: PathBuf,
}

impl CommandHistory {
    /// Create a CommandHistory at the default path
    pub fn new() -> std::io::Result<Self> {
        Self::with_path(Self::default_log_path()?)
    }

    /// Create a CommandHistory with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        // Ensure directory exists
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Get the default log path: ~/.config/rgit/history.log
    fn default_log_path() -> std::io::Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("rgit")
            .join("history.log"))
    }

    /// Record one executed command
    pub fn log_command(&self, command: &str, repo_path: &Path, succeeded: bool) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());
        let outcome = if succeeded { "ok" } else { "failed" };

        let log_entry = format!(
            "[{}] [{}] [{}] [{}] {}\n",
            timestamp,
            user,
            repo_path.display(),
            outcome,
            command
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        if fs::metadata(&self.log_path)?.len() > MAX_LOG_SIZE {
            // history.log -> history.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_command() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");

        let history = CommandHistory::with_path(&log_path).unwrap();
        history
            .log_command("git pull --all", Path::new("/work/repo"), true)
            .unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("git pull --all"));
        assert!(content.contains("[/work/repo]"));
        assert!(content.contains("[ok]"));
    }

    #[test]
    fn test_failed_command_is_marked() {
        let temp_dir = TempDir::new().unwrap();
        let history = CommandHistory::with_path(temp_dir.path().join("nested/history.log")).unwrap();

        history
            .log_command("git push", Path::new("/work/repo"), false)
            .unwrap();
        history
            .log_command("git fetch", Path::new("/work/other"), true)
            .unwrap();

        let content = fs::read_to_string(history.log_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[failed] git push"));
        assert!(lines[1].ends_with("[ok] git fetch"));
    }

    #[test]
    fn test_log_rotation() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("history.log");
        let history = CommandHistory::with_path(&log_path).unwrap();

        // Write a large entry to trigger rotation
        let large_command = "git ".to_string() + &"x".repeat(MAX_LOG_SIZE as usize);
        history.log_command(&large_command, Path::new("/r"), true).unwrap();
        history.log_command("git fetch", Path::new("/r"), true).unwrap();

        assert!(log_path.with_extension("log.1").exists());
        assert!(fs::metadata(&log_path).unwrap().len() < MAX_LOG_SIZE);
    }
}
