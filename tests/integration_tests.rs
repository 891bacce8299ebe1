//! # Integration Tests for nexttrack
//!
//! Runs the real binary against temporary music folders and checks what a
//! calling script would see: stdout, exit status and the history file.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test helper to create a music folder with the given files and a history location
fn create_test_library(files: &[&str]) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let music = temp_dir.path().join("music");
    fs::create_dir_all(&music)?;

    for file in files {
        let path = music.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, b"not a real audio file")?;
    }

    let history = temp_dir.path().join("data").join("history.json");
    Ok((temp_dir, music, history))
}

fn nexttrack(music: &Path, history: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nexttrack"))
        .arg("--music-dir")
        .arg(music)
        .arg("--history-file")
        .arg(history)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run nexttrack")
}

fn read_history(history: &Path) -> Result<Vec<String>> {
    Ok(serde_json::from_str(&fs::read_to_string(history)?)?)
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = Command::new(env!("CARGO_BIN_EXE_nexttrack"))
            .arg("--help")
            .output()
            .expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("nexttrack"));
        assert!(stdout.contains("history"));
        assert!(stdout.contains("--music-dir"));
    }

    #[test]
    fn test_completion_generation() {
        let output = Command::new(env!("CARGO_BIN_EXE_nexttrack"))
            .args(["completion", "bash"])
            .output()
            .expect("Failed to run completion command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_nexttrack"));
        assert!(stdout.contains("complete"));
    }
}

#[cfg(test)]
mod pick_tests {
    use super::*;

    #[test]
    fn test_pick_prints_single_absolute_path() -> Result<()> {
        let (_temp_dir, music, history) =
            create_test_library(&["a.mp3", "b.ogg", "album/c.FLAC", "cover.jpg"])?;

        let output = nexttrack(&music, &history, &[]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 1);

        let picked = Path::new(lines[0]);
        assert!(picked.is_absolute());
        assert!(picked.exists());
        assert_ne!(picked.extension().and_then(|e| e.to_str()), Some("jpg"));
        Ok(())
    }

    #[test]
    fn test_pick_records_history() -> Result<()> {
        let (_temp_dir, music, history) = create_test_library(&["a.mp3", "b.mp3"])?;

        let output = nexttrack(&music, &history, &["pick"]);
        assert!(output.status.success());

        let picked = String::from_utf8(output.stdout)?.trim().to_string();
        assert_eq!(read_history(&history)?, vec![picked]);
        Ok(())
    }

    #[test]
    fn test_history_stays_bounded() -> Result<()> {
        let names: Vec<String> = (0..30).map(|i| format!("{i:02}.mp3")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (_temp_dir, music, history) = create_test_library(&refs)?;

        let mut picks = Vec::new();
        for _ in 0..24 {
            let output = nexttrack(&music, &history, &[]);
            assert!(output.status.success());
            picks.push(String::from_utf8(output.stdout)?.trim().to_string());
        }

        let stored = read_history(&history)?;
        assert_eq!(stored.len(), 20);
        assert_eq!(stored, picks[4..].to_vec());

        // With 30 tracks the last 10 picks never repeat
        for window in picks.windows(11) {
            let (recent, next) = window.split_at(10);
            assert!(!recent.contains(&next[0]), "{} repeated too soon", next[0]);
        }
        Ok(())
    }

    #[test]
    fn test_history_command_lists_picks() -> Result<()> {
        let (_temp_dir, music, history) = create_test_library(&["a.mp3", "b.mp3", "c.mp3"])?;

        let first = nexttrack(&music, &history, &[]);
        let second = nexttrack(&music, &history, &[]);
        let listed = nexttrack(&music, &history, &["history"]);
        assert!(listed.status.success());

        let expected = format!(
            "{}{}",
            String::from_utf8(first.stdout)?,
            String::from_utf8(second.stdout)?
        );
        assert_eq!(String::from_utf8(listed.stdout)?, expected);
        Ok(())
    }

    #[test]
    fn test_corrupt_history_is_ignored() -> Result<()> {
        let (_temp_dir, music, history) = create_test_library(&["a.mp3"])?;
        fs::create_dir_all(history.parent().unwrap())?;
        fs::write(&history, "{ this is not json")?;

        let output = nexttrack(&music, &history, &[]);
        assert!(output.status.success());
        assert_eq!(read_history(&history)?.len(), 1);
        Ok(())
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_music_dir_exits_nonzero_silently() -> Result<()> {
        let (temp_dir, _music, history) = create_test_library(&[])?;

        let output = nexttrack(&temp_dir.path().join("nowhere"), &history, &[]);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
        assert!(!history.exists());
        Ok(())
    }

    #[test]
    fn test_empty_music_dir_exits_with_its_own_code() -> Result<()> {
        let (_temp_dir, music, history) = create_test_library(&["readme.txt"])?;

        let output = nexttrack(&music, &history, &[]);
        assert_eq!(output.status.code(), Some(3));
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
        Ok(())
    }
}
