// Integration test utilities and common code
// WHY: Centralized fixtures avoid duplication across integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::fs;
use tempfile::TempDir;

/// Pasted channel description touching every category
pub const CHANNEL_ABOUT: &str = "\
Welcome to the channel! Business: jane.doe+tag@sub.example.co
Support: support@example.com (or support@example.com again)
Discord: CoolUser#1234 / discord.gg/abc123 / ping @another_user
Follow @jdoe or twitter.com/jdoe and https://x.com/jdoe_alt
facebook.com/jane.page fb.com/jane.page
instagram.com/jane_doe.art
linkedin.com/in/jane-doe linkedin.com/company/acme-co
youtube.com/channel/xyz youtu.be/xyz
tiktok.com/@jane.dances
github.com/janedoe
";

/// Test fixture helper for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a text file under the fixture root
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Assert a list has no repeated values, naming the category on failure
pub fn assert_unique(items: &[String], context: &str) {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        if !seen.insert(item) {
            panic!("{}: duplicate value {:?} in {:?}", context, item, items);
        }
    }
}
