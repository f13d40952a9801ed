//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// A flag in the default format: 31 uppercase alphanumerics and `=`.
#[allow(dead_code)]
pub fn sample_flag(fill: char) -> String {
    format!("{}=", fill.to_string().repeat(31))
}

/// Write `content` to a temporary TOML file kept alive by the returned handle.
#[allow(dead_code)]
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Set an environment variable for the duration of the guard.
#[allow(dead_code)]
pub struct EnvGuard {
    name: &'static str,
    previous: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(name: &'static str, value: &str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::set_var(name, value);
        Self { name, previous }
    }

    pub fn unset(name: &'static str) -> Self {
        let previous = std::env::var(name).ok();
        std::env::remove_var(name);
        Self { name, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(self.name, value),
            None => std::env::remove_var(self.name),
        }
    }
}
