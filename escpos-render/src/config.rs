use anyhow::bail;
use std::path::PathBuf;

/// escpos-render configuration, read from environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Print job JSON file (stdin when unset or "-")
    pub job: Option<PathBuf>,
    /// Output file for the rendered bytes (stdout when unset)
    pub output: Option<PathBuf>,
    /// Write base64 text instead of raw bytes
    pub base64: bool,
    /// Default substitute for unmappable characters, unless the job sets one
    pub replacement: Option<char>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let replacement = match lookup("ESCPOS_REPLACEMENT") {
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => bail!("ESCPOS_REPLACEMENT must be a single character, got {value:?}"),
                }
            }
            None => None,
        };

        Ok(Self {
            job: lookup("ESCPOS_JOB")
                .filter(|p| p != "-")
                .map(PathBuf::from),
            output: lookup("ESCPOS_OUTPUT").map(PathBuf::from),
            base64: lookup("ESCPOS_BASE64")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            replacement,
        })
    }

    /// Override the job path from the first command line argument
    pub fn with_job_arg(mut self, arg: Option<String>) -> Self {
        if let Some(arg) = arg {
            self.job = (arg != "-").then(|| PathBuf::from(arg));
        }
        self
    }
}
