//! Page copy that feeds the behavioral components: stat counters, the
//! services grid and the words the hero badge rotates through.
//!
//! The data ships inside the wasm bundle (`content/site.json`) and is parsed
//! once at start-up.

use log::warn;
use serde::Deserialize;

use crate::error::{Result, SiteError};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u64,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    pub label: String,
}

impl Stat {
    /// Text shown for `value` with this stat's affixes, e.g. `30K+` or `#1`.
    pub fn render(&self, value: u64) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            value,
            self.suffix.as_deref().unwrap_or("")
        )
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub rotating_words: Vec<String>,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        if content.rotating_words.is_empty() {
            return Err(SiteError::EmptyWordList);
        }
        Ok(content)
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(SITE_JSON)
    }

    /// Embedded content, or the minimal built-in copy if the bundle is broken.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(content) => content,
            Err(e) => {
                warn!("Falling back to built-in content: {}", e);
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        SiteContent {
            stats: Vec::new(),
            services: Vec::new(),
            rotating_words: vec!["media".to_string()],
        }
    }
}
