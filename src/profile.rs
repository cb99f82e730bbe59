//! Language profiles and delimiter configuration
//! Selects which characters open and close a list and which languages the
//! scanner accepts.

use crate::error::{Result, ScanError};

/// Opening characters a configuration is allowed to contain.
pub const ALLOWED_OPENERS: &str = "{[(<";

/// Characters filtered out of a raw delimiter setting before validation
/// (separators a user plausibly types between delimiters).
const SETTING_SEPARATORS: &str = ",'\" ";

/// Language profile for a scan. All supported profiles share C-style
/// comments and the same quote characters; the profile exists to reject
/// languages the scanner has no business classifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    C,
    Cpp,
    Json,
    Jsonc,
    JavaScript,
    TypeScript,
}

impl Profile {
    /// Resolve a language id string (e.g., "typescript")
    pub fn from_id(id: &str) -> Result<Profile> {
        match id {
            "c" => Ok(Profile::C),
            "cpp" => Ok(Profile::Cpp),
            "json" => Ok(Profile::Json),
            "jsonc" => Ok(Profile::Jsonc),
            "javascript" => Ok(Profile::JavaScript),
            "typescript" => Ok(Profile::TypeScript),
            other => Err(ScanError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// The canonical id string for this profile
    pub fn id(&self) -> &'static str {
        match self {
            Profile::C => "c",
            Profile::Cpp => "cpp",
            Profile::Json => "json",
            Profile::Jsonc => "jsonc",
            Profile::JavaScript => "javascript",
            Profile::TypeScript => "typescript",
        }
    }
}

/// The closing counterpart of a valid opening character.
///
/// `(` and `)` are adjacent codepoints; the other pairs are two apart.
fn matching_close(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' | '[' | '<' => char::from_u32(open as u32 + 2),
        _ => None,
    }
}

/// The set of characters treated as list delimiters.
///
/// Holds the configured opening characters and their derived closing
/// counterparts. Construction validates up front; classification never
/// fails on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    open: Vec<char>,
    close: Vec<char>,
}

impl Delimiters {
    /// Build a delimiter set from opening characters.
    ///
    /// Every character must be one of `{[(<`; the closing set is derived.
    pub fn new(openers: &str) -> Result<Delimiters> {
        let mut open = Vec::new();
        let mut close = Vec::new();
        for ch in openers.chars() {
            let closer = matching_close(ch).ok_or(ScanError::InvalidConfiguration(ch))?;
            open.push(ch);
            close.push(closer);
        }
        Ok(Delimiters { open, close })
    }

    /// Resolve a raw user setting into a delimiter set.
    ///
    /// Filters out separator punctuation (`,`, quotes, spaces), then
    /// validates. An empty or invalid remainder falls back to the default
    /// set rather than failing: a broken setting must not disable
    /// navigation.
    pub fn from_setting(raw: &str) -> Delimiters {
        let candidates: String = raw
            .chars()
            .filter(|c| !SETTING_SEPARATORS.contains(*c))
            .collect();
        if candidates.is_empty() {
            return Delimiters::default();
        }
        Delimiters::new(&candidates).unwrap_or_default()
    }

    /// Is `ch` a configured opening delimiter?
    pub fn is_open(&self, ch: char) -> bool {
        self.open.contains(&ch)
    }

    /// Is `ch` a derived closing delimiter?
    pub fn is_close(&self, ch: char) -> bool {
        self.close.contains(&ch)
    }

    /// The configured opening characters
    pub fn openers(&self) -> &[char] {
        &self.open
    }

    /// The derived closing characters
    pub fn closers(&self) -> &[char] {
        &self.close
    }
}

impl Default for Delimiters {
    /// Braces only, matching the stock configuration.
    fn default() -> Self {
        Delimiters {
            open: vec!['{'],
            close: vec!['}'],
        }
    }
}
