//! Parsing of the free-text extension list.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `2.9.8`, `5.0.0rc1`, `1.2.3preview`
static RELEASE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+\.\d+)([a-z]+\d*)?$").unwrap());

/// Stability tier requested with a `-<channel>` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Stable,
    Beta,
    Alpha,
    Devel,
    Snapshot,
}

impl Channel {
    /// Recognise a lowercased token suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "stable" => Some(Channel::Stable),
            "beta" => Some(Channel::Beta),
            "alpha" => Some(Channel::Alpha),
            "devel" => Some(Channel::Devel),
            "snapshot" => Some(Channel::Snapshot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
            Channel::Alpha => "alpha",
            Channel::Devel => "devel",
            Channel::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized entry of the extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionToken {
    /// Lowercased name with any channel or release suffix removed
    pub name: String,
    pub channel: Option<Channel>,
    /// Explicit release such as `2.9.8` or `5.0.0rc1`
    pub release: Option<String>,
}

impl ExtensionToken {
    /// Normalize one raw token. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }

        if let Some((name, suffix)) = token.rsplit_once('-') {
            if !name.is_empty() {
                if let Some(channel) = Channel::from_suffix(suffix) {
                    return Some(Self {
                        name: name.to_string(),
                        channel: Some(channel),
                        release: None,
                    });
                }
                if RELEASE_SUFFIX.is_match(suffix) {
                    return Some(Self {
                        name: name.to_string(),
                        channel: None,
                        release: Some(suffix.to_string()),
                    });
                }
            }
        }

        Some(Self {
            name: token,
            channel: None,
            release: None,
        })
    }
}

impl fmt::Display for ExtensionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(channel) = self.channel {
            write!(f, "-{channel}")?;
        }
        if let Some(release) = &self.release {
            write!(f, "-{release}")?;
        }
        Ok(())
    }
}

/// The ordered list of requested extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionRequest {
    tokens: Vec<ExtensionToken>,
}

impl ExtensionRequest {
    /// Split comma-separated text, dropping blank entries.
    pub fn parse(text: &str) -> Self {
        Self {
            tokens: text.split(',').filter_map(ExtensionToken::parse).collect(),
        }
    }

    pub fn tokens(&self) -> &[ExtensionToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl From<&str> for ExtensionRequest {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Split an explicit release into its numeric part and pre-release state.
///
/// `"5.0.0rc1"` -> `("5.0.0", Some("rc"))`, `"2.9.8"` -> `("2.9.8", None)`.
pub fn split_release(release: &str) -> (&str, Option<&str>) {
    match RELEASE_SUFFIX.captures(release) {
        Some(caps) => {
            let number = caps.get(1).map_or(release, |m| m.as_str());
            let state = caps
                .get(2)
                .map(|m| m.as_str().trim_end_matches(|c: char| c.is_ascii_digit()));
            (number, state)
        }
        None => (release, None),
    }
}
