//! Character set classification for SMS payloads.
//!
//! SMS user data is carried either in the GSM 7-bit default alphabet or in
//! UCS-2. Classification is all-or-nothing: a single character outside the GSM
//! table forces the whole message into [`Charset::Unicode`].

mod tables;

use std::str::FromStr;

use bincode::{Decode, Encode};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::SegmentationError;

/// Report whether every character of `text` belongs to the GSM default alphabet.
///
/// Extension table characters such as `€` or `{` count as GSM; they only cost
/// an extra escape byte when encoded.
///
/// # Examples
///
/// ```
/// assert!(smsplit::is_gsm("Price: 5€ {net}"));
/// assert!(!smsplit::is_gsm("Temperature: 21°"));
/// ```
#[must_use]
pub fn is_gsm(text: &str) -> bool { text.chars().all(is_gsm_char) }

/// Report whether `text` needs UCS-2 encoding. Always the negation of [`is_gsm`].
#[must_use]
pub fn is_unicode(text: &str) -> bool { !is_gsm(text) }

/// Report whether `ch` is in the GSM default alphabet.
#[must_use]
pub fn is_gsm_char(ch: char) -> bool { tables::GSM_BASIC.binary_search(&ch).is_ok() }

/// Report whether `ch` is sent through the GSM extension table escape.
#[must_use]
pub fn is_gsm_extension(ch: char) -> bool { tables::GSM_EXTENSION.binary_search(&ch).is_ok() }

/// Encoding applied to a segmented message.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, Display,
)]
pub enum Charset {
    /// GSM 03.38 7-bit default alphabet.
    #[display("GSM")]
    #[serde(rename = "GSM")]
    Gsm,
    /// UCS-2, with UTF-16 surrogate pairs for characters beyond the BMP.
    #[display("Unicode")]
    #[serde(rename = "Unicode")]
    Unicode,
}

impl Charset {
    /// Classify `text`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if is_gsm(text) {
            Self::Gsm
        } else {
            Self::Unicode
        }
    }

    /// Bytes occupied by one ordinary character.
    #[must_use]
    pub const fn unit_bytes(self) -> usize {
        match self {
            Self::Gsm => 1,
            Self::Unicode => 2,
        }
    }

    /// Bytes `ch` occupies when encoded with this charset.
    ///
    /// GSM extension characters cost an escape byte plus a data byte. In UCS-2,
    /// characters outside the Basic Multilingual Plane need a surrogate pair.
    #[must_use]
    pub fn encoded_len(self, ch: char) -> usize {
        match self {
            Self::Gsm if is_gsm_extension(ch) => 2,
            Self::Gsm => 1,
            Self::Unicode => ch.len_utf16() * 2,
        }
    }
}

/// Caller preference for the message charset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharsetSelector {
    /// Detect the charset from the message content.
    #[default]
    Auto,
    /// Force GSM encoding regardless of content.
    Gsm,
    /// Force UCS-2 encoding regardless of content.
    Unicode,
}

impl CharsetSelector {
    /// The library default (currently [`CharsetSelector::Auto`]).
    pub const DEFAULT: CharsetSelector = CharsetSelector::Auto;

    /// Resolve the charset used for `text`.
    #[must_use]
    pub fn resolve(self, text: &str) -> Charset {
        match self {
            Self::Gsm => Charset::Gsm,
            Self::Unicode => Charset::Unicode,
            Self::Auto => Charset::detect(text),
        }
    }

    /// Wire name of the selector. [`CharsetSelector::Auto`] maps to `auto`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Gsm => "GSM",
            Self::Unicode => "Unicode",
        }
    }
}

impl FromStr for CharsetSelector {
    type Err = SegmentationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "auto" => Ok(Self::Auto),
            "GSM" => Ok(Self::Gsm),
            "Unicode" => Ok(Self::Unicode),
            other => Err(SegmentationError::UnsupportedCharset {
                selector: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for CharsetSelector {
    type Error = SegmentationError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<CharsetSelector> for String {
    fn from(value: CharsetSelector) -> Self { value.as_str().to_owned() }
}

impl From<Charset> for CharsetSelector {
    fn from(value: Charset) -> Self {
        match value {
            Charset::Gsm => Self::Gsm,
            Charset::Unicode => Self::Unicode,
        }
    }
}

impl std::fmt::Display for CharsetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
