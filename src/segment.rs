//! Output types describing a segmented message.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::charset::Charset;

/// One SMS fragment of a segmented message.
///
/// Fragments can be stored or forwarded with serde or bincode. A decoded
/// fragment carries the counts it was encoded with; they are not recomputed
/// from its content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct Fragment {
    content: String,
    bytes: usize,
    length: usize,
}

impl Fragment {
    pub(crate) fn new(content: String, bytes: usize, length: usize) -> Self {
        Self {
            content,
            bytes,
            length,
        }
    }

    /// Text carried by the fragment.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Encoded payload size in bytes, escape bytes and surrogates included.
    #[must_use]
    pub const fn bytes(&self) -> usize { self.bytes }

    /// Number of characters (Unicode scalar values) in the fragment.
    #[must_use]
    pub const fn length(&self) -> usize { self.length }

    /// Consume the fragment, returning its text.
    #[must_use]
    pub fn into_content(self) -> String { self.content }

    pub(crate) fn absorb(&mut self, other: Fragment) {
        self.content.push_str(&other.content);
        self.bytes += other.bytes;
        self.length += other.length;
    }
}

/// Result of segmenting one message.
///
/// The fragment count is always derived from the fragment list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segmentation {
    charset: Charset,
    fragments: Vec<Fragment>,
    remaining_chars: usize,
}

impl Segmentation {
    pub(crate) fn new(charset: Charset, fragments: Vec<Fragment>, remaining_chars: usize) -> Self {
        Self {
            charset,
            fragments,
            remaining_chars,
        }
    }

    /// Charset the message was encoded with.
    #[must_use]
    pub const fn charset(&self) -> Charset { self.charset }

    /// Total number of characters across all fragments.
    #[must_use]
    pub fn total_length(&self) -> usize { self.fragments.iter().map(Fragment::length).sum() }

    /// Total encoded bytes across all fragments.
    #[must_use]
    pub fn total_bytes(&self) -> usize { self.fragments.iter().map(Fragment::bytes).sum() }

    /// Number of SMS needed to send the message.
    #[must_use]
    pub fn fragment_count(&self) -> usize { self.fragments.len() }

    /// Whether the message needs a concatenation header.
    #[must_use]
    pub fn is_concatenated(&self) -> bool { self.fragments.len() > 1 }

    /// Fragments in sending order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] { &self.fragments }

    /// Characters still available in the last fragment before another split.
    #[must_use]
    pub const fn remaining_chars(&self) -> usize { self.remaining_chars }

    /// Consume the segmentation, returning its fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> { self.fragments }
}

impl IntoIterator for Segmentation {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.into_iter() }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.iter() }
}

impl Serialize for Segmentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Segmentation", 6)?;
        state.serialize_field("charset", &self.charset)?;
        state.serialize_field("totalLength", &self.total_length())?;
        state.serialize_field("totalBytes", &self.total_bytes())?;
        state.serialize_field("fragmentCount", &self.fragment_count())?;
        state.serialize_field("fragments", &self.fragments)?;
        state.serialize_field("remainingChars", &self.remaining_chars)?;
        state.end()
    }
}
