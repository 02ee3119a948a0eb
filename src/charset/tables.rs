//! GSM 03.38 lookup tables.
//!
//! Both tables are sorted by code point so membership checks can use a binary
//! search. [`GSM_BASIC`] lists every character representable in a GSM-encoded
//! message, extension characters included. [`GSM_EXTENSION`] lists the subset
//! that is sent as an escape byte followed by a data byte.

/// Characters accepted by the GSM 7-bit default alphabet.
pub(super) const GSM_BASIC: &[char] = &[
    '\n', '\u{0C}', '\r', ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-',
    '.', '/', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', '@',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '{', '|', '}', '~', '¡', '£', '¤', '¥', '§', '¿', 'Ä', 'Å', 'Æ', 'Ç', 'É', 'Ñ', 'Ö', 'Ø', 'Ü',
    'ß', 'à', 'ä', 'å', 'æ', 'è', 'é', 'ì', 'ñ', 'ò', 'ö', 'ø', 'ù', 'ü', 'Γ', 'Δ', 'Θ', 'Λ', 'Ξ',
    'Π', 'Σ', 'Φ', 'Ψ', 'Ω', '€',
];

/// Characters encoded through the extension table escape.
pub(super) const GSM_EXTENSION: &[char] =
    &['\u{0C}', '[', '\\', ']', '^', '{', '|', '}', '~', '€'];
