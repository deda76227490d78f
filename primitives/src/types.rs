//! Core type aliases and the entity value codec.
//!
//! Entity values are string-encoded signed integers: base-10 decimal text
//! stored as raw bytes. External callers depend on this wire form, so the
//! codec never switches to a binary integer encoding.

/// Signed asset holding of a ledger entity.
pub type Amount = i64;

/// Parse an amount from its decimal text form.
///
/// Accepts an optional leading sign, digits only. Returns `None` for
/// anything else, including empty input.
pub fn amount_from_str(s: &str) -> Option<Amount> {
    s.parse().ok()
}

/// Encode an amount as canonical decimal text bytes.
///
/// Writes always go through this, so stored values are canonical even when
/// the caller supplied a non-canonical spelling such as `"007"` or `"+7"`.
pub fn amount_to_bytes(value: Amount) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Decode an amount from stored value bytes.
///
/// Returns `None` if the bytes are not UTF-8 or do not parse as a base-10
/// integer. Stored values that fail here are treated as a fatal read error
/// by the contract — it never writes non-numeric values itself.
pub fn amount_from_bytes(bytes: &[u8]) -> Option<Amount> {
    core::str::from_utf8(bytes).ok().and_then(amount_from_str)
}
