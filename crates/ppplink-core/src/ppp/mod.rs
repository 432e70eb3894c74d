//! PPP framing header codec.
//!
//! The codec serializes the fixed 4-byte header (address, control,
//! 16-bit network-order protocol) to diagnostic text and parses
//! textual protocol specifications back into wire bytes. Byte offsets
//! and protocol numbers are defined in `layout`, safe byte access in
//! `reader`, decoding and text parsing in `parser`, text rendering in
//! `format`.
//!
//! All functions are pure: the only shared state they touch is the
//! read-only protocol registry handed in by the caller.
//!
//! Version française (résumé):
//! Le codec sérialise l'en-tête PPP de 4 octets en texte de diagnostic
//! et analyse les spécifications textuelles de protocole. Les
//! positions sont dans `layout`, les lectures sûres dans `reader`, le
//! décodage dans `parser`, le rendu dans `format`.

pub mod error;
pub mod format;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::{HeaderError, ParseError};
pub use format::{TRUNCATED_MARKER, format_header, format_header_with_length, format_protocol};
pub use parser::{PppHeader, parse_protocol, parse_protocol_net, unformat_header};
