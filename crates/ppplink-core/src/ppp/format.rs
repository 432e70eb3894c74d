use std::fmt::Write as _;

use crate::registry::ProtocolResolver;

use super::layout;
use super::parser::PppHeader;

/// Marker returned when the declared budget or the buffer itself is
/// smaller than the fixed header.
pub const TRUNCATED_MARKER: &str = "ppp header truncated";

const PREVIEW_INDENT: &str = "  ";

/// Renders a host-byte-order protocol id as its registered name, or as
/// a zero-padded hex literal when unknown.
pub fn format_protocol(resolver: &impl ProtocolResolver, protocol_id: u16) -> String {
    match resolver.lookup_by_id(protocol_id) {
        Some(record) => record.name.clone(),
        None => format!("0x{protocol_id:04x}"),
    }
}

/// Formats the header at the start of `buf` for diagnostics.
///
/// `max_header_bytes` declares how much of the original wire buffer is
/// actually available; zero means "unbounded". A budget or buffer
/// smaller than the fixed header yields the truncation marker with no
/// registry lookup performed. Address and control are appended only
/// when they differ from the conventional `0xff`/`0x03`, keeping
/// common-case traces terse. If payload bytes remain within the budget
/// and the resolved protocol's dispatch target carries a payload
/// formatter, its output is appended indented on the next line; a
/// missing formatter renders no preview and is not an error.
pub fn format_header_with_length(
    resolver: &impl ProtocolResolver,
    buf: &[u8],
    max_header_bytes: usize,
) -> String {
    if max_header_bytes != 0 && layout::HEADER_BYTES > max_header_bytes {
        return TRUNCATED_MARKER.to_string();
    }
    let Ok(header) = PppHeader::from_wire(buf) else {
        return TRUNCATED_MARKER.to_string();
    };

    let mut s = format!("PPP {}", format_protocol(resolver, header.protocol));

    if header.address != layout::DEFAULT_ADDRESS {
        let _ = write!(s, ", address 0x{:02x}", header.address);
    }
    if header.control != layout::DEFAULT_CONTROL {
        let _ = write!(s, ", control 0x{:02x}", header.control);
    }

    let available = if max_header_bytes == 0 {
        buf.len()
    } else {
        buf.len().min(max_header_bytes)
    };
    if available > layout::HEADER_BYTES {
        if let Some(formatter) = resolver
            .lookup_by_id(header.protocol)
            .and_then(|record| record.dispatch_target.as_ref())
            .and_then(|target| target.payload_formatter)
        {
            let preview = formatter(&buf[layout::HEADER_BYTES..available]);
            let _ = write!(s, "\n{PREVIEW_INDENT}{preview}");
        }
    }

    s
}

/// Formats a header value alone, with no payload and no budget.
pub fn format_header(resolver: &impl ProtocolResolver, header: &PppHeader) -> String {
    format_header_with_length(resolver, &header.to_wire(), 0)
}
