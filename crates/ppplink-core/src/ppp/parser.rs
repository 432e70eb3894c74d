use crate::registry::ProtocolResolver;

use super::error::{HeaderError, ParseError};
use super::layout;
use super::reader::PppReader;

/// Decoded PPP framing header.
///
/// `protocol` is held in host byte order; `from_wire`/`to_wire` are
/// the only places that touch the network-order representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PppHeader {
    pub address: u8,
    pub control: u8,
    pub protocol: u16,
}

impl PppHeader {
    /// Header with the conventional address/control bytes.
    /// `protocol` is host byte order.
    pub fn new(protocol: u16) -> Self {
        Self {
            address: layout::DEFAULT_ADDRESS,
            control: layout::DEFAULT_CONTROL,
            protocol,
        }
    }

    /// Decodes the fixed 4-byte header from the start of `buf`.
    /// The protocol field is converted from network to host order.
    pub fn from_wire(buf: &[u8]) -> Result<Self, HeaderError> {
        let reader = PppReader::new(buf);
        reader.require_len(layout::HEADER_BYTES)?;
        Ok(Self {
            address: reader.read_u8(layout::ADDRESS_OFFSET)?,
            control: reader.read_u8(layout::CONTROL_OFFSET)?,
            protocol: reader.read_u16_be(layout::PROTOCOL_RANGE.clone())?,
        })
    }

    /// Wire bytes, protocol field in network byte order.
    pub fn to_wire(&self) -> [u8; layout::HEADER_BYTES] {
        let protocol = self.protocol.to_be_bytes();
        [self.address, self.control, protocol[0], protocol[1]]
    }
}

/// Parses a textual protocol specification to a host-byte-order id.
///
/// Accepts `0x` + 1..=4 hex digits, a decimal integer in `[0, 65535]`,
/// or a registered protocol name. Out-of-range numerics are rejected,
/// never silently truncated.
pub fn parse_protocol(
    resolver: &impl ProtocolResolver,
    input: &str,
) -> Result<u16, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidSpec {
            input: input.to_string(),
        });
    }

    if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        let value = u64::from_str_radix(hex, 16).map_err(|_| ParseError::InvalidSpec {
            input: input.to_string(),
        })?;
        return range_checked(value);
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        let value: u64 = input.parse().map_err(|_| ParseError::InvalidSpec {
            input: input.to_string(),
        })?;
        return range_checked(value);
    }

    match resolver.lookup_by_name(input) {
        Some(record) => Ok(record.protocol_id),
        None => Err(ParseError::UnknownName {
            name: input.to_string(),
        }),
    }
}

/// Same resolution as [`parse_protocol`], but the returned value is
/// already byte-swapped to network order, for callers assembling wire
/// buffers directly.
pub fn parse_protocol_net(
    resolver: &impl ProtocolResolver,
    input: &str,
) -> Result<u16, ParseError> {
    parse_protocol(resolver, input).map(u16::to_be)
}

/// Parses a protocol specification and appends the complete 4-byte
/// header (`ff 03` + protocol in network order) to `out`. On failure
/// nothing is appended.
pub fn unformat_header(
    resolver: &impl ProtocolResolver,
    input: &str,
    out: &mut Vec<u8>,
) -> Result<(), ParseError> {
    let protocol = parse_protocol(resolver, input)?;
    out.extend_from_slice(&PppHeader::new(protocol).to_wire());
    Ok(())
}

fn range_checked(value: u64) -> Result<u16, ParseError> {
    if value > u16::MAX as u64 {
        return Err(ParseError::ValueOutOfRange { value });
    }
    Ok(value as u16)
}
