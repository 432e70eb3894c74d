//! Rewrite templates for outgoing packets.
//!
//! A rewrite is the static 4-byte header prepended verbatim to every
//! outgoing packet of a given upper-layer type on a link. The mapping
//! from link type to protocol number is fixed at compile time; only a
//! small closed set of upper-layer types is ever PPP-encapsulated.
//! Callers cache the template per link rather than rebuild it per
//! packet.

use thiserror::Error;

use crate::ppp::layout;
use crate::ppp::parser::PppHeader;

/// Upper-layer type carried on a link. `Ethernet` and `Arp` exist for
/// the interface layer's benefit; PPP has no encapsulation for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    Ip4,
    Ip6,
    MplsUnicast,
    Ethernet,
    Arp,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    #[error("no PPP encapsulation for link type {0:?}")]
    UnsupportedLinkType(LinkType),
}

/// Builds the static header bytes for one upper-layer type:
/// `ff 03` + the mapped protocol number in network byte order.
/// Unsupported types produce no bytes.
pub fn build_rewrite(link_type: LinkType) -> Result<[u8; layout::HEADER_BYTES], RewriteError> {
    let protocol = match link_type {
        LinkType::Ip4 => layout::PROTOCOL_IP4,
        LinkType::Ip6 => layout::PROTOCOL_IP6,
        LinkType::MplsUnicast => layout::PROTOCOL_MPLS_UNICAST,
        other => return Err(RewriteError::UnsupportedLinkType(other)),
    };
    Ok(PppHeader::new(protocol).to_wire())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip4_and_ip6_differ_only_in_protocol() {
        let ip4 = build_rewrite(LinkType::Ip4).unwrap();
        let ip6 = build_rewrite(LinkType::Ip6).unwrap();
        assert_eq!(ip4[..2], ip6[..2]);
        assert_ne!(ip4[2..], ip6[2..]);
        assert_eq!(ip4, [0xff, 0x03, 0x00, 0x21]);
        assert_eq!(ip6, [0xff, 0x03, 0x00, 0x57]);
    }

    #[test]
    fn mpls_unicast_template() {
        let mpls = build_rewrite(LinkType::MplsUnicast).unwrap();
        assert_eq!(mpls, [0xff, 0x03, 0x02, 0x81]);
    }

    #[test]
    fn unsupported_link_types_fail() {
        assert_eq!(
            build_rewrite(LinkType::Ethernet),
            Err(RewriteError::UnsupportedLinkType(LinkType::Ethernet))
        );
        assert_eq!(
            build_rewrite(LinkType::Arp),
            Err(RewriteError::UnsupportedLinkType(LinkType::Arp))
        );
    }
}
