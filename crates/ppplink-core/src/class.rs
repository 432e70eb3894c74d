//! Link-layer capability set supplied to the interface-abstraction
//! layer.
//!
//! The three operations an interface class must provide — header
//! formatting, header parsing, rewrite building — are a trait rather
//! than a populated descriptor table, so the interface layer receives
//! them by dependency injection and tests can substitute stubs.

use crate::ppp::error::ParseError;
use crate::ppp::{format_header_with_length, layout, unformat_header};
use crate::registry::ProtocolRegistry;
use crate::rewrite::{LinkType, RewriteError, build_rewrite};

/// Capability set for one link-layer encapsulation scheme.
pub trait InterfaceClass {
    fn name(&self) -> &'static str;

    /// Whether links of this class are point-to-point.
    fn is_point_to_point(&self) -> bool;

    /// Diagnostic rendering of the header at the start of `buf`.
    /// `max_header_bytes` is the declared buffer budget, zero for
    /// unbounded.
    fn format_header(&self, buf: &[u8], max_header_bytes: usize) -> String;

    /// Parses a textual protocol specification and appends the
    /// complete header bytes to `out`; appends nothing on failure.
    fn unformat_header(&self, input: &str, out: &mut Vec<u8>) -> Result<(), ParseError>;

    /// Static per-link-type header template for transmission.
    fn build_rewrite(
        &self,
        link_type: LinkType,
    ) -> Result<[u8; layout::HEADER_BYTES], RewriteError>;
}

/// The PPP implementation, borrowing the registry built at startup.
pub struct PppInterfaceClass<'a> {
    registry: &'a ProtocolRegistry,
}

impl<'a> PppInterfaceClass<'a> {
    pub fn new(registry: &'a ProtocolRegistry) -> Self {
        Self { registry }
    }
}

impl InterfaceClass for PppInterfaceClass<'_> {
    fn name(&self) -> &'static str {
        "PPP"
    }

    fn is_point_to_point(&self) -> bool {
        true
    }

    fn format_header(&self, buf: &[u8], max_header_bytes: usize) -> String {
        format_header_with_length(self.registry, buf, max_header_bytes)
    }

    fn unformat_header(&self, input: &str, out: &mut Vec<u8>) -> Result<(), ParseError> {
        unformat_header(self.registry, input, out)
    }

    fn build_rewrite(
        &self,
        link_type: LinkType,
    ) -> Result<[u8; layout::HEADER_BYTES], RewriteError> {
        build_rewrite(link_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_round_trips_through_trait_object() {
        let registry = ProtocolRegistry::with_default_protocols().unwrap();
        let class: &dyn InterfaceClass = &PppInterfaceClass::new(&registry);

        assert_eq!(class.name(), "PPP");
        assert!(class.is_point_to_point());

        let mut out = Vec::new();
        class.unformat_header("ip6", &mut out).unwrap();
        assert_eq!(class.format_header(&out, 0), "PPP ip6");

        let rewrite = class.build_rewrite(LinkType::Ip6).unwrap();
        assert_eq!(rewrite.as_slice(), out.as_slice());
    }
}
