use std::cell::Cell;

use ppplink_core::{
    LinkType, PppHeader, ProtocolRecord, ProtocolRegistry, ProtocolResolver, TRUNCATED_MARKER,
    build_rewrite, format_header, format_header_with_length, format_protocol, parse_protocol,
    unformat_header,
};

/// Resolver wrapper counting every lookup, to prove formatting paths
/// that must not touch the registry really do not.
struct SpyResolver<'a> {
    inner: &'a ProtocolRegistry,
    lookups: Cell<u64>,
}

impl<'a> SpyResolver<'a> {
    fn new(inner: &'a ProtocolRegistry) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }
}

impl ProtocolResolver for SpyResolver<'_> {
    fn lookup_by_id(&self, protocol_id: u16) -> Option<&ProtocolRecord> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.lookup_by_id(protocol_id)
    }

    fn lookup_by_name(&self, name: &str) -> Option<&ProtocolRecord> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.lookup_by_name(name)
    }
}

fn registry() -> ProtocolRegistry {
    ProtocolRegistry::with_default_protocols().expect("default registry")
}

#[test]
fn registered_pairs_resolve_both_ways() {
    let registry = registry();
    for record in registry.records() {
        assert_eq!(
            registry.lookup_by_id(record.protocol_id).unwrap().name,
            record.name
        );
        assert_eq!(
            registry.lookup_by_name(&record.name).unwrap().protocol_id,
            record.protocol_id
        );
    }
}

#[test]
fn name_round_trip_through_codec() {
    let registry = registry();
    for record in registry.records() {
        let name = format_protocol(&registry, record.protocol_id);
        let mut out = Vec::new();
        unformat_header(&registry, &name, &mut out).expect("round trip parse");

        let header = PppHeader::from_wire(&out).expect("decode emitted header");
        assert_eq!(header.protocol, record.protocol_id);
        assert_eq!(header.address, 0xff);
        assert_eq!(header.control, 0x03);
    }
}

#[test]
fn formatting_is_idempotent_across_budgets() {
    let registry = registry();
    let header = PppHeader::new(0x0021);
    let buf = header.to_wire();
    for budget in [0usize, 4, 8] {
        let first = format_header_with_length(&registry, &buf, budget);
        let second = format_header_with_length(&registry, &buf, budget);
        assert_eq!(first, second);
    }
}

#[test]
fn truncation_short_circuits_before_any_lookup() {
    let registry = registry();
    let spy = SpyResolver::new(&registry);

    let text = format_header_with_length(&spy, &[0xff, 0x03], 2);
    assert_eq!(text, TRUNCATED_MARKER);
    assert_eq!(spy.lookups.get(), 0);
}

#[test]
fn default_header_formats_tersely() {
    let registry = registry();
    assert_eq!(
        format_header(&registry, &PppHeader::new(0x0021)),
        "PPP ip4"
    );
}

#[test]
fn anomalous_address_is_surfaced() {
    let registry = registry();
    let header = PppHeader {
        address: 0x3f,
        ..PppHeader::new(0x0021)
    };
    assert_eq!(format_header(&registry, &header), "PPP ip4, address 0x3f");
}

#[test]
fn unknown_protocol_formats_as_hex() {
    let registry = registry();
    assert_eq!(format_header(&registry, &PppHeader::new(0xbeef)), "PPP 0xbeef");
}

#[test]
fn parse_failures_emit_no_bytes() {
    let registry = registry();
    let mut out = Vec::new();
    assert!(unformat_header(&registry, "70000", &mut out).is_err());
    assert!(unformat_header(&registry, "frobnicate", &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn rewrite_templates_share_framing_bytes() {
    let ip4 = build_rewrite(LinkType::Ip4).expect("ip4 rewrite");
    let ip6 = build_rewrite(LinkType::Ip6).expect("ip6 rewrite");
    assert_eq!(ip4.len(), 4);
    assert_eq!(ip6.len(), 4);
    assert_eq!(ip4[..2], ip6[..2]);
    assert_ne!(ip4[2..], ip6[2..]);

    assert!(build_rewrite(LinkType::Arp).is_err());
}

#[test]
fn rewrite_template_matches_parsed_header() {
    let registry = registry();
    let mut out = Vec::new();
    unformat_header(&registry, "ip4", &mut out).unwrap();
    assert_eq!(out.as_slice(), build_rewrite(LinkType::Ip4).unwrap());
}

#[test]
fn numeric_literal_and_name_agree() {
    let registry = registry();
    assert_eq!(
        parse_protocol(&registry, "ip6").unwrap(),
        parse_protocol(&registry, "0x57").unwrap()
    );
    assert_eq!(
        parse_protocol(&registry, "ip6").unwrap(),
        parse_protocol(&registry, "87").unwrap()
    );
}
