pub const ADDRESS_OFFSET: usize = 0;
pub const CONTROL_OFFSET: usize = 1;
pub const PROTOCOL_RANGE: std::ops::Range<usize> = 2..4;
pub const HEADER_BYTES: usize = 4;

/// All-stations address (the only address defined for PPP links).
pub const DEFAULT_ADDRESS: u8 = 0xff;
/// Unnumbered-information control field.
pub const DEFAULT_CONTROL: u8 = 0x03;

pub const PROTOCOL_IP4: u16 = 0x0021;
pub const PROTOCOL_OSI: u16 = 0x0023;
pub const PROTOCOL_APPLETALK: u16 = 0x0029;
pub const PROTOCOL_IPX: u16 = 0x002b;
pub const PROTOCOL_IP6: u16 = 0x0057;
pub const PROTOCOL_MPLS_UNICAST: u16 = 0x0281;
pub const PROTOCOL_MPLS_MULTICAST: u16 = 0x0283;
pub const PROTOCOL_IPCP: u16 = 0x8021;
pub const PROTOCOL_IP6CP: u16 = 0x8057;
pub const PROTOCOL_LCP: u16 = 0xc021;
pub const PROTOCOL_PAP: u16 = 0xc023;
pub const PROTOCOL_LQR: u16 = 0xc025;
pub const PROTOCOL_CHAP: u16 = 0xc223;

/// Standard PPP DLL protocol numbers registered at startup, in
/// ascending id order. Host byte order.
pub const DEFAULT_PROTOCOLS: &[(u16, &str)] = &[
    (PROTOCOL_IP4, "ip4"),
    (PROTOCOL_OSI, "osi"),
    (PROTOCOL_APPLETALK, "appletalk"),
    (PROTOCOL_IPX, "ipx"),
    (PROTOCOL_IP6, "ip6"),
    (PROTOCOL_MPLS_UNICAST, "mpls_unicast"),
    (PROTOCOL_MPLS_MULTICAST, "mpls_multicast"),
    (PROTOCOL_IPCP, "ipcp"),
    (PROTOCOL_IP6CP, "ip6cp"),
    (PROTOCOL_LCP, "lcp"),
    (PROTOCOL_PAP, "pap"),
    (PROTOCOL_LQR, "lqr"),
    (PROTOCOL_CHAP, "chap"),
];
