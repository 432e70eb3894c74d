//! PPP link-layer framing core.
//!
//! This crate implements demultiplexing and framing support for a
//! point-to-point encapsulation scheme: a protocol registry mapping
//! 16-bit DLL protocol numbers to named records and downstream
//! dispatch targets, a header codec that renders the fixed 4-byte
//! header to diagnostic text and parses textual protocol
//! specifications into wire bytes, and a rewrite builder producing the
//! static header template prepended to outgoing packets. The per-packet
//! pipeline, interface lifecycle, and link negotiation (LCP/NCP) are
//! external collaborators.
//!
//! Invariants:
//! - Protocol ids and names are each unique; the registry is
//!   append-only and read-only after startup.
//! - The protocol field is network byte order on the wire and host
//!   order everywhere else; each boundary documents which it carries.
//! - Codec and rewrite builder are pure; no I/O, no shared mutable
//!   state beyond registry reads.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de trame PPP : registre de protocoles
//! (index par id et par nom), codec d'en-tête (texte de diagnostic et
//! analyse de spécifications), et constructeur de gabarits d'émission.
//! Le registre est construit au démarrage puis en lecture seule.
//!
//! # Examples
//! ```
//! use ppplink_core::{LinkType, ProtocolRegistry, build_rewrite, format_header_with_length};
//!
//! let registry = ProtocolRegistry::with_default_protocols()?;
//! let rewrite = build_rewrite(LinkType::Ip4)?;
//! assert_eq!(format_header_with_length(&registry, &rewrite, 0), "PPP ip4");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod class;
pub mod ppp;
mod registry;
mod rewrite;

pub use class::{InterfaceClass, PppInterfaceClass};
pub use ppp::{
    HeaderError, ParseError, PppHeader, TRUNCATED_MARKER, format_header,
    format_header_with_length, format_protocol, parse_protocol, parse_protocol_net,
    unformat_header,
};
pub use registry::{
    DispatchTarget, PayloadFormatter, ProtocolRecord, ProtocolRegistry, ProtocolResolver,
    ProtocolSummary, RegistryError,
};
pub use rewrite::{LinkType, RewriteError, build_rewrite};
