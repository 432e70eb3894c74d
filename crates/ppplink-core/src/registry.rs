//! Protocol registry: build-once, read-many table of known PPP
//! protocols.
//!
//! Records live in an append-only backing vector; two sibling hash
//! indices (by protocol id, by name) point into it so that both codec
//! directions resolve in O(1). Keys are immutable after insertion;
//! only the dispatch binding may be updated later, during startup
//! wiring. After startup the registry is read-only and safe to share
//! across threads without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("protocol {name:?} (0x{protocol_id:04x}) already registered")]
    DuplicateRegistration { name: String, protocol_id: u16 },
    #[error("unknown protocol id 0x{protocol_id:04x}")]
    UnknownProtocol { protocol_id: u16 },
}

/// Renders a payload preview for diagnostics. Supplied by the
/// downstream dispatch target; receives the bytes after the header.
pub type PayloadFormatter = fn(&[u8]) -> String;

/// Opaque handle to the downstream entity that consumes packets of a
/// protocol after classification.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTarget {
    /// Downstream node identifier; never interpreted here.
    pub node_id: u32,
    /// Optional diagnostics formatter for this protocol's payload.
    pub payload_formatter: Option<PayloadFormatter>,
}

/// One registered upper-layer protocol.
#[derive(Debug, Clone)]
pub struct ProtocolRecord {
    /// Unique human-readable symbol (e.g., "ip4").
    pub name: String,
    /// Unique 16-bit DLL protocol number, host byte order.
    pub protocol_id: u16,
    /// Downstream consumer; unset until startup wiring binds it.
    pub dispatch_target: Option<DispatchTarget>,
    /// Dispatch slot cached for the external pipeline; opaque here.
    pub next_index: Option<u32>,
}

/// Serializable listing row for one registered protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolSummary {
    pub name: String,
    pub protocol_id: u16,
}

/// Read-side view of the registry. The codec is generic over this so
/// tests can substitute counting or stub resolvers.
pub trait ProtocolResolver {
    /// `protocol_id` is host byte order. `None` is a valid state, not
    /// an error; callers render a numeric fallback.
    fn lookup_by_id(&self, protocol_id: u16) -> Option<&ProtocolRecord>;
    fn lookup_by_name(&self, name: &str) -> Option<&ProtocolRecord>;
}

#[derive(Debug, Default)]
pub struct ProtocolRegistry {
    records: Vec<ProtocolRecord>,
    by_id: HashMap<u16, usize>,
    by_name: HashMap<String, usize>,
}

impl ProtocolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the standard PPP protocol numbers.
    pub fn with_default_protocols() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for &(protocol_id, name) in crate::ppp::layout::DEFAULT_PROTOCOLS {
            registry.register(name, protocol_id)?;
        }
        Ok(registry)
    }

    /// Inserts a new record and returns its stable index. A name or id
    /// collision is a startup defect; callers must halt initialization
    /// rather than continue with an inconsistent table.
    pub fn register(&mut self, name: &str, protocol_id: u16) -> Result<usize, RegistryError> {
        if self.by_id.contains_key(&protocol_id) || self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateRegistration {
                name: name.to_string(),
                protocol_id,
            });
        }

        let index = self.records.len();
        self.records.push(ProtocolRecord {
            name: name.to_string(),
            protocol_id,
            dispatch_target: None,
            next_index: None,
        });
        self.by_id.insert(protocol_id, index);
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    /// Binds the downstream consumer for an already-registered
    /// protocol. Startup wiring only; fails on unknown ids.
    pub fn bind_dispatch_target(
        &mut self,
        protocol_id: u16,
        target: DispatchTarget,
        next_index: u32,
    ) -> Result<(), RegistryError> {
        let index = self
            .by_id
            .get(&protocol_id)
            .copied()
            .ok_or(RegistryError::UnknownProtocol { protocol_id })?;
        let record = &mut self.records[index];
        record.dispatch_target = Some(target);
        record.next_index = Some(next_index);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ProtocolRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> impl Iterator<Item = &ProtocolRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Listing rows in registration order.
    pub fn summaries(&self) -> Vec<ProtocolSummary> {
        self.records
            .iter()
            .map(|record| ProtocolSummary {
                name: record.name.clone(),
                protocol_id: record.protocol_id,
            })
            .collect()
    }
}

impl ProtocolResolver for ProtocolRegistry {
    fn lookup_by_id(&self, protocol_id: u16) -> Option<&ProtocolRecord> {
        self.by_id.get(&protocol_id).map(|&i| &self.records[i])
    }

    fn lookup_by_name(&self, name: &str) -> Option<&ProtocolRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }
}
