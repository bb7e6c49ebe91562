use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Type alias for event IDs (sequence numbers assigned at capture time)
pub type EventId = u32;

/// Type alias for device IDs (identifiers of the originating device)
pub type DeviceId = u32;

/// Kind of a captured input event, identified on the wire by a
/// four-character type code.
///
/// Only `State` and `Delta` events carry device state and are eligible
/// for detail inspection; the remaining kinds are bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Full device state snapshot (`STAT`)
    #[serde(rename = "STAT")]
    State,
    /// Partial/delta device state update (`DLTA`)
    #[serde(rename = "DLTA")]
    Delta,
    /// Text input event (`TEXT`)
    #[serde(rename = "TEXT")]
    Text,
    /// Device configuration change (`DCFG`)
    #[serde(rename = "DCFG")]
    Configuration,
    /// Device removal (`DREM`)
    #[serde(rename = "DREM")]
    Removal,
}

impl EventKind {
    /// Returns the four-character type code used in trace files and
    /// column display.
    pub fn code(self) -> &'static str {
        match self {
            EventKind::State => "STAT",
            EventKind::Delta => "DLTA",
            EventKind::Text => "TEXT",
            EventKind::Configuration => "DCFG",
            EventKind::Removal => "DREM",
        }
    }

    /// Whether this kind of event carries device state that a detail
    /// view can inspect.
    pub fn is_inspectable(self) -> bool {
        matches!(self, EventKind::State | EventKind::Delta)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Metadata of one captured input event.
///
/// Payload bytes are not carried here; `size_bytes` records the length
/// of the serialized payload in the capture buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique non-negative sequence number assigned at capture time
    pub id: EventId,
    /// Event kind tag
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Originating device; no referential constraint is enforced
    /// against any device directory
    pub device_id: DeviceId,
    /// Byte length of the serialized event payload
    pub size_bytes: u32,
    /// Capture timestamp in seconds, monotonic per source but not
    /// guaranteed globally sorted as stored
    pub time: f64,
}

/// Descriptor of one input device referenced by a trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_id: DeviceId,
    pub name: String,
    pub layout: String,
}

/// Lookup table from device ID to device descriptor.
///
/// Events may reference devices missing from the directory; lookups
/// simply return `None` for those.
#[derive(Clone, Debug, Default)]
pub struct DeviceDirectory {
    devices: HashMap<DeviceId, DeviceInfo>,
}

impl DeviceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a device descriptor, returning the previous entry for
    /// the same ID if one existed.
    pub fn insert(&mut self, info: DeviceInfo) -> Option<DeviceInfo> {
        self.devices.insert(info.device_id, info)
    }

    pub fn get(&self, id: DeviceId) -> Option<&DeviceInfo> {
        self.devices.get(&id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterates descriptors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceInfo> {
        self.devices.values()
    }

    /// Display label for a device: its name when known, otherwise the
    /// bare numeric ID.
    pub fn label(&self, id: DeviceId) -> String {
        match self.devices.get(&id) {
            Some(info) => info.name.clone(),
            None => id.to_string(),
        }
    }
}
