use anyhow::{anyhow, Context, Result};
use brotli::Decompressor;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

use crate::record::{DeviceDirectory, DeviceId, DeviceInfo, EventId, EventKind, EventRecord};
use crate::traits::{EventTrace, TraceReader};

/// First line of a trace file.
#[derive(Debug, Clone)]
pub struct TraceHeader {
    pub version: String,
    pub metadata: serde_json::Value,
}

/// Optional last line of a trace file, carrying capture totals.
#[derive(Debug, Clone)]
pub struct TraceFooter {
    pub capture_end_time: Option<f64>,
    pub total_events: Option<usize>,
    pub total_devices: Option<usize>,
}

/// Parsed in-memory form of an input event trace.
#[derive(Debug, Clone)]
pub struct TraceFile {
    pub header: TraceHeader,
    pub footer: Option<TraceFooter>,
    /// Device descriptors declared by the trace. Shared so consumers
    /// can hand the directory to detail views without copying it.
    pub devices: Arc<DeviceDirectory>,
    /// Events in stored (file) order; not guaranteed time-sorted.
    pub events: Vec<EventRecord>,
    /// (min_time, max_time) across all events, (0.0, 0.0) when empty.
    pub time_extent: (f64, f64),
}

impl EventTrace for TraceFile {
    fn len(&self) -> usize {
        self.events.len()
    }

    fn snapshot(&self) -> Vec<EventRecord> {
        self.events.clone()
    }
}

/// Reads `.iet` trace files from disk.
pub struct IetTraceReader;

impl IetTraceReader {
    pub fn new() -> Self {
        IetTraceReader
    }
}

impl Default for IetTraceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceReader for IetTraceReader {
    fn read(&self, file_path: &str) -> Result<TraceFile> {
        parse_trace(file_path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TraceLine {
    #[serde(rename = "header")]
    Header {
        version: String,
        metadata: serde_json::Value,
    },
    #[serde(rename = "device")]
    Device {
        device_id: DeviceId,
        name: String,
        layout: String,
    },
    #[serde(rename = "event")]
    Event {
        id: EventId,
        event_type: EventKind,
        device_id: DeviceId,
        size_bytes: u32,
        time: f64,
    },
    #[serde(rename = "footer")]
    Footer {
        capture_end_time: Option<f64>,
        total_events: Option<usize>,
        total_devices: Option<usize>,
    },
}

/// Parses an input event trace file from disk.
///
/// Automatically detects and decompresses Brotli-compressed traces
/// based on file extension (`.br`).
///
/// # Supported Formats
///
/// - `.iet` — Uncompressed JSON Lines
/// - `.jsonl` — Uncompressed JSON Lines
/// - `.iet.br` — Brotli-compressed IET
/// - `.jsonl.br` — Brotli-compressed JSON Lines
///
/// # Examples
///
/// ```no_run
/// # use riet::parse_trace;
/// # fn main() -> anyhow::Result<()> {
/// // Parse uncompressed trace
/// let trace = parse_trace("trace.iet")?;
///
/// // Parse compressed trace (automatic decompression)
/// let trace = parse_trace("trace.iet.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_trace(file_path: &str) -> Result<TraceFile> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader: Box<dyn BufRead> = if file_path.ends_with(".br") {
        // Brotli decompression enabled
        let decompressor = Decompressor::new(file, 4096);
        Box::new(BufReader::new(decompressor))
    } else {
        // No decompression
        Box::new(BufReader::new(file))
    };

    let mut header: Option<TraceHeader> = None;
    let mut footer: Option<TraceFooter> = None;
    let mut devices = DeviceDirectory::new();
    let mut events: Vec<EventRecord> = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result
            .with_context(|| format!("Failed to read line {}", line_num + 1))?;

        if line.trim().is_empty() {
            continue;
        }

        let trace_line: TraceLine = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse JSON at line {}", line_num + 1))?;

        match trace_line {
            TraceLine::Header { version, metadata } => {
                if line_num != 0 {
                    return Err(anyhow!("Header must be first line (found at line {})", line_num + 1));
                }
                header = Some(TraceHeader { version, metadata });
            }

            TraceLine::Device { device_id, name, layout } => {
                let previous = devices.insert(DeviceInfo { device_id, name, layout });
                if previous.is_some() {
                    return Err(anyhow!("Duplicate device ID '{}' at line {}", device_id, line_num + 1));
                }
            }

            // Events may reference devices the trace never declares;
            // the directory just has no entry for them.
            TraceLine::Event { id, event_type, device_id, size_bytes, time } => {
                events.push(EventRecord {
                    id,
                    kind: event_type,
                    device_id,
                    size_bytes,
                    time,
                });
            }

            TraceLine::Footer { capture_end_time, total_events, total_devices } => {
                footer = Some(TraceFooter {
                    capture_end_time,
                    total_events,
                    total_devices,
                });
            }
        }
    }

    let header = header.ok_or_else(|| anyhow!("Missing header line"))?;
    let time_extent = calculate_time_extent(&events);

    Ok(TraceFile {
        header,
        footer,
        devices: Arc::new(devices),
        events,
        time_extent,
    })
}

/// Computes the minimum and maximum timestamps across all events.
fn calculate_time_extent(events: &[EventRecord]) -> (f64, f64) {
    if events.is_empty() {
        return (0.0, 0.0);
    }

    let mut min_time = f64::INFINITY;
    let mut max_time = f64::NEG_INFINITY;

    for event in events {
        min_time = min_time.min(event.time);
        max_time = max_time.max(event.time);
    }

    (min_time, max_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventKind;

    fn event(id: u32, time: f64) -> EventRecord {
        EventRecord {
            id,
            kind: EventKind::State,
            device_id: 1,
            size_bytes: 8,
            time,
        }
    }

    #[test]
    fn test_time_extent_of_empty_slice() {
        assert_eq!(calculate_time_extent(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_time_extent_spans_events() {
        let events = vec![event(1, 0.5), event(2, 2.5), event(3, 1.0)];
        assert_eq!(calculate_time_extent(&events), (0.5, 2.5));
    }
}
