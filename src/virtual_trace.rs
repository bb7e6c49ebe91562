use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::reader::{TraceFile, TraceFooter, TraceHeader};
use crate::record::{DeviceDirectory, DeviceInfo, EventKind, EventRecord};
use crate::traits::TraceReader;

const DEFAULT_NUM_DEVICES: usize = 3;
const DEFAULT_EVENTS_PER_DEVICE: usize = 200;

// (name stem, layout, full state size in bytes)
const DEVICE_PROFILES: &[(&str, &str, u32)] = &[
    ("Gamepad", "gamepad", 28),
    ("Keyboard", "keyboard", 14),
    ("Mouse", "mouse", 30),
    ("Touchscreen", "touch", 56),
];

/// Generates a deterministic synthetic input event trace in memory.
///
/// Useful for demos and tests when no captured trace is at hand. The
/// same seed always produces the same trace.
pub struct VirtualTraceReader {
    num_devices: usize,
    events_per_device: usize,
    seed: u64,
}

impl VirtualTraceReader {
    pub fn new() -> Self {
        Self {
            num_devices: DEFAULT_NUM_DEVICES,
            events_per_device: DEFAULT_EVENTS_PER_DEVICE,
            seed: 42, // Default seed for reproducibility
        }
    }

    pub fn with_config(num_devices: usize, events_per_device: usize, seed: u64) -> Self {
        Self {
            num_devices,
            events_per_device,
            seed,
        }
    }
}

impl Default for VirtualTraceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceReader for VirtualTraceReader {
    fn read(&self, _file_path: &str) -> anyhow::Result<TraceFile> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut devices = DeviceDirectory::new();
        let mut profiles = Vec::with_capacity(self.num_devices);
        for i in 0..self.num_devices {
            let (stem, layout, state_size) = DEVICE_PROFILES[i % DEVICE_PROFILES.len()];
            let device_id = (i + 1) as u32;
            devices.insert(DeviceInfo {
                device_id,
                name: format!("{}{}", stem, i + 1),
                layout: layout.to_string(),
            });
            profiles.push((device_id, layout, state_size));
        }

        // Each device reports roughly once per frame with a little
        // jitter, so events from different devices interleave in time.
        let mut events = Vec::with_capacity(self.num_devices * self.events_per_device);
        let mut next_id = 1u32;
        let mut end_time = 0.0f64;

        for &(device_id, layout, state_size) in &profiles {
            let mut time = rng.gen_range(0.0..0.008);
            for _ in 0..self.events_per_device {
                let kind = match rng.gen_range(0..100) {
                    0..=69 => EventKind::State,
                    70..=89 => EventKind::Delta,
                    90..=95 if layout == "keyboard" => EventKind::Text,
                    90..=95 => EventKind::Delta,
                    _ => EventKind::Configuration,
                };
                let size_bytes = match kind {
                    EventKind::State => state_size,
                    EventKind::Delta => rng.gen_range(4..=state_size.max(5)),
                    EventKind::Text => 6,
                    EventKind::Configuration => 8,
                    EventKind::Removal => 4,
                };

                events.push(EventRecord {
                    id: next_id,
                    kind,
                    device_id,
                    size_bytes,
                    time,
                });
                next_id += 1;
                end_time = end_time.max(time);
                time += 0.0167 + rng.gen_range(-0.002..0.002);
            }
        }

        let total_events = events.len();
        let total_devices = profiles.len();
        let time_extent = if events.is_empty() {
            (0.0, 0.0)
        } else {
            let min = events.iter().map(|e| e.time).fold(f64::INFINITY, f64::min);
            (min, end_time)
        };

        Ok(TraceFile {
            header: TraceHeader {
                version: "virtual-1.0".to_string(),
                metadata: serde_json::json!({
                    "generator": "VirtualTraceReader",
                    "seed": self.seed,
                }),
            },
            footer: Some(TraceFooter {
                capture_end_time: Some(end_time),
                total_events: Some(total_events),
                total_devices: Some(total_devices),
            }),
            devices: Arc::new(devices),
            events,
            time_extent,
        })
    }
}
