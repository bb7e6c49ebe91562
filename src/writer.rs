use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::record::{DeviceId, EventId, EventKind};

/// Writes input event traces as JSON lines, one object per line.
///
/// Tracks device and event counts internally so the footer can carry
/// capture totals without the caller counting.
pub struct TraceWriter {
    writer: Box<dyn Write>,
    device_count: usize,
    event_count: usize,
}

impl TraceWriter {
    /// Creates a new TraceWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends
    /// with `.br` (e.g., `trace.iet.br` or `trace.jsonl.br`).
    ///
    /// # Compression
    ///
    /// Brotli compression uses quality level 6 (balanced speed/ratio).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use riet::TraceWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// // Uncompressed trace
    /// let mut writer = TraceWriter::new("trace.iet")?;
    ///
    /// // Compressed trace
    /// let mut writer = TraceWriter::new("trace.iet.br")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            // Brotli compression enabled
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,  // Balanced compression
                lgwin: 22,   // Window size
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            // No compression
            Box::new(BufWriter::new(file))
        };

        Ok(TraceWriter {
            writer,
            device_count: 0,
            event_count: 0,
        })
    }

    pub fn write_header(&mut self, version: &str, metadata: serde_json::Value) -> Result<()> {
        let header = serde_json::json!({
            "type": "header",
            "version": version,
            "metadata": metadata
        });

        self.write_line(&header)?;
        Ok(())
    }

    pub fn write_device(&mut self, device_id: DeviceId, name: &str, layout: &str) -> Result<()> {
        let device = serde_json::json!({
            "type": "device",
            "device_id": device_id,
            "name": name,
            "layout": layout
        });

        self.write_line(&device)?;
        self.device_count += 1;
        Ok(())
    }

    pub fn write_event(
        &mut self,
        id: EventId,
        kind: EventKind,
        device_id: DeviceId,
        size_bytes: u32,
        time: f64,
    ) -> Result<()> {
        let event = serde_json::json!({
            "type": "event",
            "id": id,
            "event_type": kind.code(),
            "device_id": device_id,
            "size_bytes": size_bytes,
            "time": time
        });

        self.write_line(&event)?;
        self.event_count += 1;
        Ok(())
    }

    pub fn write_footer(&mut self, capture_end_time: Option<f64>) -> Result<()> {
        let footer = serde_json::json!({
            "type": "footer",
            "capture_end_time": capture_end_time,
            "total_events": self.event_count,
            "total_devices": self.device_count
        });

        self.write_line(&footer)?;
        Ok(())
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .context("Failed to serialize to JSON")?;

        writeln!(self.writer, "{}", json)
            .context("Failed to write line")?;

        self.writer.flush()
            .context("Failed to flush writer")?;

        Ok(())
    }
}

impl Drop for TraceWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
