use anyhow::Result;
use riet::{
    parse_trace, Activation, EventKind, EventTableModel, EventTrace, IetTraceReader,
    TraceFile, TraceReader, TraceWriter, VirtualTraceReader,
};
use std::env;
use std::fs;
use std::sync::Arc;

#[test]
fn test_write_and_read_basic_trace() -> Result<()> {
    let test_file = env::temp_dir().join("test_trace.iet");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    // Write a trace
    {
        let mut writer = TraceWriter::new(test_file)?;

        writer.write_header(
            "1.0",
            serde_json::json!({
                "platform": "TestRig",
                "tool": "integration-test"
            }),
        )?;

        writer.write_device(1, "Gamepad1", "gamepad")?;
        writer.write_device(2, "Keyboard1", "keyboard")?;

        writer.write_event(1, EventKind::State, 1, 28, 0.0167)?;
        writer.write_event(2, EventKind::Delta, 1, 8, 0.0334)?;
        writer.write_event(3, EventKind::Text, 2, 6, 0.0250)?;

        writer.write_footer(Some(0.0334))?;
    }

    // Read the trace back using the trait API
    let reader = IetTraceReader::new();
    let trace = reader.read(test_file)?;

    // Verify header
    assert_eq!(trace.header.version, "1.0");
    assert_eq!(trace.header.metadata["platform"], "TestRig");

    // Verify devices
    assert_eq!(trace.devices.len(), 2);
    let gamepad = trace.devices.get(1).unwrap();
    assert_eq!(gamepad.name, "Gamepad1");
    assert_eq!(gamepad.layout, "gamepad");
    assert_eq!(trace.devices.label(2), "Keyboard1");

    // Verify events in stored order
    assert_eq!(trace.events.len(), 3);
    assert_eq!(trace.events[0].id, 1);
    assert_eq!(trace.events[0].kind, EventKind::State);
    assert_eq!(trace.events[0].device_id, 1);
    assert_eq!(trace.events[0].size_bytes, 28);
    assert_eq!(trace.events[1].kind, EventKind::Delta);
    assert_eq!(trace.events[2].kind, EventKind::Text);

    // Verify time extent and footer
    assert_eq!(trace.time_extent, (0.0167, 0.0334));
    let footer = trace.footer.as_ref().unwrap();
    assert_eq!(footer.capture_end_time, Some(0.0334));
    assert_eq!(footer.total_events, Some(3));
    assert_eq!(footer.total_devices, Some(2));

    // Clean up
    fs::remove_file(test_file)?;

    Ok(())
}

#[test]
fn test_table_over_file_trace() -> Result<()> {
    let test_file = env::temp_dir().join("test_table_trace.iet");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    // The concrete scenario: State at 0.5, Delta at 1.2, Text at 0.8,
    // written out of time order.
    {
        let mut writer = TraceWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({}))?;
        writer.write_device(1, "Gamepad1", "gamepad")?;
        writer.write_event(1, EventKind::State, 1, 28, 0.5)?;
        writer.write_event(2, EventKind::Delta, 1, 8, 1.2)?;
        writer.write_event(3, EventKind::Text, 1, 6, 0.8)?;
        writer.write_footer(Some(1.2))?;
    }

    let trace = parse_trace(test_file)?;
    let devices = Arc::clone(&trace.devices);
    let table = EventTableModel::new(trace, devices);

    // Rows sorted by time descending: 1.2, 0.8, 0.5 → ids 2, 3, 1.
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.record_at(1).unwrap().id, 2);
    assert_eq!(table.record_at(2).unwrap().id, 3);
    assert_eq!(table.record_at(3).unwrap().id, 1);

    // Activating the first row yields an Inspect request carrying the
    // delta event; the Text row is ignored.
    match table.on_row_activated(1) {
        Activation::Inspect { record, context } => {
            assert_eq!(record.id, 2);
            assert!(context.get(1).is_some());
        }
        Activation::Ignored => panic!("delta row must be inspectable"),
    }
    assert!(matches!(table.on_row_activated(2), Activation::Ignored));

    // Out-of-range lookups are the sole error condition.
    assert!(table.record_at(0).is_none());
    assert!(table.record_at(4).is_none());

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_empty_trace_round_trip() -> Result<()> {
    let test_file = env::temp_dir().join("test_empty_trace.iet");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = TraceWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({}))?;
        writer.write_footer(None)?;
    }

    let trace = parse_trace(test_file)?;
    assert!(trace.events.is_empty());
    assert_eq!(trace.time_extent, (0.0, 0.0));

    // An empty trace still yields a valid, placeholder-only table.
    let devices = Arc::clone(&trace.devices);
    let table = EventTableModel::new(trace, devices);
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.visible_row_count(), 1);
    assert!(table.record_at(1).is_none());

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_unknown_device_events_are_accepted() -> Result<()> {
    let test_file = env::temp_dir().join("test_unknown_device.iet");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = TraceWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({}))?;
        // No device lines at all; events still reference device 7.
        writer.write_event(1, EventKind::State, 7, 16, 0.1)?;
        writer.write_footer(Some(0.1))?;
    }

    let trace = parse_trace(test_file)?;
    assert_eq!(trace.events.len(), 1);
    assert!(trace.devices.get(7).is_none());
    assert_eq!(trace.devices.label(7), "7");

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_duplicate_device_is_rejected() -> Result<()> {
    let test_file = env::temp_dir().join("test_duplicate_device.iet");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = TraceWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({}))?;
        writer.write_device(1, "Gamepad1", "gamepad")?;
        writer.write_device(1, "Gamepad2", "gamepad")?;
        writer.write_footer(None)?;
    }

    let result = parse_trace(test_file);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Duplicate device"));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_header_must_be_first_line() -> Result<()> {
    let test_file = env::temp_dir().join("test_late_header.iet");
    let test_file = test_file.to_str().unwrap();

    fs::write(
        test_file,
        concat!(
            "{\"type\":\"device\",\"device_id\":1,\"name\":\"Gamepad1\",\"layout\":\"gamepad\"}\n",
            "{\"type\":\"header\",\"version\":\"1.0\",\"metadata\":{}}\n",
        ),
    )?;

    let result = parse_trace(test_file);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Header must be first line"));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_virtual_reader() -> Result<()> {
    let reader = VirtualTraceReader::new();
    let trace = reader.read("")?; // Path is ignored for virtual reader

    // Verify metadata
    assert_eq!(trace.header.version, "virtual-1.0");
    assert_eq!(trace.header.metadata["generator"], "VirtualTraceReader");

    // Verify devices and events exist
    assert!(trace.devices.len() > 0);
    assert!(!trace.events.is_empty());

    // Every event has a positive size and a declared or undeclared
    // device id; the directory lookup must not panic either way.
    for event in &trace.events {
        assert!(event.size_bytes > 0);
        let _ = trace.devices.label(event.device_id);
    }

    // Footer counts match the generated contents.
    let footer = trace.footer.as_ref().unwrap();
    assert_eq!(footer.total_events, Some(trace.events.len()));
    assert_eq!(footer.total_devices, Some(trace.devices.len()));

    Ok(())
}

#[test]
fn test_reader_polymorphism() -> Result<()> {
    // Create test file for the file reader
    let test_file = env::temp_dir().join("test_polymorphism.iet");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = TraceWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({"test": "polymorphism"}))?;
        writer.write_device(1, "Mouse1", "mouse")?;
        writer.write_event(1, EventKind::State, 1, 30, 0.1)?;
        writer.write_footer(Some(0.1))?;
    }

    // Both readers produce valid traces through the same interface.
    let readers: Vec<(Box<dyn TraceReader>, &str)> = vec![
        (Box::new(IetTraceReader::new()), test_file),
        (Box::new(VirtualTraceReader::new()), ""),
    ];

    for (reader, path) in readers {
        let trace: TraceFile = reader.read(path)?;
        assert!(!trace.header.version.is_empty());
        assert!(trace.len() > 0);
        assert_eq!(trace.snapshot().len(), trace.events.len());
    }

    // Clean up
    fs::remove_file(test_file)?;

    Ok(())
}

#[test]
fn test_brotli_write_and_read() -> Result<()> {
    let compressed_file = env::temp_dir().join("test_brotli_trace.iet.br");
    let compressed_file = compressed_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(compressed_file);

    // Write compressed trace
    {
        let mut writer = TraceWriter::new(compressed_file)?;

        writer.write_header(
            "1.0",
            serde_json::json!({
                "test": "brotli_compression",
                "expected": "transparent_decompression"
            }),
        )?;

        writer.write_device(1, "Touchscreen1", "touch")?;

        for i in 0..50u32 {
            writer.write_event(i + 1, EventKind::State, 1, 56, 0.0167 * f64::from(i))?;
        }

        writer.write_footer(Some(0.0167 * 49.0))?;
    }

    // Read compressed trace back (automatic decompression)
    let trace = parse_trace(compressed_file)?;

    assert_eq!(trace.header.version, "1.0");
    assert_eq!(trace.header.metadata["test"], "brotli_compression");
    assert_eq!(trace.events.len(), 50);
    assert_eq!(trace.devices.len(), 1);

    let footer = trace.footer.as_ref().unwrap();
    assert_eq!(footer.total_events, Some(50));

    // Clean up
    fs::remove_file(compressed_file)?;

    Ok(())
}

#[test]
fn test_brotli_detection_by_extension() -> Result<()> {
    // Test that .iet.br triggers compression
    let br_file = env::temp_dir().join("test_extension.iet.br");
    let br_file = br_file.to_str().unwrap();
    let _ = fs::remove_file(br_file);

    {
        let mut writer = TraceWriter::new(br_file)?;
        writer.write_header("1.0", serde_json::json!({}))?;
        writer.write_footer(None)?;
    }

    // Verify file is actually compressed (not just renamed)
    let content = fs::read(br_file)?;
    assert!(!content.starts_with(b"{\"type\":\"header\""));

    // Verify we can read it back
    let trace = parse_trace(br_file)?;
    assert_eq!(trace.header.version, "1.0");

    fs::remove_file(br_file)?;
    Ok(())
}
