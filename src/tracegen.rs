use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use riet::{EventKind, TraceWriter};
use std::env;

// Device profiles - (name stem, layout, full state size in bytes)
const DEVICE_PROFILES: &[(&str, &str, u32)] = &[
    ("Gamepad", "gamepad", 28),
    ("Keyboard", "keyboard", 14),
    ("Mouse", "mouse", 30),
    ("Touchscreen", "touch", 56),
];

// Reporting interval of a 60 Hz device, in seconds
const FRAME_INTERVAL: f64 = 0.0167;

struct Config {
    num_devices: usize,
    num_events_min: usize,
    num_events_max: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_devices: 3,
            num_events_min: 500,
            num_events_max: 500,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

// Events to emit, buffered so they can be sorted by time first
struct PendingEvent {
    id: u32,
    kind: EventKind,
    device_id: u32,
    size_bytes: u32,
    time: f64,
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-num_devices" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_devices requires an argument");
                }
                config.num_devices = args[i].parse()?;
            }
            "-num_events" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_events requires at least one argument");
                }
                config.num_events_min = args[i].parse()?;
                // Check if there's a second number (range)
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    if let Ok(max) = args[i + 1].parse::<usize>() {
                        i += 1;
                        config.num_events_max = max;
                    } else {
                        config.num_events_max = config.num_events_min;
                    }
                } else {
                    config.num_events_max = config.num_events_min;
                }
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Input Event Trace Generator");
    println!("Usage: iet-tracegen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -num_devices <N>       Number of devices (default: 3)");
    println!("  -num_events <N> [M]    Events per device (default: 500)");
    println!("                         If two numbers provided, generates random count in range [N, M]");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: trace.iet)");
    println!("  -brotli                Write compressed trace using Brotli (output: *.iet.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone()
        .unwrap_or_else(|| {
            if config.use_brotli {
                "trace.iet.br".to_string()
            } else {
                "trace.iet".to_string()
            }
        });
    let mut writer = TraceWriter::new(&output_path)?;

    generate_trace(&mut writer, &config)?;

    println!("Trace written to: {}", output_path);

    Ok(())
}

fn generate_trace(writer: &mut TraceWriter, config: &Config) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    writer.write_header(
        "1.0",
        serde_json::json!({
            "tool": "iet-tracegen v0.1",
            "platform": "synthetic",
            "num_devices": config.num_devices,
            "seed": config.seed,
        }),
    )?;

    // Declare devices
    let mut profiles = Vec::with_capacity(config.num_devices);
    for i in 0..config.num_devices {
        let (stem, layout, state_size) = DEVICE_PROFILES[i % DEVICE_PROFILES.len()];
        let device_id = (i + 1) as u32;
        writer.write_device(device_id, &format!("{}{}", stem, i + 1), layout)?;
        profiles.push((device_id, layout, state_size));
    }

    // Buffer all events so the file can be emitted in time order,
    // the way a capture pipeline would have produced it.
    let mut events: Vec<PendingEvent> = Vec::new();
    let mut next_id = 1u32;

    for &(device_id, layout, state_size) in &profiles {
        let num_events = if config.num_events_min == config.num_events_max {
            config.num_events_min
        } else {
            rng.gen_range(config.num_events_min..=config.num_events_max)
        };

        let mut time = rng.gen_range(0.0..FRAME_INTERVAL);
        for _ in 0..num_events {
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

            events.push(PendingEvent {
                id: next_id,
                kind,
                device_id,
                size_bytes,
                time,
            });
            next_id += 1;
            time += FRAME_INTERVAL + rng.gen_range(-0.002..0.002);
        }
    }

    events.sort_by(|a, b| a.time.total_cmp(&b.time));

    let capture_end_time = events.last().map(|e| e.time);

    for event in &events {
        writer.write_event(event.id, event.kind, event.device_id, event.size_bytes, event.time)?;
    }

    writer.write_footer(capture_end_time)?;

    Ok(())
}
