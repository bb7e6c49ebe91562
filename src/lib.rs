pub mod traits;
pub mod record;
pub mod ring;
pub mod table;
pub mod reader;
pub mod writer;
pub mod virtual_trace;
pub mod theme;

// Export traits
pub use traits::{EventTrace, TraceReader};

// Export event model
pub use record::{
    DeviceDirectory, DeviceId, DeviceInfo,
    EventId, EventKind, EventRecord,
};

// Export capture buffer
pub use ring::EventRing;

// Export table model
pub use table::{Activation, EventTableModel, RowId, ROOT_ROW};

// Export file format
pub use reader::{parse_trace, IetTraceReader, TraceFile, TraceFooter, TraceHeader};
pub use writer::TraceWriter;

// Export virtual trace generation
pub use virtual_trace::VirtualTraceReader;

// Export theme support
pub use theme::{hex_to_color32, Theme, ThemeColors, ThemeManager};
