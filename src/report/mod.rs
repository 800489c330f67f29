use crate::scanner::ScanEvent;
use std::io::{self, Write};

/// Output sink for scan events. One write per event, order-preserving, so the
/// sink can be swapped (stdout, buffer, test collector) without touching the
/// scanner.
pub trait Reporter {
    fn emit(&mut self, event: &ScanEvent) -> io::Result<()>;
}

/// Plain-text reporter, one line per event:
///
/// - `STRUCT: <typeName>` for a struct header
/// - `<identifier>` for a plain uniform
/// - `STRUCT END: <instanceName>` for a struct terminator
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn emit(&mut self, event: &ScanEvent) -> io::Result<()> {
        match event {
            ScanEvent::StructStart { type_name } => writeln!(self.out, "STRUCT: {}", type_name)?,
            ScanEvent::Uniform(decl) => writeln!(self.out, "{}", decl.name)?,
            ScanEvent::StructEnd(decl) => writeln!(self.out, "STRUCT END: {}", decl.instance_name)?,
        }
        self.out.flush()
    }
}

/// JSON-lines reporter: one serialized event object per line.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn emit(&mut self, event: &ScanEvent) -> io::Result<()> {
        let json = serde_json::to_string(event).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}

/// In-memory collector for tests.
#[derive(Debug, Default)]
pub struct CollectReporter {
    pub events: Vec<ScanEvent>,
}

impl CollectReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for CollectReporter {
    fn emit(&mut self, event: &ScanEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
