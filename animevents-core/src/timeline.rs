//! Event timeline lines and their text rendering

use std::fmt;
use std::io::{self, Write};

/// Column header written ahead of the timeline when requested
pub const HEADER: &str = "Time(sec)\tFrame\tEvent\tDetails";

/// A single notify event on the animation timeline
#[derive(Debug, Clone, PartialEq)]
pub struct EventLine {
    /// Event time in seconds
    pub time: f64,
    /// Frame the event falls on (time × frame rate, truncated toward zero)
    pub frame: i64,
    /// Notify category (`NotifyName`)
    pub category: String,
    /// Resolved human-readable name
    pub display_name: String,
}

impl EventLine {
    /// Creates a new event line
    pub fn new(
        time: f64,
        frame: i64,
        category: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            time,
            frame,
            category: category.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for EventLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}\t{}\t{}\t{}",
            self.time, self.frame, self.category, self.display_name
        )
    }
}

/// Writes the timeline, one newline-terminated line per event
pub fn write_timeline<W: Write>(
    mut writer: W,
    lines: &[EventLine],
    header: bool,
) -> io::Result<()> {
    if header {
        writeln!(writer, "{HEADER}")?;
    }
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
