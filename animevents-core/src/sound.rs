//! Display-name resolution for sound notify records

use crate::record::{object_field, str_field};
use serde_json::Value;

/// Name used whenever nothing better is available
pub const UNKNOWN: &str = "Unknown";

/// Sound event slots checked in priority order (first person, then third person)
const EVENT_SLOTS: [&str; 2] = ["Event_FP", "Event_TP"];

/// Resolves the display name of a sound notify record.
///
/// Returns the first usable `Properties.<slot>.ObjectName` from [`EVENT_SLOTS`],
/// falling back to the record's `Name`. The literal `"None"` is the exporter's
/// empty reference and is skipped like an empty string.
pub fn resolve_display_name(record: Option<&Value>) -> String {
    let Some(record) = record.filter(|r| !r.is_null()) else {
        return UNKNOWN.to_string();
    };

    if let Some(props) = object_field(record, "Properties") {
        for slot in EVENT_SLOTS {
            if let Some(event) = object_field(props, slot) {
                let name = str_field(event, "ObjectName", "");
                if !name.is_empty() && name != "None" {
                    return name.to_string();
                }
            }
        }
    }

    str_field(record, "Name", UNKNOWN).to_string()
}
