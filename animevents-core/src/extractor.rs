//! Notify event extraction from a parsed asset document

use crate::record::{array_field, f64_field, object_field, record_type, records, str_field};
use crate::sound::{resolve_display_name, UNKNOWN};
use crate::{Error, EventLine, Result};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;

/// Record types that carry an animation timeline
const ANIMATION_TYPES: [&str; 2] = ["AnimSequence", "AnimMontage"];

/// Record type of sound notifies referenced from the timeline
const SOUND_NOTIFY_TYPE: &str = "AnimNotify_WeaponSound";

/// Notify category whose display name comes from a sound notify record
const WEAPON_SOUND: &str = "WeaponSound";

/// Extracts the notify timeline of the first animation record in `document`.
///
/// Lines keep the order of the animation's `Notifies` array.
pub fn extract_events(document: &Value) -> Result<Vec<EventLine>> {
    let anim = find_animation(document).ok_or(Error::AnimationNotFound)?;

    let empty = Value::Null;
    let props = object_field(anim, "Properties").unwrap_or(&empty);
    let fps = frame_rate(props);
    let sounds = sound_index(document);
    let notifies = array_field(props, "Notifies");

    debug!(
        "{} '{}': {} notifies, {} sound notifies, {:.3} fps",
        record_type(anim),
        str_field(anim, "Name", UNKNOWN),
        notifies.len(),
        sounds.len(),
        fps
    );

    let lines: Vec<EventLine> = notifies
        .iter()
        .map(|notify| resolve_notify(notify, fps, &sounds))
        .collect();

    if lines.is_empty() {
        return Err(Error::NoEventsFound);
    }
    Ok(lines)
}

/// Returns the first record whose type is one of [`ANIMATION_TYPES`]
pub fn find_animation(document: &Value) -> Option<&Value> {
    records(document)
        .iter()
        .find(|record| ANIMATION_TYPES.contains(&record_type(record)))
}

/// Frames per second derived from `NumFrames / SequenceLength`.
///
/// A zero length yields 0.0, which puts every event on frame 0.
pub fn frame_rate(props: &Value) -> f64 {
    let num_frames = f64_field(props, "NumFrames").unwrap_or(0.0);
    let seq_length = f64_field(props, "SequenceLength").unwrap_or(1.0);

    if seq_length != 0.0 {
        num_frames / seq_length
    } else {
        0.0
    }
}

/// Builds the reference key an animation uses to point at a sound notify
pub fn sound_key(outer: &str, name: &str) -> String {
    format!("{SOUND_NOTIFY_TYPE}'{outer}:{name}'")
}

/// Indexes every sound notify record in the document by reference key.
///
/// Later records overwrite earlier ones with the same key.
pub fn sound_index(document: &Value) -> HashMap<String, &Value> {
    let mut index = HashMap::new();
    for record in records(document) {
        if record_type(record) != SOUND_NOTIFY_TYPE {
            continue;
        }
        let key = sound_key(str_field(record, "Outer", ""), str_field(record, "Name", ""));
        if index.insert(key, record).is_some() {
            debug!(
                "duplicate sound notify '{}', keeping the later record",
                str_field(record, "Name", "")
            );
        }
    }
    index
}

fn resolve_notify(notify: &Value, fps: f64, sounds: &HashMap<String, &Value>) -> EventLine {
    let category = str_field(notify, "NotifyName", UNKNOWN);
    let time = f64_field(notify, "Time")
        .or_else(|| f64_field(notify, "LinkValue"))
        .unwrap_or(0.0);
    let frame = (time * fps) as i64;

    let display_name = if category == WEAPON_SOUND {
        let reference = object_field(notify, "Notify")
            .map(|n| str_field(n, "ObjectName", ""))
            .unwrap_or("");
        let sound = sounds.get(reference).copied();
        if sound.is_none() {
            warn!("unresolved sound reference '{}' at {:.6}s", reference, time);
        }
        resolve_display_name(sound)
    } else {
        category.to_string()
    };

    EventLine::new(time, frame, category, display_name)
}
