//! Deterministic display colors for calendar events.
//!
//! Tasks are grouped visually by name: every task with the same name gets
//! the same background color. The hash is a plain polynomial rolling hash
//! and makes no attempt to keep distinct names apart.

use std::fmt;

use crate::calendar::CalendarEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Hash a task name into a color.
///
/// Runs `hash = unit + ((hash << 5) - hash)` over the UTF-16 code units of
/// the name. Only the shift operand is truncated to 32 bits, the running
/// value is not, so it is carried as `i64`. The color is taken from the
/// three high bytes of the final 32-bit value.
pub fn color_for(name: &str) -> Rgb {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit) + (shifted - hash);
    }

    let hash = hash as i32;
    Rgb((hash >> 24) as u8, (hash >> 16) as u8, (hash >> 8) as u8)
}

/// Inline style for an event chip
pub fn event_style(event: &CalendarEvent) -> String {
    format!(
        "background-color: {}; color: white; border-radius: 8px; border: none; padding: 4px;",
        color_for(&event.task.task_name)
    )
}
