use serde::{Deserialize, Deserializer, Serialize};

pub mod calendar;
pub mod color;

pub use calendar::{
    derive_events, events_on, format_long_date, month_grid, navigate, parse_task_date,
    range_label, visible_range, CalendarCell, CalendarEvent, CalendarView, NavigateAction,
    TaskSelection,
};
pub use color::{color_for, event_style, Rgb};

/// A schedulable work item as supplied by the task source.
///
/// Field names follow the camelCase JSON contract of the task feed
/// (`taskName`, `startDate`, `dueDate`, `assignee[].profilePicture`).
/// Dates stay as the raw strings the source sent; they are only parsed
/// when events are derived for display.
///
/// The feed is not validated. A field that is missing or `null` reads as
/// empty, so one malformed record shows up as an untitled or "Invalid Date"
/// event instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Source identifier, if the feed provides one
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_name: String,
    /// Start of the task (ISO date or RFC 3339 timestamp)
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    /// Due date of the task (ISO date or RFC 3339 timestamp)
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_date: String,
    /// People assigned to the task, first one is shown on the calendar
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignee: Vec<Assignee>,
}

impl Task {
    /// Picture of the first assignee, if any
    pub fn primary_picture(&self) -> Option<&str> {
        self.assignee
            .first()
            .map(|a| a.profile_picture.as_str())
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Log line forwarded from the browser to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
