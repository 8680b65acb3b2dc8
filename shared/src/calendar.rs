//! Calendar logic for the admin task calendar.
//!
//! Everything the calendar page needs that is not markup lives here: turning
//! tasks into display events, laying out the month/week/day grids, moving the
//! focus date around, building toolbar labels and tracking which task the
//! detail modal shows. The UI only renders what these functions return.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::Task;

/// Weeks start on Sunday unless a caller asks otherwise
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Number of cells in a month grid (six full weeks)
pub const MONTH_GRID_CELLS: i64 = 42;

/// Display projection of a task onto the calendar grid.
///
/// Rebuilt from the task list on every render. A date the source sent in a
/// shape we cannot read is kept as `None` and shown as "Invalid Date".
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub task: Task,
}

impl CalendarEvent {
    /// First and last day (inclusive) this event occupies on the grid.
    ///
    /// For all-day events an end at midnight is exclusive, so a task running
    /// from 2024-01-01 to 2024-01-02 only fills January 1st. Events always
    /// cover at least their start day.
    pub fn day_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.start?;
        let end = self.end?;

        let first = start.date();
        let mut last = end.date();
        if self.all_day && last > first && Some(end.time()) == NaiveTime::from_hms_opt(0, 0, 0) {
            last = last.pred_opt().unwrap_or(last);
        }

        Some((first, last.max(first)))
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        match self.day_span() {
            Some((first, last)) => first <= day && day <= last,
            None => false,
        }
    }
}

/// Map every task to exactly one all-day event, keeping input order.
pub fn derive_events(tasks: &[Task]) -> Vec<CalendarEvent> {
    tasks
        .iter()
        .map(|task| CalendarEvent {
            title: task.task_name.clone(),
            start: parse_task_date(&task.start_date),
            end: parse_task_date(&task.due_date),
            all_day: true,
            task: task.clone(),
        })
        .collect()
}

/// Parse a date as sent by the task source.
///
/// Accepts plain ISO dates (taken as midnight), naive ISO date-times and
/// RFC 3339 timestamps. All results are on one UTC clock: a timestamp with
/// an offset is shifted to UTC, and a date or date-time without one is
/// read as already being UTC. Grid placement uses the UTC calendar day.
pub fn parse_task_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Events that occupy the given day, in input order
pub fn events_on(day: NaiveDate, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.covers(day)).collect()
}

/// Views offered by the calendar toolbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn all() -> [Self; 3] {
        [Self::Month, Self::Week, Self::Day]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateAction {
    Prev,
    Next,
    Today(NaiveDate),
}

/// One day cell of a calendar grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for padding days from the neighbouring months
    pub in_month: bool,
    pub is_today: bool,
}

fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (day.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    day - Duration::days(i64::from(offset))
}

/// First and last day (inclusive) shown by a view around the focus date
pub fn visible_range(view: CalendarView, focus: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    match view {
        CalendarView::Month => {
            let first_of_month = focus.with_day(1).unwrap_or(focus);
            let start = start_of_week(first_of_month, week_start);
            (start, start + Duration::days(MONTH_GRID_CELLS - 1))
        }
        CalendarView::Week => {
            let start = start_of_week(focus, week_start);
            (start, start + Duration::days(6))
        }
        CalendarView::Day => (focus, focus),
    }
}

/// Cells for every day a view shows, in display order
pub fn view_cells(view: CalendarView, focus: NaiveDate, today: NaiveDate, week_start: Weekday) -> Vec<CalendarCell> {
    let (start, end) = visible_range(view, focus, week_start);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarCell {
            date,
            in_month: date.year() == focus.year() && date.month() == focus.month(),
            is_today: date == today,
        })
        .collect()
}

/// The 6x7 month grid around the focus date
pub fn month_grid(focus: NaiveDate, today: NaiveDate, week_start: Weekday) -> Vec<CalendarCell> {
    view_cells(CalendarView::Month, focus, today, week_start)
}

/// Move the focus date by one unit of the current view
pub fn navigate(view: CalendarView, focus: NaiveDate, action: NavigateAction) -> NaiveDate {
    match (action, view) {
        (NavigateAction::Today(today), _) => today,
        (NavigateAction::Prev, CalendarView::Month) => focus.checked_sub_months(Months::new(1)).unwrap_or(focus),
        (NavigateAction::Next, CalendarView::Month) => focus.checked_add_months(Months::new(1)).unwrap_or(focus),
        (NavigateAction::Prev, CalendarView::Week) => focus - Duration::days(7),
        (NavigateAction::Next, CalendarView::Week) => focus + Duration::days(7),
        (NavigateAction::Prev, CalendarView::Day) => focus.pred_opt().unwrap_or(focus),
        (NavigateAction::Next, CalendarView::Day) => focus.succ_opt().unwrap_or(focus),
    }
}

/// Toolbar title for the range a view shows
pub fn range_label(view: CalendarView, focus: NaiveDate, week_start: Weekday) -> String {
    match view {
        CalendarView::Month => focus.format("%B %Y").to_string(),
        CalendarView::Week => {
            let (start, end) = visible_range(view, focus, week_start);
            if start.month() == end.month() {
                format!("{} – {}", start.format("%B %d"), end.format("%d"))
            } else {
                format!("{} – {}", start.format("%B %d"), end.format("%B %d"))
            }
        }
        CalendarView::Day => format!("{}, {}", focus.format("%A"), long_date(focus)),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Long form used by the detail modal, e.g. "January 1st, 2024"
pub fn format_long_date(instant: Option<NaiveDateTime>) -> String {
    match instant {
        Some(dt) => long_date(dt.date()),
        None => "Invalid Date".to_string(),
    }
}

/// Which task the detail modal is showing, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSelection {
    selected: Option<Task>,
}

impl TaskSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the task behind the clicked event, replacing any current one
    pub fn select(&mut self, event: &CalendarEvent) {
        self.selected = Some(event.task.clone());
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_task(name: &str, start: &str, due: &str) -> Task {
        Task {
            id: None,
            task_name: name.to_string(),
            start_date: start.to_string(),
            due_date: due.to_string(),
            assignee: vec![],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_derive_single_task() {
        let tasks = vec![create_test_task("A", "2024-01-01", "2024-01-02")];

        let events = derive_events(&tasks);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "A");
        assert_eq!(events[0].start, Some(midnight(2024, 1, 1)));
        assert_eq!(events[0].end, Some(midnight(2024, 1, 2)));
        assert!(events[0].all_day);
        assert_eq!(events[0].task, tasks[0]);
    }

    #[test]
    fn test_derive_keeps_one_event_per_task() {
        let tasks = vec![
            create_test_task("Launch", "2024-03-01", "2024-03-05"),
            create_test_task("Launch", "2024-03-01", "2024-03-05"),
            create_test_task("Review", "2024-03-02", "2024-03-02"),
        ];

        let events = derive_events(&tasks);

        assert_eq!(events.len(), 3);
        for (event, task) in events.iter().zip(&tasks) {
            assert_eq!(event.title, task.task_name);
            assert_eq!(event.task.start_date, task.start_date);
            assert_eq!(event.task.due_date, task.due_date);
        }
    }

    #[test]
    fn test_derive_empty() {
        assert!(derive_events(&[]).is_empty());
    }

    #[test]
    fn test_derive_invalid_dates_become_none() {
        let tasks = vec![create_test_task("Broken", "not a date", "2024-01-02")];

        let events = derive_events(&tasks);

        assert_eq!(events.len(), 1);
        assert!(events[0].start.is_none());
        assert_eq!(events[0].end, Some(midnight(2024, 1, 2)));
        assert_eq!(format_long_date(events[0].start), "Invalid Date");
        assert!(events[0].day_span().is_none());
    }

    #[test]
    fn test_parse_task_date_formats() {
        assert_eq!(parse_task_date("2024-01-01"), Some(midnight(2024, 1, 1)));
        assert_eq!(
            parse_task_date("2024-01-01T10:30:00"),
            date(2024, 1, 1).and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_task_date("2024-01-01T10:30"),
            date(2024, 1, 1).and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_task_date("2024-01-01T23:00:00-04:00"),
            date(2024, 1, 2).and_hms_opt(3, 0, 0)
        );
        assert_eq!(
            parse_task_date("2024-06-13T09:00:00.000Z"),
            date(2024, 6, 13).and_hms_opt(9, 0, 0)
        );
        assert_eq!(parse_task_date(""), None);
        assert_eq!(parse_task_date("2024-13-01"), None);
    }

    #[test]
    fn test_offset_and_naive_dates_share_the_utc_clock() {
        // Same instant written two ways lands on the same grid day
        let with_offset = parse_task_date("2024-03-09T22:00:00-05:00");
        let naive = parse_task_date("2024-03-10T03:00:00");
        assert_eq!(with_offset, naive);

        let events = derive_events(&[create_test_task("A", "2024-03-09T22:00:00-05:00", "2024-03-10T04:00:00")]);
        assert!(!events[0].covers(date(2024, 3, 9)));
        assert!(events[0].covers(date(2024, 3, 10)));
    }

    #[test]
    fn test_all_day_end_at_midnight_is_exclusive() {
        let events = derive_events(&[create_test_task("A", "2024-01-01", "2024-01-02")]);

        assert!(events[0].covers(date(2024, 1, 1)));
        assert!(!events[0].covers(date(2024, 1, 2)));
    }

    #[test]
    fn test_same_day_event_covers_its_day() {
        let events = derive_events(&[create_test_task("A", "2024-01-05", "2024-01-05")]);

        assert_eq!(events[0].day_span(), Some((date(2024, 1, 5), date(2024, 1, 5))));
    }

    #[test]
    fn test_end_with_time_includes_end_day() {
        let events = derive_events(&[create_test_task("A", "2024-01-01", "2024-01-03T12:00:00")]);

        assert_eq!(events[0].day_span(), Some((date(2024, 1, 1), date(2024, 1, 3))));
    }

    #[test]
    fn test_end_before_start_is_not_validated() {
        let events = derive_events(&[create_test_task("A", "2024-01-05", "2024-01-01")]);

        assert_eq!(events[0].day_span(), Some((date(2024, 1, 5), date(2024, 1, 5))));
    }

    #[test]
    fn test_events_on() {
        let events = derive_events(&[
            create_test_task("Week long", "2024-01-01", "2024-01-08"),
            create_test_task("Single", "2024-01-03", "2024-01-03"),
            create_test_task("Broken", "soon", "later"),
        ]);

        let on_third: Vec<&str> = events_on(date(2024, 1, 3), &events)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(on_third, vec!["Week long", "Single"]);
        assert_eq!(events_on(date(2024, 1, 8), &events).len(), 0);
        assert_eq!(events_on(date(2024, 1, 7), &events).len(), 1);
    }

    #[test]
    fn test_month_grid() {
        let grid = month_grid(date(2024, 1, 15), date(2024, 1, 10), DEFAULT_WEEK_START);

        assert_eq!(grid.len(), 42);
        // January 1st 2024 is a Monday, so the grid opens on Sunday Dec 31st
        assert_eq!(grid[0].date, date(2023, 12, 31));
        assert!(!grid[0].in_month);
        assert_eq!(grid[1].date, date(2024, 1, 1));
        assert!(grid[1].in_month);
        assert_eq!(grid[41].date, date(2024, 2, 10));
        assert_eq!(grid.iter().filter(|c| c.in_month).count(), 31);
        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
        assert!(grid.iter().all(|c| (c.date == date(2024, 1, 10)) == c.is_today));
    }

    #[test]
    fn test_month_grid_monday_start() {
        let grid = month_grid(date(2024, 1, 15), date(2024, 1, 10), Weekday::Mon);

        assert_eq!(grid[0].date, date(2024, 1, 1));
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(
            visible_range(CalendarView::Week, date(2024, 1, 3), DEFAULT_WEEK_START),
            (date(2023, 12, 31), date(2024, 1, 6))
        );
        assert_eq!(
            visible_range(CalendarView::Week, date(2023, 12, 31), DEFAULT_WEEK_START),
            (date(2023, 12, 31), date(2024, 1, 6))
        );
        assert_eq!(
            visible_range(CalendarView::Day, date(2024, 1, 3), DEFAULT_WEEK_START),
            (date(2024, 1, 3), date(2024, 1, 3))
        );
        assert_eq!(view_cells(CalendarView::Week, date(2024, 1, 3), date(2024, 1, 3), DEFAULT_WEEK_START).len(), 7);
    }

    #[test]
    fn test_navigation() {
        let focus = date(2024, 1, 31);

        assert_eq!(navigate(CalendarView::Month, focus, NavigateAction::Next), date(2024, 2, 29));
        assert_eq!(navigate(CalendarView::Month, date(2024, 3, 31), NavigateAction::Prev), date(2024, 2, 29));
        assert_eq!(navigate(CalendarView::Month, date(2024, 12, 15), NavigateAction::Next), date(2025, 1, 15));
        assert_eq!(navigate(CalendarView::Week, focus, NavigateAction::Next), date(2024, 2, 7));
        assert_eq!(navigate(CalendarView::Week, focus, NavigateAction::Prev), date(2024, 1, 24));
        assert_eq!(navigate(CalendarView::Day, focus, NavigateAction::Next), date(2024, 2, 1));
        assert_eq!(navigate(CalendarView::Day, focus, NavigateAction::Prev), date(2024, 1, 30));
        assert_eq!(
            navigate(CalendarView::Week, focus, NavigateAction::Today(date(2025, 6, 1))),
            date(2025, 6, 1)
        );
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(range_label(CalendarView::Month, date(2024, 1, 15), DEFAULT_WEEK_START), "January 2024");
        assert_eq!(range_label(CalendarView::Week, date(2024, 1, 3), DEFAULT_WEEK_START), "December 31 – January 06");
        assert_eq!(range_label(CalendarView::Week, date(2024, 1, 10), DEFAULT_WEEK_START), "January 07 – 13");
        assert_eq!(
            range_label(CalendarView::Day, date(2024, 1, 1), DEFAULT_WEEK_START),
            "Monday, January 1st, 2024"
        );
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(Some(midnight(2024, 1, 1))), "January 1st, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 3, 2))), "March 2nd, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 5, 3))), "May 3rd, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 11))), "July 11th, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 12))), "July 12th, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 13))), "July 13th, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 21))), "July 21st, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 22))), "July 22nd, 2024");
        assert_eq!(format_long_date(Some(midnight(2024, 7, 23))), "July 23rd, 2024");
        assert_eq!(format_long_date(None), "Invalid Date");
    }

    #[test]
    fn test_selection_lifecycle() {
        let events = derive_events(&[
            create_test_task("A", "2024-01-01", "2024-01-02"),
            create_test_task("B", "2024-01-03", "2024-01-04"),
        ]);
        let mut selection = TaskSelection::new();
        assert!(!selection.is_open());

        selection.select(&events[0]);
        assert_eq!(selection.selected(), Some(&events[0].task));

        selection.select(&events[1]);
        assert_eq!(selection.selected().map(|t| t.task_name.as_str()), Some("B"));

        selection.dismiss();
        assert!(selection.selected().is_none());

        // Dismissing with nothing open is a no-op
        selection.dismiss();
        assert!(!selection.is_open());
    }

    #[test]
    fn test_view_keys() {
        let keys: Vec<&str> = CalendarView::all().iter().map(|v| v.as_key()).collect();
        assert_eq!(keys, vec!["month", "week", "day"]);
        assert_eq!(CalendarView::default(), CalendarView::Month);
    }
}
