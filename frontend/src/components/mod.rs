pub mod calendar;
pub mod calendar_toolbar;
pub mod content;
pub mod day_header;
pub mod header;
pub mod task_event;
pub mod task_modal;
