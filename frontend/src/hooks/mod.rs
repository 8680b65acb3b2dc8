pub mod use_calendar;
pub mod use_task_selection;
pub mod use_tasks;
