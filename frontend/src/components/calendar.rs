use yew::prelude::*;
use chrono::NaiveDate;
use shared::calendar::{view_cells, DEFAULT_WEEK_START};
use shared::{derive_events, events_on, range_label, CalendarEvent, CalendarView, Task};

use super::calendar_toolbar::CalendarToolbar;
use super::day_header::DayHeader;
use super::task_event::TaskEvent;
use super::task_modal::TaskModal;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_task_selection::use_task_selection;

#[derive(Properties, PartialEq)]
pub struct TaskCalendarProps {
    pub tasks: Vec<Task>,
    pub today: NaiveDate,
}

/// Month/week/day calendar of tasks with a detail modal
#[function_component(TaskCalendar)]
pub fn task_calendar(props: &TaskCalendarProps) -> Html {
    let calendar = use_calendar(props.today);
    let selection = use_task_selection();

    // Events are a projection of the current task list, rebuilt each render
    let events = derive_events(&props.tasks);

    let state = &calendar.state;
    let cells = view_cells(state.view, state.focus, state.today, DEFAULT_WEEK_START);
    let label = range_label(state.view, state.focus, DEFAULT_WEEK_START);

    let render_events = |day: NaiveDate| -> Html {
        html! {
            <div class="day-events">
                {for events_on(day, &events).into_iter().map(|event: &CalendarEvent| html! {
                    <TaskEvent event={event.clone()} on_select={selection.on_select.clone()} />
                })}
            </div>
        }
    };

    let body = match state.view {
        CalendarView::Month => html! {
            <div class="calendar-month">
                <div class="calendar-weekdays">
                    {for cells.iter().take(7).map(|cell| html! {
                        <div class="weekday">{cell.date.format("%a").to_string()}</div>
                    })}
                </div>
                <div class="calendar-grid">
                    {for cells.iter().map(|cell| {
                        let mut class = classes!("calendar-day");
                        if !cell.in_month {
                            class.push("off-range");
                        }
                        if cell.is_today {
                            class.push("today");
                        }
                        html! {
                            <div {class} key={cell.date.to_string()}>
                                <DayHeader
                                    date={cell.date}
                                    task_count={events_on(cell.date, &events).len()}
                                    is_today={cell.is_today}
                                    compact={true}
                                    on_drill_down={calendar.actions.drill_down.clone()}
                                />
                                {render_events(cell.date)}
                            </div>
                        }
                    })}
                </div>
            </div>
        },
        CalendarView::Week | CalendarView::Day => {
            let class = if state.view == CalendarView::Week { "calendar-week" } else { "calendar-day-view" };
            html! {
                <div {class}>
                    {for cells.iter().map(|cell| html! {
                        <div class="calendar-column" key={cell.date.to_string()}>
                            <DayHeader
                                date={cell.date}
                                task_count={events_on(cell.date, &events).len()}
                                is_today={cell.is_today}
                                on_drill_down={calendar.actions.drill_down.clone()}
                            />
                            <div class="all-day-lane">
                                {render_events(cell.date)}
                            </div>
                        </div>
                    })}
                </div>
            }
        }
    };

    html! {
        <div class="task-calendar">
            <CalendarToolbar label={label} view={state.view} actions={calendar.actions.clone()} />
            <div class="calendar-scroll">
                {body}
            </div>

            {if let Some(task) = selection.selected.clone() {
                html! { <TaskModal {task} on_close={selection.on_dismiss.clone()} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
