use chrono::NaiveDate;
use shared::{navigate, CalendarView, NavigateAction};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub view: CalendarView,
    pub focus: NaiveDate,
    pub today: NaiveDate,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev: Callback<MouseEvent>,
    pub next: Callback<MouseEvent>,
    pub go_today: Callback<MouseEvent>,
    pub set_view: Callback<CalendarView>,
    /// Open the day view for a date (clicking a day number)
    pub drill_down: Callback<NaiveDate>,
}

#[hook]
pub fn use_calendar(today: NaiveDate) -> UseCalendarResult {
    let view = use_state(CalendarView::default);
    let focus = use_state(|| today);

    let prev = {
        let focus = focus.clone();
        use_callback((*view, *focus), move |_: MouseEvent, (view, current)| {
            focus.set(navigate(*view, *current, NavigateAction::Prev));
        })
    };

    let next = {
        let focus = focus.clone();
        use_callback((*view, *focus), move |_: MouseEvent, (view, current)| {
            focus.set(navigate(*view, *current, NavigateAction::Next));
        })
    };

    let go_today = {
        let focus = focus.clone();
        use_callback((*view, *focus, today), move |_: MouseEvent, (view, current, today)| {
            focus.set(navigate(*view, *current, NavigateAction::Today(*today)));
        })
    };

    let set_view = {
        let view = view.clone();
        use_callback((), move |next_view: CalendarView, _| {
            view.set(next_view);
        })
    };

    let drill_down = {
        let view = view.clone();
        let focus = focus.clone();
        use_callback((), move |date: NaiveDate, _| {
            focus.set(date);
            view.set(CalendarView::Day);
        })
    };

    let state = CalendarState {
        view: *view,
        focus: *focus,
        today,
    };

    let actions = UseCalendarActions {
        prev,
        next,
        go_today,
        set_view,
        drill_down,
    };

    UseCalendarResult { state, actions }
}
