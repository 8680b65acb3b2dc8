use shared::{CalendarEvent, Task, TaskSelection};
use yew::prelude::*;
use crate::services::logging::Logger;

pub struct UseTaskSelectionResult {
    pub selected: Option<Task>,
    pub on_select: Callback<CalendarEvent>,
    pub on_dismiss: Callback<()>,
}

/// Which task the detail modal shows; local to one calendar instance
#[hook]
pub fn use_task_selection() -> UseTaskSelectionResult {
    let selection = use_state(TaskSelection::new);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |event: CalendarEvent| {
            Logger::debug_with_component("Calendar", &format!("Selected task '{}'", event.title));
            let mut next = (*selection).clone();
            next.select(&event);
            selection.set(next);
        })
    };

    let on_dismiss = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            let mut next = (*selection).clone();
            next.dismiss();
            selection.set(next);
        })
    };

    UseTaskSelectionResult {
        selected: selection.selected().cloned(),
        on_select,
        on_dismiss,
    }
}
