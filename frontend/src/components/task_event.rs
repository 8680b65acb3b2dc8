use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{event_style, CalendarEvent};

pub const DEFAULT_AVATAR: &str = "/img/default-avatar.png";

#[derive(Properties, PartialEq)]
pub struct TaskEventProps {
    pub event: CalendarEvent,
    pub on_select: Callback<CalendarEvent>,
}

/// Event chip: assignee avatar plus task name, colored by task name
#[function_component(TaskEvent)]
pub fn task_event(props: &TaskEventProps) -> Html {
    let onclick = {
        let event = props.event.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(event.clone());
        })
    };

    let (avatar, alt) = match props.event.task.primary_picture() {
        Some(picture) => (picture.to_string(), "Assignee Avatar"),
        None => (DEFAULT_AVATAR.to_string(), "Default Avatar"),
    };

    html! {
        <div class="calendar-event" style={event_style(&props.event)} title={props.event.title.clone()} {onclick}>
            <div class="event-avatar">
                <img src={avatar} alt={alt} class="avatar" />
            </div>
            <div class="event-title">{&props.event.title}</div>
        </div>
    }
}
