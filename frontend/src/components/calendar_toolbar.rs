use yew::prelude::*;
use web_sys::MouseEvent;
use shared::CalendarView;
use crate::hooks::use_calendar::UseCalendarActions;

#[derive(Properties, PartialEq)]
pub struct CalendarToolbarProps {
    pub label: String,
    pub view: CalendarView,
    pub actions: UseCalendarActions,
}

#[function_component(CalendarToolbar)]
pub fn calendar_toolbar(props: &CalendarToolbarProps) -> Html {
    html! {
        <div class="calendar-toolbar">
            <div class="toolbar-nav">
                <button type="button" class="calendar-nav-btn" onclick={props.actions.go_today.clone()}>{"Today"}</button>
                <button type="button" class="calendar-nav-btn" onclick={props.actions.prev.clone()}>{"‹ Back"}</button>
                <button type="button" class="calendar-nav-btn" onclick={props.actions.next.clone()}>{"Next ›"}</button>
            </div>

            <h2 class="calendar-title">{&props.label}</h2>

            <div class="toolbar-views">
                {for CalendarView::all().into_iter().map(|view| {
                    let class = if view == props.view { "view-btn active" } else { "view-btn" };
                    let onclick = {
                        let set_view = props.actions.set_view.clone();
                        Callback::from(move |_: MouseEvent| set_view.emit(view))
                    };
                    html! {
                        <button type="button" key={view.as_key()} {class} {onclick}>{view.label()}</button>
                    }
                })}
            </div>
        </div>
    }
}
