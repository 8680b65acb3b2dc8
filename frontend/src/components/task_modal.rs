use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{format_long_date, parse_task_date, Task};
use super::task_event::DEFAULT_AVATAR;

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub task: Task,
    pub on_close: Callback<()>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let task = &props.task;

    html! {
        <div class="task-modal-backdrop" onclick={on_backdrop_click}>
            <div class="task-modal" onclick={on_modal_click}>
                <h2 class="task-modal-title">{&task.task_name}</h2>
                <p>
                    <strong>{"Start Date: "}</strong>
                    {format_long_date(parse_task_date(&task.start_date))}
                </p>
                <p>
                    <strong>{"Due Date: "}</strong>
                    {format_long_date(parse_task_date(&task.due_date))}
                </p>

                {if !task.assignee.is_empty() {
                    html! {
                        <div class="task-modal-assignees">
                            <strong>{"Assigned to:"}</strong>
                            <ul>
                                {for task.assignee.iter().map(|assignee| {
                                    let picture = if assignee.profile_picture.is_empty() {
                                        DEFAULT_AVATAR.to_string()
                                    } else {
                                        assignee.profile_picture.clone()
                                    };
                                    html! {
                                        <li class="assignee">
                                            <img src={picture} alt="Assignee Avatar" class="avatar" />
                                            <span>{assignee.name.clone().unwrap_or_default()}</span>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="task-modal-buttons">
                    <button type="button" class="btn btn-close" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
