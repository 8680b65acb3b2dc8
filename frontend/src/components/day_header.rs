use chrono::NaiveDate;
use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct DayHeaderProps {
    pub date: NaiveDate,
    /// Tasks running on this day
    pub task_count: usize,
    pub is_today: bool,
    /// Month cells only show the day number
    #[prop_or(false)]
    pub compact: bool,
    pub on_drill_down: Callback<NaiveDate>,
}

pub fn day_label(date: NaiveDate, compact: bool) -> String {
    if compact {
        date.format("%-d").to_string()
    } else {
        date.format("%a %m/%d").to_string()
    }
}

pub fn task_count_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}

#[function_component(DayHeader)]
pub fn day_header(props: &DayHeaderProps) -> Html {
    let onclick = {
        let date = props.date;
        let on_drill_down = props.on_drill_down.clone();
        Callback::from(move |_: MouseEvent| on_drill_down.emit(date))
    };

    let class = if props.is_today { "day-header today" } else { "day-header" };

    html! {
        <div {class}>
            <button type="button" class="day-number" {onclick}>
                {day_label(props.date, props.compact)}
            </button>
            <span class="day-task-count">{task_count_label(props.task_count)}</span>
        </div>
    }
}
