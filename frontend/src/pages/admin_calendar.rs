use yew::prelude::*;
use crate::components::calendar::TaskCalendar;
use crate::hooks::use_tasks::use_tasks;
use crate::services::api::ApiClient;
use crate::services::date_utils;

/// Admin shell around the task calendar
#[function_component(AdminCalendar)]
pub fn admin_calendar() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let tasks = use_tasks(&api_client);
    let today = use_memo((), |_| date_utils::today());

    let on_refresh = {
        let refresh_tasks = tasks.actions.refresh_tasks.clone();
        Callback::from(move |_: MouseEvent| refresh_tasks.emit(()))
    };

    html! {
        <div class="admin-shell">
            <aside class="admin-sidebar">
                <h2>{"Super Admin"}</h2>
                <nav>
                    <span class="admin-nav-item active">{"Calendar"}</span>
                </nav>
            </aside>

            <section class="admin-content">
                <div class="admin-content-header">
                    <h1>{"Task calendar"}</h1>
                    <button type="button" class="btn btn-secondary" onclick={on_refresh} disabled={tasks.state.loading}>
                        {if tasks.state.loading { "Loading..." } else { "Refresh" }}
                    </button>
                </div>

                {if let Some(error) = &tasks.state.error {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <TaskCalendar tasks={tasks.state.tasks.clone()} today={*today} />
            </section>
        </div>
    }
}
