use yew::prelude::*;
use shared::Task;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseTasksResult {
    pub state: TasksState,
    pub actions: UseTasksActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTasksActions {
    pub refresh_tasks: Callback<()>,
}

#[hook]
pub fn use_tasks(api_client: &ApiClient) -> UseTasksResult {
    let tasks = use_state(Vec::<Task>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh_tasks = {
        let api_client = api_client.clone();
        let tasks = tasks.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let tasks = tasks.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_tasks().await {
                    Ok(data) => {
                        Logger::info_with_component("use_tasks", &format!("Loaded {} tasks", data.len()));
                        tasks.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        // Keep rendering the calendar, just without tasks
                        Logger::error_with_component("use_tasks", &e);
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load tasks once on mount
    use_effect_with((), {
        let refresh_tasks = refresh_tasks.clone();
        move |_| {
            refresh_tasks.emit(());
            || ()
        }
    });

    let state = TasksState {
        tasks: (*tasks).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseTasksResult {
        state,
        actions: UseTasksActions { refresh_tasks },
    }
}
