use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;

thread_local! {
    static LOG_CLIENT: ApiClient = ApiClient::new();
}

/// Logs to the browser console and forwards the line to the host
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        let client = LOG_CLIENT.with(ApiClient::clone);

        // Fire and forget, a failed log post must never surface in the UI
        spawn_local(async move {
            let _ = client.send_log(&request).await;
        });
    }
}
