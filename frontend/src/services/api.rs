use gloo::net::http::Request;
use shared::{LogRequest, LogResponse, Task};

/// Port the trunk dev server serves the bundle on
pub const DEV_SERVER_PORT: &str = "8080";

/// Host API address used while the bundle comes from the dev server
pub const DEV_API_BASE_URL: &str = "http://localhost:3000";

/// API base for a page served from `port`.
///
/// The host serves the bundle itself, so requests go to the page's own
/// origin (an empty base). Only the dev server needs the absolute address.
pub fn base_url_for_port(port: &str) -> String {
    if port == DEV_SERVER_PORT {
        DEV_API_BASE_URL.to_string()
    } else {
        String::new()
    }
}

fn page_port() -> String {
    web_sys::window()
        .and_then(|window| window.location().port().ok())
        .unwrap_or_default()
}

/// API client for communicating with the site host
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the origin the page was served from
    pub fn new() -> Self {
        Self::with_base_url(base_url_for_port(&page_port()))
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the task list that feeds the admin calendar
    pub async fn get_tasks(&self) -> Result<Vec<Task>, String> {
        let url = format!("{}/api/tasks", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(format!("Failed to fetch tasks ({}): {}", response.status(), error_text));
                }
                match response.json::<Vec<Task>>().await {
                    Ok(tasks) => Ok(tasks),
                    Err(e) => Err(format!("Failed to parse tasks: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch tasks: {}", e)),
        }
    }

    /// Forward a log line to the host
    pub async fn send_log(&self, request: &LogRequest) -> Result<LogResponse, String> {
        let url = format!("{}/api/logs", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize log request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send log: {}", e))?;

        response
            .json::<LogResponse>()
            .await
            .map_err(|e| format!("Failed to parse log response: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
