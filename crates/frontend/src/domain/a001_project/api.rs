use contracts::domain::a001_project::Project;
use gloo_net::http::Request;

use crate::shared::api_utils::projects_url;

/// Fetch the full project collection
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let response = Request::get(&projects_url())
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch projects: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str::<Vec<Project>>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
