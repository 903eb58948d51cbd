use gloo_net::http::Request;
use indexmap::IndexMap;
use run_types::{ExecuteGraphRequest, ExecuteGraphResponse, Graph, LibraryAgent, RunRecord};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8006
/// - In production: use same origin (API serves the dashboard)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8006".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment)
        .as_string()
        .unwrap_or_else(|| segment.to_string())
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({detail})");
        }
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({error})");
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return format!("HTTP error: {status} ({message})");
        }
    }

    format!("HTTP error: {status} ({body})")
}

// ============================================================================
// Graph Execution
// ============================================================================

pub async fn execute_graph(
    graph_id: &str,
    graph_version: u32,
    inputs: IndexMap<String, serde_json::Value>,
) -> Result<ExecuteGraphResponse, String> {
    let url = format!(
        "{}/api/graphs/{}/execute/{}",
        api_base(),
        encode_segment(graph_id),
        graph_version
    );

    let request = ExecuteGraphRequest { inputs };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn stop_graph_execution(graph_id: &str, run_id: &str) -> Result<(), String> {
    let url = format!(
        "{}/api/graphs/{}/executions/{}/stop",
        api_base(),
        encode_segment(graph_id),
        encode_segment(run_id)
    );

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    Ok(())
}

pub async fn fetch_graph_execution(graph_id: &str, run_id: &str) -> Result<RunRecord, String> {
    let url = format!(
        "{}/api/graphs/{}/executions/{}",
        api_base(),
        encode_segment(graph_id),
        encode_segment(run_id)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn delete_graph_execution(run_id: &str) -> Result<(), String> {
    let url = format!("{}/api/executions/{}", api_base(), encode_segment(run_id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    Ok(())
}

// ============================================================================
// Graphs and Library Agents
// ============================================================================

pub async fn fetch_graph(graph_id: &str, version: Option<u32>) -> Result<Graph, String> {
    let mut url = format!("{}/api/graphs/{}", api_base(), encode_segment(graph_id));
    if let Some(version) = version {
        url.push_str(&format!("?version={version}"));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn fetch_library_agent(agent_id: &str) -> Result<LibraryAgent, String> {
    let url = format!(
        "{}/api/library/agents/{}",
        api_base(),
        encode_segment(agent_id)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}
