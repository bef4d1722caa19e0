use contracts::shared::form_settings::FormSettings;
use contracts::system::users::{CreateUserDto, User};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, fetch_json, fetch_list};

/// Fetch all users of the current tenant
pub async fn fetch_users() -> Result<Vec<User>, String> {
    fetch_list::<User>("/api/system/users").await
}

/// Field overrides for a form, as configured on the server
pub async fn fetch_form_settings(form_key: &str) -> Result<FormSettings, String> {
    fetch_json::<FormSettings>(&format!("/api/system/form-settings/{}", form_key)).await
}

/// Create new user
pub async fn create_user(dto: CreateUserDto) -> Result<String, String> {
    let auth_header = auth_header()?;

    let response = Request::post(&api_url("/api/system/users"))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create user: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Delete user
pub async fn delete_user(id: &str) -> Result<(), String> {
    let auth_header = auth_header()?;

    let response = Request::delete(&api_url(&format!("/api/system/users/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete user: {}", response.status()));
    }

    Ok(())
}
