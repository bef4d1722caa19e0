use contracts::system::auth::UserInfo;

use crate::shared::api_utils::fetch_json;

/// Current user with granted permissions
pub async fn get_current_user() -> Result<UserInfo, String> {
    fetch_json::<UserInfo>("/api/system/auth/me").await
}
