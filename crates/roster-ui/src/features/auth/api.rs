use crate::core::auth::AuthRequest;
use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use roster_api_models::AuthResponse;

/// Submit a login or registration request.
pub(crate) async fn authenticate(
    client: &ApiClient,
    request: &AuthRequest,
) -> Result<AuthResponse, ApiError> {
    match request {
        AuthRequest::Login(body) => client.post_json(request.path(), body).await,
        AuthRequest::Register(body) => client.post_json(request.path(), body).await,
    }
}
