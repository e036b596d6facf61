//! Session Endpoints

use super::{ApiClient, ApiRequest, ApiResult, Transport};
use crate::models::User;

impl<T: Transport> ApiClient<T> {
    /// The user the bearer token belongs to
    pub async fn current_user(&self) -> ApiResult<User> {
        self.fetch(Some(ApiRequest::get("/auth/user"))).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::RecordingTransport;

    #[tokio::test]
    async fn test_current_user() {
        let transport = RecordingTransport::default();
        transport.respond(200, r#"{"_id":"u1","name":"Ana","email":"ana@example.com","confirmed":true}"#);

        let user = transport.client().current_user().await.unwrap().unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(transport.requests()[0].path, "/auth/user");
    }

    #[tokio::test]
    async fn test_unauthorized_surfaces_message() {
        let transport = RecordingTransport::default();
        transport.respond(401, r#"{"error":"Not authorized"}"#);

        let result = transport.client().current_user().await;
        assert_eq!(result.unwrap_err().message(), "Not authorized");
    }
}
