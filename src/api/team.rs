//! Team Endpoints

use serde::Serialize;

use super::{segment, ApiClient, ApiRequest, ApiResult, Transport};
use crate::models::{TeamMember, TeamMemberForm};

#[derive(Serialize)]
struct MemberIdArgs<'a> {
    id: &'a str,
}

impl<T: Transport> ApiClient<T> {
    pub async fn find_user_by_email(&self, project_id: &str, form: &TeamMemberForm) -> ApiResult<TeamMember> {
        let request = ApiRequest::post(format!("/projects/{}/team/find", segment(project_id))).with_json(form);
        self.fetch(request).await
    }

    pub async fn add_member(&self, project_id: &str, user_id: &str) -> ApiResult<String> {
        let request = ApiRequest::post(format!("/projects/{}/team", segment(project_id)))
            .with_json(&MemberIdArgs { id: user_id });
        self.send_message(request).await
    }

    pub async fn list_team(&self, project_id: &str) -> ApiResult<Vec<TeamMember>> {
        self.fetch(Some(ApiRequest::get(format!("/projects/{}/team", segment(project_id)))))
            .await
    }

    pub async fn remove_member(&self, project_id: &str, user_id: &str) -> ApiResult<String> {
        let path = format!("/projects/{}/team/{}", segment(project_id), segment(user_id));
        self.send_message(Some(ApiRequest::delete(path))).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiError, Method};
    use crate::models::TeamMemberForm;

    #[tokio::test]
    async fn test_find_then_add_member() {
        let transport = RecordingTransport::default();
        transport
            .respond(200, r#"{"_id":"u2","name":"Luis","email":"luis@example.com"}"#)
            .respond(200, r#""Member added""#);
        let client = transport.client();

        let form = TeamMemberForm { email: "luis@example.com".into() };
        let member = client.find_user_by_email("p1", &form).await.unwrap().unwrap();
        assert_eq!(member.id, "u2");

        let msg = client.add_member("p1", &member.id).await.unwrap();
        assert_eq!(msg.as_deref(), Some("Member added"));

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/projects/p1/team/find");
        assert_eq!(requests[1].path, "/projects/p1/team");
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"id":"u2"}"#));
    }

    #[tokio::test]
    async fn test_add_member_twice_is_rejected() {
        let transport = RecordingTransport::default();
        transport.respond(409, r#"{"error":"User already in project"}"#);

        let result = transport.client().add_member("p1", "u2").await;
        assert_eq!(result, Err(ApiError::Request("User already in project".into())));
    }

    #[tokio::test]
    async fn test_list_and_remove_members() {
        let transport = RecordingTransport::default();
        transport
            .respond(200, r#"[{"_id":"u2","name":"Luis","email":"luis@example.com"}]"#)
            .respond(200, "Member removed");
        let client = transport.client();

        let team = client.list_team("p1").await.unwrap().unwrap();
        assert_eq!(team.len(), 1);
        client.remove_member("p1", "u2").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].path, "/projects/p1/team/u2");
    }
}
