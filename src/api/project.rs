//! Project Endpoints

use super::{segment, ApiClient, ApiRequest, ApiResult, Transport};
use crate::models::{DashboardProject, Project, ProjectFormData};

impl<T: Transport> ApiClient<T> {
    pub async fn list_projects(&self) -> ApiResult<Vec<DashboardProject>> {
        self.fetch(Some(ApiRequest::get("/projects"))).await
    }

    /// Project fields for the edit form
    pub async fn get_project(&self, project_id: &str) -> ApiResult<ProjectFormData> {
        self.fetch(Some(ApiRequest::get(format!("/projects/{}", segment(project_id)))))
            .await
    }

    /// Project with its board tasks and team
    pub async fn get_full_project(&self, project_id: &str) -> ApiResult<Project> {
        self.fetch(Some(ApiRequest::get(format!("/projects/{}", segment(project_id)))))
            .await
    }

    pub async fn create_project(&self, form: &ProjectFormData) -> ApiResult<String> {
        self.send_message(ApiRequest::post("/projects").with_json(form)).await
    }

    pub async fn update_project(&self, project_id: &str, form: &ProjectFormData) -> ApiResult<String> {
        let request = ApiRequest::put(format!("/projects/{}", segment(project_id))).with_json(form);
        self.send_message(request).await
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<String> {
        self.send_message(Some(ApiRequest::delete(format!("/projects/{}", segment(project_id)))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiError, Method, TransportError};
    use crate::models::ProjectFormData;

    const FULL_PROJECT: &str = r#"{
        "_id": "p1", "projectName": "Web", "clientName": "ACME", "description": "Relaunch",
        "manager": "u1", "team": [],
        "tasks": [{"_id": "t1", "name": "Design", "description": "", "status": "pending"}]
    }"#;

    #[tokio::test]
    async fn test_get_full_project() {
        let transport = RecordingTransport::default();
        transport.respond(200, FULL_PROJECT);

        let project = transport.client().get_full_project("p1").await.unwrap().unwrap();
        assert_eq!(project.tasks.len(), 1);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/projects/p1");
    }

    #[tokio::test]
    async fn test_edit_projection_uses_same_endpoint() {
        let transport = RecordingTransport::default();
        transport.respond(200, FULL_PROJECT);

        let form = transport.client().get_project("p1").await.unwrap().unwrap();
        assert_eq!(form.project_name, "Web");
        assert_eq!(form.client_name, "ACME");
    }

    #[tokio::test]
    async fn test_create_project_posts_form() {
        let transport = RecordingTransport::default();
        transport.respond(200, r#""Project created""#);

        let form = ProjectFormData {
            project_name: "Web".into(),
            client_name: "ACME".into(),
            description: "Relaunch".into(),
        };
        let msg = transport.client().create_project(&form).await.unwrap();
        assert_eq!(msg.as_deref(), Some("Project created"));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/projects");
        assert!(request.body.as_deref().unwrap().contains(r#""projectName":"Web""#));
    }

    #[tokio::test]
    async fn test_update_project_rejected() {
        let transport = RecordingTransport::default();
        transport.respond(404, r#"{"error":"Project not found"}"#);

        let result = transport.client().update_project("p9", &ProjectFormData::default()).await;
        assert_eq!(result, Err(ApiError::Request("Project not found".into())));
        assert_eq!(transport.requests()[0].method, Method::Put);
    }

    #[tokio::test]
    async fn test_delete_project_without_response_is_silent() {
        let transport = RecordingTransport::default();
        transport.fail(TransportError::Unreachable("network down".into()));

        let result = transport.client().delete_project("p1").await;
        assert_eq!(result, Ok(None));
        assert_eq!(transport.requests().len(), 1);
    }
}
