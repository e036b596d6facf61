//! Task Endpoints

use serde::Serialize;

use super::{segment, ApiClient, ApiRequest, ApiResult, Transport};
use crate::models::{Task, TaskFormData, TaskStatus};

#[derive(Serialize)]
struct StatusArgs {
    status: TaskStatus,
}

fn task_path(project_id: &str, task_id: &str) -> String {
    format!("/projects/{}/tasks/{}", segment(project_id), segment(task_id))
}

impl<T: Transport> ApiClient<T> {
    pub async fn create_task(&self, project_id: &str, form: &TaskFormData) -> ApiResult<String> {
        let request = ApiRequest::post(format!("/projects/{}/tasks", segment(project_id))).with_json(form);
        self.send_message(request).await
    }

    pub async fn get_task(&self, project_id: &str, task_id: &str) -> ApiResult<Task> {
        self.fetch(Some(ApiRequest::get(task_path(project_id, task_id)))).await
    }

    pub async fn update_task(&self, project_id: &str, task_id: &str, form: &TaskFormData) -> ApiResult<String> {
        self.send_message(ApiRequest::put(task_path(project_id, task_id)).with_json(form))
            .await
    }

    pub async fn delete_task(&self, project_id: &str, task_id: &str) -> ApiResult<String> {
        self.send_message(Some(ApiRequest::delete(task_path(project_id, task_id))))
            .await
    }

    pub async fn update_status(&self, project_id: &str, task_id: &str, status: TaskStatus) -> ApiResult<String> {
        let request = ApiRequest::post(format!("{}/status", task_path(project_id, task_id)))
            .with_json(&StatusArgs { status });
        self.send_message(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::RecordingTransport;
    use crate::api::{ApiError, Method};
    use crate::models::{TaskFormData, TaskStatus};

    #[tokio::test]
    async fn test_update_status_request_shape() {
        let transport = RecordingTransport::default();
        transport.respond(200, r#""Status updated""#);

        let msg = transport
            .client()
            .update_status("p1", "t1", TaskStatus::InProgress)
            .await
            .unwrap();
        assert_eq!(msg.as_deref(), Some("Status updated"));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/projects/p1/tasks/t1/status");
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"inProgress"}"#));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let transport = RecordingTransport::default();
        transport.respond(404, r#"{"error":"Task not found"}"#);

        let result = transport.client().get_task("p1", "t2").await;
        assert_eq!(result, Err(ApiError::Request("Task not found".into())));
        assert_eq!(transport.requests()[0].path, "/projects/p1/tasks/t2");
    }

    #[tokio::test]
    async fn test_task_crud_paths() {
        let transport = RecordingTransport::default();
        transport.respond(201, "Task created").respond(200, "Task updated").respond(200, "Task deleted");
        let client = transport.client();
        let form = TaskFormData { name: "Design".into(), description: "Mockups".into() };

        assert_eq!(client.create_task("p1", &form).await.unwrap().as_deref(), Some("Task created"));
        assert_eq!(client.update_task("p1", "t1", &form).await.unwrap().as_deref(), Some("Task updated"));
        assert_eq!(client.delete_task("p1", "t1").await.unwrap().as_deref(), Some("Task deleted"));

        let requests = transport.requests();
        assert_eq!((requests[0].method, requests[0].path.as_str()), (Method::Post, "/projects/p1/tasks"));
        assert_eq!((requests[1].method, requests[1].path.as_str()), (Method::Put, "/projects/p1/tasks/t1"));
        assert_eq!((requests[2].method, requests[2].path.as_str()), (Method::Delete, "/projects/p1/tasks/t1"));
    }
}
