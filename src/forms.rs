//! Form Validation
//!
//! Required-field checks run before a form is submitted.

use crate::models::{ProjectFormData, TaskFormData, TeamMemberForm};

/// Validation message for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.0.push(FieldError { field, message });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn validate_project(form: &ProjectFormData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.require("projectName", &form.project_name, "Project name is required");
    errors.require("clientName", &form.client_name, "Client name is required");
    errors.require("description", &form.description, "Description is required");
    errors.into_result()
}

pub fn validate_task(form: &TaskFormData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.require("name", &form.name, "Task name is required");
    errors.require("description", &form.description, "Task description is required");
    errors.into_result()
}

pub fn validate_member(form: &TeamMemberForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.require("email", &form.email, "Email is required");
    let email = form.email.trim();
    if !email.is_empty() {
        let valid = email
            .split_once('@')
            .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'))
            .unwrap_or(false);
        if !valid {
            errors.0.push(FieldError { field: "email", message: "Email is not valid" });
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_requires_all_fields() {
        let errors = validate_project(&ProjectFormData {
            project_name: "Web".into(),
            client_name: "  ".into(),
            description: String::new(),
        })
        .unwrap_err();
        assert_eq!(errors.get("projectName"), None);
        assert_eq!(errors.get("clientName"), Some("Client name is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_task_form_ok() {
        let form = TaskFormData { name: "Design".into(), description: "Mockups".into() };
        assert!(validate_task(&form).is_ok());
    }

    #[test]
    fn test_member_email() {
        assert!(validate_member(&TeamMemberForm { email: "ana@example.com".into() }).is_ok());
        let errors = validate_member(&TeamMemberForm { email: "ana@".into() }).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is not valid"));
        let errors = validate_member(&TeamMemberForm { email: String::new() }).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
    }
}
