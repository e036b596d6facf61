//! Access Policies

/// The project manager is the only one allowed to edit tasks and the team
pub fn is_manager(manager_id: &str, user_id: &str) -> bool {
    !manager_id.is_empty() && manager_id == user_id
}
