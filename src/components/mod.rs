//! UI Components
//!
//! Views, overlays and shared widgets.

mod modal;
mod toasts;
mod delete_confirm_button;
mod dashboard;
mod project_form;
mod project_details;
mod task_board;
mod task_card;
mod task_modals;
mod delete_project_modal;
mod team_view;
mod static_pages;

pub use modal::Modal;
pub use toasts::Toasts;
pub use delete_confirm_button::DeleteConfirmButton;
pub use dashboard::DashboardView;
pub use project_form::{CreateProjectView, EditProjectView};
pub use project_details::ProjectDetailsView;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_modals::{AddTaskModal, EditTaskModal, TaskDetailsModal};
pub use delete_project_modal::DeleteProjectModal;
pub use team_view::TeamView;
pub use static_pages::{AuthView, ChangePasswordView, ContactView, NotFoundView, ProfileView};
