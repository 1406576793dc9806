mod admin;
mod role;
mod student;

pub use admin::{add_passage, admin_menu, delete_passage, list_passages, show_ranking};
pub use role::role_select;
pub use student::{read_passage, student_menu, view_progress};

pub(crate) const INVALID_CHOICE: &str = "Invalid choice!";
pub(crate) const NO_PASSAGES: &str = "No passages yet!";
