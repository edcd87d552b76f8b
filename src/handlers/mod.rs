mod auth;
mod category;
mod task;
mod user;

pub use auth::{handle_login, handle_logout};
pub use category::{create_category, delete_category, get_category, list_categories};
pub use task::{create_task, delete_task, get_task, list_all_tasks, search_tasks, update_task};
pub use user::{handle_register, list_users};
