mod category_service;
mod task_service;
mod user_service;

pub use category_service::CategoryService;
pub use task_service::TaskService;
pub use user_service::UserService;

use sea_orm::DatabaseConnection;

// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub categories: CategoryService,
    pub tasks: TaskService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let users = UserService::new(db.clone());
        let categories = CategoryService::new(db.clone());
        let tasks = TaskService::new(db, users.clone(), categories.clone());
        Self {
            users,
            categories,
            tasks,
        }
    }
}
