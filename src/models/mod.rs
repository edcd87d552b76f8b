pub mod category;
pub mod forms;
pub mod task;
pub mod user;

pub use forms::{CategoryPayload, Credentials, ListParams, TaskFilter, TaskPayload};
pub use task::{Priority, SearchResult, Status};
pub use user::UserDto;
