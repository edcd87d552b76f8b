// Domain error type for the task manager, built on thiserror. Every failure is
// terminal for the current request and maps to a fixed status code in the
// response module.
use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("wrong username or password")]
    AuthenticationFailed,

    #[error("user can not be created")]
    InvalidUser,

    #[error("username is already taken")]
    DuplicateUsername,

    #[error("user not found")]
    UserNotFound,

    #[error("category not found")]
    CategoryNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("task can not be created")]
    TaskInvalid,

    #[error("task can not be updated")]
    TaskUpdateRejected,

    // The #[from] attribute converts a sea_orm::DbErr into an AppError::Database
    // via the From trait.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
