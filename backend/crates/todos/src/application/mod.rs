//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod clear_done;
pub mod config;
pub mod create_todo;
pub mod list_todos;
pub mod register;
pub mod session_gate;
pub mod sign_in;
pub mod sign_out;
pub mod toggle_todo;

// Re-exports
pub use check_session::{CheckSessionUseCase, CurrentAccount};
pub use clear_done::{ClearDoneOutput, ClearDoneUseCase};
pub use config::TodoConfig;
pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use list_todos::ListTodosUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session_gate::SessionGate;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use toggle_todo::{ToggleTarget, ToggleTodoUseCase};
