// src/application/commands/users/mod.rs
mod capability;
mod change_password;
mod login;
mod password;
mod profile;
mod register;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use profile::UpdateProfileCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
