//! Authentication: OTP login, session state, and token handling.

mod errors;
mod models;
mod service;
mod token;

pub use errors::AuthServiceError;
pub use models::{Profile, Session, UserRole};
pub use service::{AuthService, HttpAuthService, LoginResponse, MockAuthService};
pub use token::AuthToken;
