#[cfg(feature = "server")]
pub(crate) mod auth;

mod session;
pub use session::*;

mod business;
pub use business::*;

mod provider;
pub use provider::*;

mod government;
pub use government::*;
