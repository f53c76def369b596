//! 用户管理

pub mod extract;
pub mod handler;
pub mod model;
pub mod store;

pub use model::{User, UserPayload};
pub use store::UserStore;
