pub mod models;
pub mod schema;
pub mod types;
pub mod util;

pub use models::User;

pub(crate) mod internal;
