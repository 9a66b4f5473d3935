pub mod handlers;
pub mod state;
pub mod store;
