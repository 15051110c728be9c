pub mod keyboard;
pub mod render;
pub mod session;

pub use session::Session;
