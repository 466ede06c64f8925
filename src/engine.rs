mod core;
mod session;

pub use self::core::GestureEngine;
pub use self::session::GestureSession;
