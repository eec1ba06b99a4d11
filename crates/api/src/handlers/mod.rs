pub mod dig;
pub mod fallback;
pub mod health;

pub use dig::dig;
pub use fallback::not_found;
pub use health::health_check;
