pub mod dig;
pub mod error;

pub use dig::DigParams;
pub use error::MessageResponse;
