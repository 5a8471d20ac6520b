// HTTP routes
pub mod health;
pub mod home;
pub mod question;

pub use health::*;
pub use home::*;
pub use question::*;
