mod password;

pub use password::*;
