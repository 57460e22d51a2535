mod health_check;
mod submissions;

pub use health_check::*;
pub use submissions::*;
