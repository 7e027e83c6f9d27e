pub mod check;
mod command_result;
pub mod init;
pub mod render;
pub mod sync;

pub use command_result::*;
