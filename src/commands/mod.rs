//! CLI commands for rutter

pub mod count;
pub mod dispatch;
pub mod load;
pub mod route;
pub mod shortest;
