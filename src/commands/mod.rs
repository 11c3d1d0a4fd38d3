//! CLI commands for graphwalk

pub mod dispatch;
pub mod helpers;
pub mod leaves;
pub mod path;
pub mod traverse;
