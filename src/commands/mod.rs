//! CLI commands for pathkit

pub mod compare;
pub mod demo;
pub mod dispatch;
pub mod maze;
pub mod query;
pub mod render;
pub mod search;
