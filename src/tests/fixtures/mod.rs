pub mod aggregate;
pub mod readers;
pub mod state;
