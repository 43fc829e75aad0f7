pub mod config;
pub mod participants;
pub mod solved;
pub mod submissions;
