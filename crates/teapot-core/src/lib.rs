pub mod config;
pub mod logging;

pub mod origin;
pub mod redirect;
pub mod session;
