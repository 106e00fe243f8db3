pub mod config;
pub mod error;
pub mod frame;
pub mod io;
pub mod roi;
pub mod session;
