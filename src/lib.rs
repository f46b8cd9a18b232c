pub mod api;
pub mod app;
pub mod err;
pub mod init;
