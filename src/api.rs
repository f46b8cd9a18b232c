pub mod client_ip;
pub mod time_srv;
pub mod visitor;
