pub mod errors;
pub mod iterate_domain;
pub mod iterate_domain_serial;
pub mod ports;
