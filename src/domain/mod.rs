pub mod confirmation;
pub mod form;
pub mod ports;
pub mod request;
