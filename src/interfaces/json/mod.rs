pub mod confirmation_writer;
pub mod request_reader;
