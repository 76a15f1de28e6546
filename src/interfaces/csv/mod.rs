pub mod request_reader;
pub mod snapshot_writer;
