mod reader_protocol;
pub mod utils;
