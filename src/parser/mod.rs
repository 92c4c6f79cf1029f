// Parser module: turns World Bank JSON payloads into indicator tables.

pub mod indicator_parser;

pub use indicator_parser::parse_payload;
