pub mod command_parser;
pub mod terminal;
