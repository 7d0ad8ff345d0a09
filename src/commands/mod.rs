pub mod base_commands;
pub mod report_format;
pub mod simulate_cmd;
pub mod what_if_cmd;
