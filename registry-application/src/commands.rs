pub mod export_commands;
