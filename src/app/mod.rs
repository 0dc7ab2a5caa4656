// Application layer: what the `pets` binary does with a parsed command.

pub mod commands;
