/// Outbound adapters - chain, snapshot, console and output implementations of the ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
