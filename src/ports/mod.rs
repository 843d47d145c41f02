/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the capabilities the board core uses to
/// reach external systems: the registry contract, diagnostics, console and output.
pub mod outbound;
