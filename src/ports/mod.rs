/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the catalogue core uses to
/// reach the file system, the network and the console.
pub mod outbound;
