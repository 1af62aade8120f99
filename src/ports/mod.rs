/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives the outside world only through the
/// outbound (driven) ports declared here.
pub mod outbound;
