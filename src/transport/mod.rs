/// SOAP envelope writer and reader
pub mod envelope;
/// Transport trait used by the client
pub mod interface;
/// HTTP implementation of the transport
pub mod soap;

pub use interface::SoapTransport;
pub use soap::SoapClient;
