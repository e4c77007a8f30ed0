/// WSDL of the Allegro WebAPI sandbox
pub const SANDBOX_URL: &str = "https://webapi.allegro.pl.webapisandbox.pl/service.php?wsdl";
/// WSDL of the Allegro WebAPI production service
pub const PRODUCTION_URL: &str = "https://webapi.allegro.pl/service.php?wsdl";
/// Auction durations, in days, accepted by `doSellSomeAgain`
pub const ALLOWED_DURATIONS: [u8; 5] = [3, 5, 7, 10, 14];
/// Duration used when the requested one is not in [`ALLOWED_DURATIONS`]
pub const DEFAULT_AUCTION_DURATION: u8 = 3;
/// Country used when none is configured (1 = allegro.pl)
pub const DEFAULT_COUNTRY_ID: i32 = 1;
/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Relist immediately
pub const IMMEDIATE_START: i64 = 0;
/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;
/// User agent string sent with every SOAP request
pub const USER_AGENT: &str = "allegro-webapi/0.1.0";
/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
