/// Default base URL of the CloudPlugs REST API
pub const DEFAULT_BASE_URL: &str = "https://api.cloudplugs.com/iot/";
/// Default timeout in seconds for HTTP requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Maximum number of redirects followed for a single request
pub const MAX_REDIRECTS: usize = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("cloudplugs-client/", env!("CARGO_PKG_VERSION"));

/// Header carrying the password of a device
pub const PLUG_AUTH_HEADER: &str = "X-Plug-Auth";
/// Header carrying the plug id of a device
pub const PLUG_ID_HEADER: &str = "X-Plug-Id";
/// Header carrying the email of a master account
pub const PLUG_EMAIL_HEADER: &str = "X-Plug-Email";
/// Header carrying the master password
pub const PLUG_MASTER_HEADER: &str = "X-Plug-Master";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Path of the data endpoints
pub const PATH_DATA: &str = "data";
/// Path of the device endpoints
pub const PATH_DEVICE: &str = "device";
/// Path of the channel endpoints
pub const PATH_CHANNEL: &str = "channel";
/// Path segment of the device location
pub const PATH_LOCATION: &str = "location";

/// Lower bound for a longitude in degrees
pub const MIN_LONGITUDE: f64 = -180.0;
/// Upper bound for a longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;
/// Lower bound for a latitude in degrees
pub const MIN_LATITUDE: f64 = -90.0;
/// Upper bound for a latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Length of the random hardware ids generated by the client
pub const HWID_LENGTH: usize = 24;
