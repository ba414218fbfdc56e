// Env values used by the open platform client.
pub const JTEXPRESS_API_ACCOUNT: &str = "JTEXPRESS_API_ACCOUNT";
pub const JTEXPRESS_PRIVATE_KEY: &str = "JTEXPRESS_PRIVATE_KEY";
pub const JTEXPRESS_BASE_URL: &str = "JTEXPRESS_BASE_URL";
pub const JTEXPRESS_LANG: &str = "JTEXPRESS_LANG";

pub const DEFAULT_BASE_URL: &str = "https://openapi.jtexpress.com.cn";
pub const API_PREFIX: &str = "/webopenplatformapi";
pub const DEFAULT_LANG: &str = "zh";

// Header names are case-insensitive on the wire.
pub const API_ACCOUNT: &str = "apiaccount";
pub const TIMESTAMP: &str = "timestamp";
pub const DIGEST: &str = "digest";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Name of the only form field in every request body.
pub const BIZ_CONTENT: &str = "bizContent";

pub const SUCCESS_CODE: &str = "1";

// Logistics endpoints.
pub const TRACE_PATH: &str = "/api/logistics/trace";
pub const SUBSCRIBE_PATH: &str = "/api/trace/subscribe";
// Fixed time type selector sent with every trace query.
pub const TIME_TYPE: &str = "1";
