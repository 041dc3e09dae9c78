//! Application-wide constants

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub const SELLER_ACCOUNT_PENDING_PATH: &str = "/seller/account-pending";
pub const SELLER_ACCOUNT_DEACTIVE_PATH: &str = "/seller/account-deactive";
pub const HIRE_ACCOUNT_PENDING_PATH: &str = "/hire/account-pending";
pub const HIRE_ACCOUNT_INACTIVE_PATH: &str = "/hire/account-inactive";

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
pub const DEFAULT_TOKEN_LEEWAY: u64 = 0;

pub const MENU_DISPLAY_SETTINGS_CACHE_KEY: &str = "portal:menu-display-settings";
