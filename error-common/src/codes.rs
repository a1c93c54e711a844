// Error codes implementation
// Standardized error codes for Buzz Connect

pub mod config {
    pub const INVALID_SETTING: &str = "CONFIG_1001";
}

pub mod oauth {
    pub const STATE_BUILD_FAILED: &str = "OAUTH_2101";
}

pub mod routing {
    pub const NOT_FOUND: &str = "ROUTE_4004";
}

pub mod server {
    pub const BIND_FAILED: &str = "SERVER_5001";
    pub const SERVE_FAILED: &str = "SERVER_5002";
}

pub mod internal {
    pub const UNEXPECTED: &str = "INTERNAL_9001";
}
