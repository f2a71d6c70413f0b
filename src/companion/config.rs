pub mod platform {
    pub const ORIGIN: &str = "https://leetcode.com";
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/68.0.3440.106 Safari/537.36";
    pub const CSRF_COOKIE: &str = "csrftoken";
    pub const CSRF_HEADER: &str = "x-csrftoken";
    pub const SESSION_COOKIE: &str = "LEETCODE_SESSION";
}
pub mod storage {
    pub const CATALOG_FILE: &str = "lc.json";
    pub const COOKIE_FILE: &str = ".cookies.json";
    pub const ACCOUNT_FILE: &str = "account.yaml";
}
pub mod submission {
    use std::time::Duration;
    pub const CHECK_DELAY: Duration = Duration::from_secs(2);
    pub const CHECK_LIMIT: u32 = 60;
}
