//! 公共常量
//! 提供：
//! - HTTP 状态码与对应的错误信息
//! - 合法日志级别常量 LOG_LEVELS
//! - 日志级别着色使用的 ANSI 转义码

// HTTP 状态码
pub const HTTP_STATUS_OK: u16 = 200;
pub const HTTP_STATUS_BAD_REQUEST: u16 = 400;
pub const HTTP_STATUS_UNAUTHORIZED: u16 = 401;
pub const HTTP_STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

// 错误信息
pub const ERR_INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const ERR_BAD_REQUEST: &str = "Bad Request";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

/// 合法的日志级别（统一来源，按严重程度递增）
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error", "panic", "fatal"];

// ANSI 转义码
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_GREEN: &str = "\x1b[32m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_BLUE: &str = "\x1b[34m";
pub const COLOR_MAGENTA: &str = "\x1b[35m";

/// 查找错误状态码对应的错误信息
///
/// 只有 400/401/500 有对应信息，其他状态码（包括 200）返回 `None`。
pub const fn error_message_for(status: u16) -> Option<&'static str> {
    match status {
        HTTP_STATUS_BAD_REQUEST => Some(ERR_BAD_REQUEST),
        HTTP_STATUS_UNAUTHORIZED => Some(ERR_UNAUTHORIZED),
        HTTP_STATUS_INTERNAL_SERVER_ERROR => Some(ERR_INTERNAL_SERVER_ERROR),
        _ => None,
    }
}
