use crate::constants::{
    COLOR_BLUE, COLOR_GREEN, COLOR_MAGENTA, COLOR_RED, COLOR_RESET, COLOR_YELLOW,
};
use std::fmt;
use std::str::FromStr;

/// 日志级别，按严重程度递增排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    /// 写出后展开调用栈，可被外层 `catch_unwind` 捕获
    Panic,
    /// 写出后立即退出进程
    Fatal,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    /// 小写名称，与配置文件中的写法一致
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// 大写名称，用作输出行中的级别标签
    pub const fn capital_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// 级别对应的颜色：info 绿色，error 红色，其余不着色
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Level::Info => Some(COLOR_GREEN),
            Level::Error => Some(COLOR_RED),
            _ => None,
        }
    }

    /// 每个级别都有颜色的配色：debug 品红，info 蓝色，warn 黄色，其余红色
    pub const fn capital_color(self) -> &'static str {
        match self {
            Level::Debug => COLOR_MAGENTA,
            Level::Info => COLOR_BLUE,
            Level::Warn => COLOR_YELLOW,
            Level::Error | Level::Panic | Level::Fatal => COLOR_RED,
        }
    }

    /// 按级别颜色包裹文本
    pub fn colorize(self, text: &str) -> String {
        match self.color() {
            Some(color) => wrap(color, text),
            None => text.to_string(),
        }
    }

    /// 按全级别配色包裹文本
    pub fn capital_colorize(self, text: &str) -> String {
        wrap(self.capital_color(), text)
    }
}

fn wrap(color: &str, text: &str) -> String {
    format!("{color}{text}{COLOR_RESET}")
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.capital_str())
    }
}

/// 无法识别的级别名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Level::ALL
            .into_iter()
            .find(|l| l.as_str() == lower)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
