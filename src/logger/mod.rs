//! 进程级彩色控制台日志门面
//!
//! 启动时调用一次 [`init_logger`]，之后任意位置通过 [`debug`]、[`info`]、[`warn`]、
//! [`error`]、[`panic`]、[`fatal`] 输出日志。未初始化就调用会直接 panic，
//! 需要检查式访问时使用 [`try_global`]。

mod bridge;
pub mod encoder;
pub mod field;
mod handle;
pub mod level;

pub use bridge::bridge_log_crate;
pub use encoder::{Caller, ColorMode, ConsoleEncoder, TimeFormat};
pub use field::{Field, field};
pub use handle::{BufferSink, Logger, PanicEntry};
pub use level::Level;

use crate::config::LoggerConfig;
use crate::error::{LoggerError, Result};
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

// 全局句柄；重复初始化时以最后一次为准
static GLOBAL: Lazy<RwLock<Option<Arc<Logger>>>> = Lazy::new(|| RwLock::new(None));

/// 初始化全局日志器：标准输出、debug 级别、彩色级别标签、短调用位置
pub fn init_logger() {
    set_global(Logger::stdout());
}

/// 按配置初始化全局日志器
pub fn init_logger_with(config: &LoggerConfig) -> Result<()> {
    set_global(Logger::from_config(config)?);
    Ok(())
}

/// 安装任意日志器为全局句柄，替换已有句柄
pub fn set_global(logger: Logger) {
    let mut slot = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(logger));
}

/// 获取全局日志器；未初始化时返回错误
pub fn try_global() -> Result<Arc<Logger>> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or_else(|| LoggerError::NotInitialized.into())
}

/// 获取全局日志器；未初始化时 panic
#[track_caller]
pub fn global() -> Arc<Logger> {
    match try_global() {
        Ok(logger) => logger,
        Err(e) => panic!("{e}"),
    }
}

#[track_caller]
pub fn debug(msg: &str, fields: &[Field]) {
    global().debug(msg, fields);
}

#[track_caller]
pub fn info(msg: &str, fields: &[Field]) {
    global().info(msg, fields);
}

#[track_caller]
pub fn warn(msg: &str, fields: &[Field]) {
    global().warn(msg, fields);
}

#[track_caller]
pub fn error(msg: &str, fields: &[Field]) {
    global().error(msg, fields);
}

#[track_caller]
pub fn panic(msg: &str, fields: &[Field]) -> ! {
    global().panic(msg, fields)
}

#[track_caller]
pub fn fatal(msg: &str, fields: &[Field]) -> ! {
    global().fatal(msg, fields)
}
