use super::encoder::Caller;
use super::level::Level;
use crate::error::{LoggerError, Result};
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// `log` 宏的转发后端：每条记录都交给当前的全局日志器
#[derive(Debug)]
struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        super::try_global().is_ok_and(|l| l.enabled(Level::from(metadata.level())))
    }

    fn log(&self, record: &Record) {
        // 尚未初始化全局日志器时丢弃
        let Ok(logger) = super::try_global() else {
            return;
        };
        let caller = record
            .file()
            .map(|file| Caller::new(file, record.line().unwrap_or(0)));
        let msg = match record.args().as_str() {
            Some(s) => s.to_string(),
            None => record.args().to_string(),
        };
        logger.write_entry(Level::from(record.level()), caller, &msg, &[]);
    }

    fn flush(&self) {
        if let Ok(logger) = super::try_global() {
            logger.flush();
        }
    }
}

/// 将 `log::debug!/info!/warn!/error!` 接入全局日志器，每个进程只能注册一次
pub fn bridge_log_crate() -> Result<()> {
    log::set_logger(&BRIDGE).map_err(|e: SetLoggerError| LoggerError::BridgeInstall {
        reason: e.to_string(),
    })?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
