use super::encoder::{Caller, ConsoleEncoder};
use super::field::Field;
use super::level::Level;
use crate::config::LoggerConfig;
use crate::error::Result;
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError};

/// panic 级别日志展开调用栈时携带的结构化载荷
#[derive(Debug, Clone, PartialEq)]
pub struct PanicEntry {
    pub message: String,
    pub fields: Vec<Field>,
}

impl fmt::Display for PanicEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 控制台日志器
///
/// 持有编码器、最低级别和加锁的输出目标。可以直接构造后以 `Arc<Logger>` 传递，
/// 也可以通过 [`super::set_global`] 安装为进程级句柄。
pub struct Logger {
    encoder: ConsoleEncoder,
    min_level: Level,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("encoder", &self.encoder)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// 默认日志器：标准输出、debug 级别、彩色标签、短调用位置
    pub fn stdout() -> Self {
        Self::with_writer(ConsoleEncoder::default(), Level::Debug, io::stdout())
    }

    /// 按配置构造写到标准输出的日志器
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_writer(
            config.encoder(),
            config.min_level()?,
            io::stdout(),
        ))
    }

    /// 使用任意输出目标构造
    pub fn with_writer<W: Write + Send + 'static>(
        encoder: ConsoleEncoder,
        min_level: Level,
        writer: W,
    ) -> Self {
        Self {
            encoder,
            min_level,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    pub fn encoder(&self) -> ConsoleEncoder {
        self.encoder
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.write_entry(Level::Debug, Some(Location::caller().into()), msg, fields);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.write_entry(Level::Info, Some(Location::caller().into()), msg, fields);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.write_entry(Level::Warn, Some(Location::caller().into()), msg, fields);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.write_entry(Level::Error, Some(Location::caller().into()), msg, fields);
    }

    /// 写出后以 [`PanicEntry`] 为载荷展开调用栈
    #[track_caller]
    pub fn panic(&self, msg: &str, fields: &[Field]) -> ! {
        self.write_entry(Level::Panic, Some(Location::caller().into()), msg, fields);
        std::panic::panic_any(PanicEntry {
            message: msg.to_string(),
            fields: fields.to_vec(),
        })
    }

    /// 写出后以状态码 1 退出进程
    #[track_caller]
    pub fn fatal(&self, msg: &str, fields: &[Field]) -> ! {
        self.write_entry(Level::Fatal, Some(Location::caller().into()), msg, fields);
        std::process::exit(1)
    }

    /// 按级别分发；panic/fatal 级别同样会展开或退出
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        match level {
            Level::Fatal => self.fatal(msg, fields),
            Level::Panic => self.panic(msg, fields),
            _ => self.write_entry(level, Some(Location::caller().into()), msg, fields),
        }
    }

    /// 渲染并写出一行，低于最低级别时跳过；写入失败时静默忽略
    pub(crate) fn write_entry(
        &self,
        level: Level,
        caller: Option<Caller<'_>>,
        msg: &str,
        fields: &[Field],
    ) {
        if !self.enabled(level) {
            return;
        }
        let line = self
            .encoder
            .encode(&Local::now(), level, caller, msg, fields);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }

    pub fn flush(&self) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.flush();
    }
}

/// 内存输出目标，可克隆共享；用于捕获日志输出
#[derive(Debug, Clone, Default)]
pub struct BufferSink(Arc<Mutex<Vec<u8>>>);

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入内容
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// 已写入内容按行拆分
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
