//! 控制台编码器：把一条结构化日志渲染为一行可读文本
//!
//! 行格式：`<时间>\t<级别>\t<调用位置>\t<消息>[\t<字段>]`

use super::field::Field;
use super::level::Level;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Serializer;
use serde_json::ser::Formatter;
use std::fmt::Write as _;
use std::io;

/// ISO-8601 时间格式（毫秒精度，带时区偏移）
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// 日志调用位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> Caller<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// 短格式：只保留最后一级目录和文件名
    pub fn short(&self) -> String {
        format!("{}:{}", trim_path(self.file), self.line)
    }
}

impl<'a> From<&'a std::panic::Location<'a>> for Caller<'a> {
    fn from(loc: &'a std::panic::Location<'a>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

fn trim_path(file: &str) -> &str {
    let is_sep = |c: char| c == '/' || c == '\\';
    let Some(last) = file.rfind(is_sep) else {
        return file;
    };
    match file[..last].rfind(is_sep) {
        Some(prev) => &file[prev + 1..],
        None => file,
    }
}

/// 级别标签的配色方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// info 绿色，error 红色，其余不着色
    #[default]
    Level,
    /// 每个级别都着色
    Capital,
    /// 不着色
    None,
}

/// 时间列的格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// ISO-8601，见 [`ISO8601_FORMAT`]
    #[default]
    Iso8601,
    /// Unix 纪元秒（浮点）
    Epoch,
}

/// 控制台编码器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleEncoder {
    color: ColorMode,
    time: TimeFormat,
    caller: bool,
}

impl Default for ConsoleEncoder {
    fn default() -> Self {
        Self {
            color: ColorMode::Level,
            time: TimeFormat::Iso8601,
            caller: true,
        }
    }
}

impl ConsoleEncoder {
    pub fn new(color: ColorMode, time: TimeFormat, caller: bool) -> Self {
        Self {
            color,
            time,
            caller,
        }
    }

    /// 全级别着色预设：纪元秒时间、每个级别都有颜色、短调用位置
    pub fn capital_color() -> Self {
        Self::new(ColorMode::Capital, TimeFormat::Epoch, true)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time
    }

    /// 渲染级别标签
    pub fn encode_level(&self, level: Level) -> String {
        match self.color {
            ColorMode::Level => level.colorize(level.capital_str()),
            ColorMode::Capital => level.capital_colorize(level.capital_str()),
            ColorMode::None => level.capital_str().to_string(),
        }
    }

    fn encode_time(&self, out: &mut String, time: &DateTime<Local>) {
        let _ = match self.time {
            TimeFormat::Iso8601 => write!(out, "{}", time.format(ISO8601_FORMAT)),
            TimeFormat::Epoch => write!(
                out,
                "{}.{:09}",
                time.timestamp(),
                time.timestamp_subsec_nanos()
            ),
        };
    }

    /// 渲染一整行（含结尾换行符）
    pub fn encode(
        &self,
        time: &DateTime<Local>,
        level: Level,
        caller: Option<Caller<'_>>,
        msg: &str,
        fields: &[Field],
    ) -> String {
        let mut line = String::with_capacity(64 + msg.len());
        self.encode_time(&mut line, time);
        line.push('\t');
        line.push_str(&self.encode_level(level));
        if self.caller {
            if let Some(caller) = caller {
                line.push('\t');
                line.push_str(&caller.short());
            }
        }
        line.push('\t');
        line.push_str(msg);
        if !fields.is_empty() {
            line.push('\t');
            encode_fields(&mut line, fields);
        }
        line.push('\n');
        line
    }
}

/// 逗号和冒号后带空格的 JSON 格式，嵌套层级同样适用
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(e) => format!("\"<unserializable: {e}>\""),
    }
}

/// 字段按插入顺序渲染为 JSON 对象，如 `{"id": 42, "tags": [1, 2]}`
fn encode_fields(out: &mut String, fields: &[Field]) {
    out.push('{');
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&to_spaced_json(f.key.as_str()));
        out.push_str(": ");
        out.push_str(&to_spaced_json(&f.value));
    }
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::field::field;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
    }

    #[test]
    fn test_short_caller() {
        assert_eq!(Caller::new("src/logger/mod.rs", 12).short(), "logger/mod.rs:12");
        assert_eq!(Caller::new("/a/b/c/main.rs", 3).short(), "c/main.rs:3");
        assert_eq!(Caller::new("src/main.rs", 1).short(), "src/main.rs:1");
        assert_eq!(Caller::new("main.rs", 1).short(), "main.rs:1");
        assert_eq!(Caller::new(r"src\cli\emit.rs", 7).short(), r"cli\emit.rs:7");
    }

    #[test]
    fn test_encode_layout() {
        let enc = ConsoleEncoder::default();
        let line = enc.encode(
            &fixed_time(),
            Level::Info,
            Some(Caller::new("src/app/user.rs", 40)),
            "user created",
            &[field("id", 42)],
        );
        let cols: Vec<&str> = line.trim_end().split('\t').collect();
        assert_eq!(cols.len(), 5);
        assert!(cols[0].starts_with("2024-05-06T07:08:09.000"));
        assert_eq!(cols[1], "\x1b[32mINFO\x1b[0m");
        assert_eq!(cols[2], "app/user.rs:40");
        assert_eq!(cols[3], "user created");
        assert_eq!(cols[4], "{\"id\": 42}");
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_encode_without_fields() {
        let enc = ConsoleEncoder::default();
        let line = enc.encode(&fixed_time(), Level::Warn, None, "low disk", &[]);
        assert!(line.ends_with("\tWARN\tlow disk\n"));
    }

    #[test]
    fn test_encode_plain_and_no_caller() {
        let enc = ConsoleEncoder::new(ColorMode::None, TimeFormat::Iso8601, false);
        let line = enc.encode(
            &fixed_time(),
            Level::Error,
            Some(Caller::new("src/x.rs", 1)),
            "boom",
            &[field("a", "x"), field("b", true)],
        );
        assert!(!line.contains('\x1b'));
        assert!(!line.contains("src/x.rs"));
        assert!(line.ends_with("\tERROR\tboom\t{\"a\": \"x\", \"b\": true}\n"));
    }

    #[test]
    fn test_nested_values_are_spaced() {
        let enc = ConsoleEncoder::default();
        let line = enc.encode(
            &fixed_time(),
            Level::Debug,
            None,
            "nested",
            &[field("u", serde_json::json!({"a": 1, "b": [1, 2]}))],
        );
        assert!(line.ends_with("\tnested\t{\"u\": {\"a\": 1, \"b\": [1, 2]}}\n"));
    }

    #[test]
    fn test_key_is_escaped() {
        let enc = ConsoleEncoder::default();
        let line = enc.encode(&fixed_time(), Level::Debug, None, "m", &[field("a\"b", 1)]);
        assert!(line.ends_with("{\"a\\\"b\": 1}\n"));
    }

    #[test]
    fn test_capital_color_preset() {
        let enc = ConsoleEncoder::capital_color();
        assert_eq!(enc.color_mode(), ColorMode::Capital);
        assert_eq!(enc.time_format(), TimeFormat::Epoch);

        let expected = [
            (Level::Debug, "\x1b[35mDEBUG\x1b[0m"),
            (Level::Info, "\x1b[34mINFO\x1b[0m"),
            (Level::Warn, "\x1b[33mWARN\x1b[0m"),
            (Level::Error, "\x1b[31mERROR\x1b[0m"),
            (Level::Panic, "\x1b[31mPANIC\x1b[0m"),
            (Level::Fatal, "\x1b[31mFATAL\x1b[0m"),
        ];
        for (level, label) in expected {
            assert_eq!(enc.encode_level(level), label);
        }

        let time = fixed_time();
        let line = enc.encode(
            &time,
            Level::Warn,
            Some(Caller::new("src/a/b.rs", 9)),
            "m",
            &[],
        );
        assert_eq!(
            line,
            format!("{}.000000000\t\x1b[33mWARN\x1b[0m\ta/b.rs:9\tm\n", time.timestamp())
        );
    }
}
