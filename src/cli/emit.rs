use app_common::config::LoggerConfig;
use app_common::config_error;
use app_common::error::Result;
use app_common::logger::{self, Field, Level, field};
use log::debug;
use serde_json::Value;

/// 解析 `key=value` 形式的字段；值能按 JSON 解析时保留类型，否则视为字符串
pub fn parse_field(raw: &str) -> Result<Field> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(config_error!(InvalidValue {
            field: "--field".to_string(),
            value: raw.to_string(),
            reason: "Expected key=value".to_string(),
        }));
    };
    if key.trim().is_empty() {
        return Err(config_error!(InvalidValue {
            field: "--field".to_string(),
            value: raw.to_string(),
            reason: "Field key cannot be empty".to_string(),
        }));
    }
    let value = serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::from(value));
    Ok(Field::new(key.trim(), value))
}

/// 初始化全局日志器并写出一条日志
///
/// `default_init` 为 true 时忽略配置，直接使用 `init_logger()` 的固定设置。
pub fn handle_emit(
    cfg: &LoggerConfig,
    level: Level,
    message: &str,
    raw_fields: &[String],
    default_init: bool,
    verbose: bool,
) -> Result<()> {
    if default_init {
        logger::init_logger();
    } else {
        logger::init_logger_with(cfg)?;
    }
    logger::bridge_log_crate()?;
    if verbose {
        let handle = logger::global();
        debug!(
            "Logger initialized - level: {}, encoder: {:?}",
            handle.min_level(),
            handle.encoder()
        );
    }

    let mut fields = Vec::with_capacity(raw_fields.len());
    for raw in raw_fields {
        match parse_field(raw) {
            Ok(f) => fields.push(f),
            Err(e) => {
                logger::error("invalid field", &[Field::error(&e), field("raw", raw)]);
                return Err(e);
            }
        }
    }

    match level {
        Level::Debug => logger::debug(message, &fields),
        Level::Info => logger::info(message, &fields),
        Level::Warn => logger::warn(message, &fields),
        Level::Error => logger::error(message, &fields),
        Level::Panic => logger::panic(message, &fields),
        Level::Fatal => logger::fatal(message, &fields),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_typed_values() {
        assert_eq!(parse_field("id=42").unwrap().value, json!(42));
        assert_eq!(parse_field("ok=true").unwrap().value, json!(true));
        assert_eq!(parse_field("name=bob").unwrap().value, json!("bob"));
        assert_eq!(parse_field("q=a=b").unwrap().value, json!("a=b"));
    }

    #[test]
    fn test_parse_field_empty_value() {
        let f = parse_field("empty=").unwrap();
        assert_eq!(f.key, "empty");
        assert_eq!(f.value, json!(""));
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=5").is_err());
    }
}
