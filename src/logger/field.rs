use serde::Serialize;
use serde_json::Value;

/// 结构化字段：键 + JSON 值
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// 错误字段，键固定为 `error`
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new("error", err.to_string())
    }
}

/// 从任意可序列化值构造字段
///
/// 序列化失败时写入占位字符串，不中断日志调用。
pub fn field<V: Serialize>(key: impl Into<String>, value: V) -> Field {
    let value = serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));
    Field {
        key: key.into(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_numeric() {
        let f = field("id", 42);
        assert_eq!(f.key, "id");
        assert_eq!(f.value, json!(42));
    }

    #[test]
    fn test_field_struct() {
        #[derive(Serialize)]
        struct User {
            name: &'static str,
        }
        let f = field("user", User { name: "bob" });
        assert_eq!(f.value, json!({"name": "bob"}));
    }

    #[test]
    fn test_error_field() {
        let io = std::io::Error::other("disk gone");
        let f = Field::error(&io);
        assert_eq!(f.key, "error");
        assert_eq!(f.value, json!("disk gone"));
    }
}
