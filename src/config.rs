use crate::config_error;
use crate::constants::LOG_LEVELS;
use crate::error::{ConfigError, Error, Result};
use crate::logger::{ColorMode, ConsoleEncoder, Level, TimeFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 配置文件顶层结构，对应 `[logger]` 表
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    logger: LoggerConfig,
}

/// 控制台日志器配置
///
/// 默认值与 `init_logger()` 的固定行为一致：debug 级别、info 绿色/error 红色的级别标签、
/// ISO-8601 时间、输出调用位置。`color_mode = "capital"` 加 `time_format = "epoch"`
/// 对应 [`ConsoleEncoder::capital_color`] 预设。
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    /// 最低输出级别
    #[serde(default = "default_level")]
    pub level: String,
    /// 是否为级别标签着色；为 false 时忽略 `color_mode`
    #[serde(default = "default_true")]
    pub color: bool,
    /// 着色方式：level（info 绿色、error 红色）或 capital（每个级别都着色）
    #[serde(default)]
    pub color_mode: ColorMode,
    /// 时间格式：iso8601 或 epoch
    #[serde(default)]
    pub time_format: TimeFormat,
    /// 是否输出调用位置
    #[serde(default = "default_true")]
    pub caller: bool,
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            color: true,
            color_mode: ColorMode::default(),
            time_format: TimeFormat::default(),
            caller: true,
        }
    }
}

impl LoggerConfig {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::Config(ConfigError::NotFound(path.to_path_buf())))?;
        Self::from_str(&content, path.to_path_buf())
    }

    /// 从字符串解析配置
    pub fn from_str(content: &str, path: PathBuf) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            config_error!(ParseFailed {
                path: path.clone(),
                reason: e.to_string(),
            })
        })?;

        file.logger.validate()?;

        Ok(file.logger)
    }

    /// 获取日志级别
    pub fn level(&self) -> &str {
        &self.level
    }

    /// 按配置构造控制台编码器
    pub fn encoder(&self) -> ConsoleEncoder {
        let color = if self.color {
            self.color_mode
        } else {
            ColorMode::None
        };
        ConsoleEncoder::new(color, self.time_format, self.caller)
    }

    /// 解析后的最低级别
    pub fn min_level(&self) -> Result<Level> {
        self.level.parse::<Level>().map_err(|_| {
            config_error!(InvalidLogLevel {
                level: self.level.clone(),
                valid_levels: LOG_LEVELS.iter().map(|s| (*s).to_string()).collect(),
            })
        })
    }

    /// 验证日志级别是否有效
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(config_error!(InvalidValue {
                field: "logger.level".to_string(),
                value: self.level.clone(),
                reason: "Log level cannot be empty".to_string(),
            }));
        }
        self.min_level().map(|_| ())
    }
}
