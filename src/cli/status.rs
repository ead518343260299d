use app_common::config_error;
use app_common::constants::error_message_for;
use app_common::error::Result;

/// 输出状态码对应的错误信息
pub fn handle_status(code: u16) -> Result<()> {
    match error_message_for(code) {
        Some(message) => {
            println!("{code}\t{message}");
            Ok(())
        }
        None => Err(config_error!(InvalidValue {
            field: "status".to_string(),
            value: code.to_string(),
            reason: "No error message is defined for this status code".to_string(),
        })),
    }
}
