//! constants.rs 的取值测试
#[cfg(test)]
mod constants_tests {
    use app_common::constants::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(HTTP_STATUS_OK, 200);
        assert_eq!(HTTP_STATUS_BAD_REQUEST, 400);
        assert_eq!(HTTP_STATUS_UNAUTHORIZED, 401);
        assert_eq!(HTTP_STATUS_INTERNAL_SERVER_ERROR, 500);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ERR_INTERNAL_SERVER_ERROR, "Internal Server Error");
        assert_eq!(ERR_BAD_REQUEST, "Bad Request");
        assert_eq!(ERR_UNAUTHORIZED, "Unauthorized");
    }

    #[test]
    fn test_error_message_lookup_uses_constants() {
        assert_eq!(
            error_message_for(HTTP_STATUS_BAD_REQUEST),
            Some(ERR_BAD_REQUEST)
        );
        assert_eq!(
            error_message_for(HTTP_STATUS_INTERNAL_SERVER_ERROR),
            Some(ERR_INTERNAL_SERVER_ERROR)
        );
        assert_eq!(error_message_for(HTTP_STATUS_OK), None);
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(COLOR_RESET, "\x1b[0m");
        assert_eq!(COLOR_RED, "\x1b[31m");
        assert_eq!(COLOR_GREEN, "\x1b[32m");
    }

    #[test]
    fn test_log_levels_exact_set() {
        let expected = vec!["debug", "info", "warn", "error", "panic", "fatal"];
        assert_eq!(LOG_LEVELS.to_vec(), expected);
    }
}
