use crate::domain::model::LoginOutcome;

pub const FAILED_LOGIN_KEYWORD: &str = "RADIUS server";
pub const ALREADY_LOGGED_IN_KEYWORD: &str = "MAC Address";
pub const SUCCESS_LOGIN_KEYWORD: &str = "Anda sudah berhasil login";

pub const CREDENTIALS_MISMATCH: &str = "credentials mismatch probable";

/// Classifies a portal response body. First match wins, in the order
/// failure, already logged in, success.
pub fn classify(body: &str) -> LoginOutcome {
    if body.contains(FAILED_LOGIN_KEYWORD) {
        LoginOutcome::Failure(CREDENTIALS_MISMATCH.to_string())
    } else if body.contains(ALREADY_LOGGED_IN_KEYWORD) {
        LoginOutcome::AlreadyLoggedIn
    } else if body.contains(SUCCESS_LOGIN_KEYWORD) {
        LoginOutcome::Success
    } else {
        LoginOutcome::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_error_is_failure() {
        let body = "<p>Error: RADIUS server is not responding or rejected</p>";
        assert_eq!(
            classify(body),
            LoginOutcome::Failure("credentials mismatch probable".to_string())
        );
    }

    #[test]
    fn test_mac_address_is_already_logged_in() {
        let body = "<td>MAC Address</td><td>aa:bb:cc:dd:ee:ff</td>";
        assert_eq!(classify(body), LoginOutcome::AlreadyLoggedIn);
    }

    #[test]
    fn test_success_marker() {
        let body = "<h3>Anda sudah berhasil login</h3>";
        assert_eq!(classify(body), LoginOutcome::Success);
    }

    #[test]
    fn test_failure_takes_precedence() {
        let body = "Anda sudah berhasil login ... MAC Address ... RADIUS server";
        assert!(matches!(classify(body), LoginOutcome::Failure(_)));
    }

    #[test]
    fn test_already_logged_in_beats_success() {
        let body = "Anda sudah berhasil login, MAC Address terdaftar";
        assert_eq!(classify(body), LoginOutcome::AlreadyLoggedIn);
    }

    #[test]
    fn test_unrecognised_body_is_unknown() {
        assert_eq!(classify(""), LoginOutcome::Unknown);
        assert_eq!(classify("<html>502 Bad Gateway</html>"), LoginOutcome::Unknown);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify("radius server"), LoginOutcome::Unknown);
        assert_eq!(classify("mac address"), LoginOutcome::Unknown);
    }
}
