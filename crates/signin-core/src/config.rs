//! Build-time configuration for the login flow.
//!
//! Nothing here is read from disk or the environment. The accepted credential
//! pair and both delays are fixed constants; `LoginConfig` only bundles the
//! delays so the view model and the front end agree on them.

use std::time::Duration;

/// The only email address the simulated backend accepts.
pub const ACCEPTED_EMAIL: &str = "kumar@combine.com";

/// The only password the simulated backend accepts.
pub const ACCEPTED_PASSWORD: &str = "12345";

/// Minimum password length, counted in user-perceived characters.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Timing of the simulated login round-trip and the error indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginConfig {
    /// Delay between `submit_login` and the credential check.
    pub login_delay: Duration,
    /// How long the error indicator stays visible after a failed attempt.
    pub error_auto_hide: Duration,
}

impl LoginConfig {
    const LOGIN_DELAY: Duration = Duration::from_secs(3);
    const ERROR_AUTO_HIDE: Duration = Duration::from_secs(2);
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_delay: Self::LOGIN_DELAY,
            error_auto_hide: Self::ERROR_AUTO_HIDE,
        }
    }
}

/// Returns true if the pair matches the accepted credentials exactly.
///
/// Case-sensitive, no trimming.
pub fn is_accepted(email: &str, password: &str) -> bool {
    email == ACCEPTED_EMAIL && password == ACCEPTED_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = LoginConfig::default();
        assert_eq!(config.login_delay, Duration::from_secs(3));
        assert_eq!(config.error_auto_hide, Duration::from_secs(2));
    }

    #[test]
    fn test_accepted_pair_is_exact() {
        assert!(is_accepted("kumar@combine.com", "12345"));
        assert!(!is_accepted("Kumar@combine.com", "12345"));
        assert!(!is_accepted("kumar@combine.com ", "12345"));
        assert!(!is_accepted("kumar@combine.com", " 12345"));
        assert!(!is_accepted("kumar@combine.com", "123456"));
    }
}
