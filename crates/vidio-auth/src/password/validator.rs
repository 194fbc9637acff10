//! Password policy enforcement for new passwords.

use vidio_core::config::AuthConfig;

/// Account attributes a password must not be guessable from.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAttributes<'a> {
    /// Chosen username.
    pub username: &'a str,
    /// Given name.
    pub first_name: &'a str,
    /// Family name.
    pub last_name: &'a str,
    /// Email address.
    pub email: &'a str,
}

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns every violated rule, so the form can show them together.
    /// An empty vector means the password is acceptable.
    pub fn validate(&self, password: &str, user: UserAttributes<'_>) -> Vec<String> {
        let mut problems = Vec::new();

        if password.chars().count() < self.min_length {
            problems.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }

        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            problems.push("This password is entirely numeric.".to_string());
        }

        let lowered = password.to_lowercase();
        let similar = [user.username, user.first_name, user.last_name]
            .into_iter()
            .chain(user.email.split('@').next())
            .filter(|attr| attr.chars().count() >= 3)
            .any(|attr| lowered.contains(&attr.to_lowercase()));
        if similar {
            problems.push("The password is too similar to your personal information.".to_string());
        }

        let inputs: Vec<&str> = [user.username, user.first_name, user.last_name, user.email]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let estimate = zxcvbn::zxcvbn(password, &inputs);
        if estimate.score() < zxcvbn::Score::Three {
            problems.push("This password is too common or too easy to guess.".to_string());
        }

        problems
    }
}
