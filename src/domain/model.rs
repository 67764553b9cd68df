use std::fmt;

/// Username and password read from the environment file.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Form fields in the order the portal expects them.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    AlreadyLoggedIn,
    Failure(String),
    Unknown,
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginOutcome::Success => write!(f, "success"),
            LoginOutcome::AlreadyLoggedIn => write!(f, "already logged in"),
            LoginOutcome::Failure(reason) => write!(f, "failure ({})", reason),
            LoginOutcome::Unknown => write!(f, "unknown"),
        }
    }
}
