// ABOUTME: Expected Basic auth credentials loaded once at startup from a JSON side file.
// ABOUTME: Keys are capitalized (Username/Password) to stay compatible with the existing file format.

use serde::{Deserialize, Serialize};

/// The username/password pair the server checks Basic auth requests against.
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_parse_capitalized_keys() {
        let creds: Credentials =
            serde_json::from_str(r#"{"Username":"alice","Password":"secret"}"#).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn credentials_reject_lowercase_keys() {
        let result =
            serde_json::from_str::<Credentials>(r#"{"username":"alice","password":"secret"}"#);
        assert!(result.is_err());
    }
}
