use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account flavor chosen at registration time. Drives which dashboard the
/// marketplace UI shows; the identity API treats it as an opaque label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Creator,
    Investor,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Creator => "creator",
            UserType::Investor => "investor",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "creator" => Ok(UserType::Creator),
            "investor" => Ok(UserType::Investor),
            other => Err(format!(
                "Unknown user type '{}', expected 'creator' or 'investor'",
                other
            )),
        }
    }
}

/// The authenticated user as the rest of the application sees it.
///
/// Field names on the wire match the documents the original web client wrote
/// (`userType`), so a session stored by it round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// Credentials sent to the login endpoint
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// The backend expects the email in the username field
    pub username: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// Payload for the register endpoint
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// New-account details collected by a registration form
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// User fragment of a successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub username: String,
}

/// Successful login response body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: ApiUser,
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body returned by the identity API on non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_parses_case_insensitively() {
        assert_eq!("creator".parse::<UserType>(), Ok(UserType::Creator));
        assert_eq!("Investor".parse::<UserType>(), Ok(UserType::Investor));
        assert!("admin".parse::<UserType>().is_err());
    }

    #[test]
    fn user_serializes_with_wire_field_names() {
        let user = User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "alice".to_string(),
            user_type: UserType::Creator,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userType"], "creator");
        assert_eq!(json["name"], "alice");
    }

    #[test]
    fn login_response_tolerates_missing_id_and_token() {
        let body = r#"{"user":{"email":"a@b.com","username":"alice"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user.id, None);
        assert_eq!(response.token, None);
        assert_eq!(response.user.username, "alice");
    }
}
