use serde::{Deserialize, Serialize};

/// What the accounts service actually sends back for a user lookup. The
/// upstream serializes its whole entity, stored password hash included.
#[derive(Debug, Clone, Deserialize)]
pub struct UserWire {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<RoleWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleWire {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// The user as the gateway exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<UserWire> for UserRecord {
    /// Total field-by-field mapping; the wire password hash is dropped here
    /// and never leaves the gateway.
    fn from(wire: UserWire) -> Self {
        UserRecord {
            id: wire.id,
            username: wire.username,
            email: wire.email,
            role: wire.role.map(|r| r.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_drops_password_hash() {
        let wire: UserWire = serde_json::from_str(
            r#"{"id":3,"username":"ada","email":"ada@example.com",
                "password":"$2a$10$abcdefghijklmnopqrstuv",
                "role":{"id":1,"name":"ROLE_USER"}}"#,
        )
        .unwrap();
        let record = UserRecord::from(wire);
        assert_eq!(record.id, 3);
        assert_eq!(record.role.as_deref(), Some("ROLE_USER"));
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2a$"));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let wire: UserWire = serde_json::from_str(r#"{"id":9,"username":"bob"}"#).unwrap();
        let record = UserRecord::from(wire);
        assert_eq!(record.username, "bob");
        assert!(record.email.is_none());
        assert!(record.role.is_none());
    }
}
