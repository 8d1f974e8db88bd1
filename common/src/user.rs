use serde::{Deserialize, Serialize};

/// The identity record held by the session store. Created at login (or
/// restored from storage) and cleared at logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl User {
    /// Mock identity handed out by the social-login buttons. The id is a
    /// fresh UUID; the rest are fixed demo fields.
    pub fn demo() -> Self {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Alex Traveler".into(),
            email: "alex@example.com".into(),
            photo: "https://picsum.photos/seed/alex/100/100".into(),
            country: Some("USA".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_ids_are_unique() {
        assert_ne!(User::demo().id, User::demo().id);
    }

    #[test]
    fn test_serde_round_trip() {
        let user = User::demo();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_missing_country_deserializes() {
        let json = r#"{"id":"u1","name":"A","email":"a@b.c","photo":"p"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.country, None);
    }
}
