//! Avatar endpoint payloads

use serde::Serialize;

use crate::domain::{ChatUser, UserIdentity};

/// Response of `GET /avatar`
#[derive(Debug, Clone, Serialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

/// Response of `GET /me`: the session user with the resolved avatar injected
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `None` when no strategy could supply a URL; clients show their placeholder
    pub avatar_url: Option<String>,
}

impl SessionUserResponse {
    pub fn new(user: &ChatUser, avatar_url: Option<String>) -> Self {
        let email = match user.email() {
            "" => None,
            email => Some(email.to_string()),
        };

        Self {
            user_id: user.user_id().to_string(),
            name: user.name().to_string(),
            email,
            avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[test]
    fn test_session_user_response_serialization() {
        let user = ChatUser::new(UserId::new("u1").unwrap()).with_name("Mat");

        let json = serde_json::to_string(&SessionUserResponse::new(&user, None)).unwrap();
        assert_eq!(json, r#"{"user_id":"u1","name":"Mat","avatar_url":null}"#);
    }

    #[test]
    fn test_session_user_response_with_avatar() {
        let user = ChatUser::new(UserId::new("u1").unwrap()).with_email("a@b.com");

        let response = SessionUserResponse::new(&user, Some("/avatars/u1.png".to_string()));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"email\":\"a@b.com\""));
        assert!(json.contains("\"avatar_url\":\"/avatars/u1.png\""));
    }
}
