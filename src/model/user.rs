//! User record type.

use serde::{Deserialize, Serialize};

use super::Record;

/// A user record.
///
/// The `id` is assigned by the store at creation time and never changes
/// afterwards; `name`, `email`, and `age` are mutable through the update
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl Record for User {
    const RESOURCE: &'static str = "User";

    fn id(&self) -> u64 {
        self.id
    }
}

/// The users the server starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: 32,
        },
        User {
            id: 2,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            age: 28,
        },
        User {
            id: 3,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            age: 45,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users_have_sequential_ids() {
        let users = seed_users();
        assert_eq!(users.len(), 3);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.id(), i as u64 + 1);
        }
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User {
            id: 1,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice Johnson");
        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["age"], 30);
    }
}
