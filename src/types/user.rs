use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub pass_hash: String,
}

/// Public view of a staff account; never exposes the password hash.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(m: entity::user::Model) -> Self {
        UserRes {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub id: Uuid,
    pub message: String,
}
