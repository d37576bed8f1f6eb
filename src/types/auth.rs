use crate::types::user::UserRes;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub user: UserRes,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionRes {
    pub user: UserRes,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageRes {
    pub message: String,
}
