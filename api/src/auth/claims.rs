use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id (opaque token, see `db::models::user`).
    pub sub: String,
    pub exp: usize,
    pub user_type: String,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
