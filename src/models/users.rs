use crate::schema::users;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable, Clone, Debug)]
#[table_name = "users"]
pub struct UserData {
    pub username: String,
    pub password: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

// Column widths in the users table, in characters.
pub const USERNAME_MAX_LEN: usize = 64;
pub const PASSWORD_MAX_LEN: usize = 128;
