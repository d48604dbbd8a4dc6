use serde::{Deserialize, Serialize};

/// One credential row from the users sheet.
///
/// `user_id` is generated once at registration and never changes; it doubles
/// as the title of that user's record sheet. `password` holds the encoded
/// salted digest, never the raw secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub password: String,
    pub user_id: String,
}

impl UserAccount {
    /// Parse a `users!A:C` row. Rows missing any of the three columns are
    /// ignored by callers, mirroring the stored layout.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 3 {
            return None;
        }
        Some(Self {
            email: row[0].clone(),
            password: row[1].clone(),
            user_id: row[2].clone(),
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.password.clone(),
            self.user_id.clone(),
        ]
    }
}
