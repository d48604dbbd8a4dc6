//! Account registration and credential checks over the users sheet.

use crate::{RecordStore, Result as SheetsResult, SheetsApi};

use ed_auth::{encode_password, verify_password};
use ed_core::UserAccount;

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

/// Sheet holding one credential row per registration: email, encoded
/// password, user id.
pub const USERS_SHEET: &str = "users";

const USERS_SCAN_RANGE: &str = "users!A:C";
const USERS_APPEND_RANGE: &str = "users!A1";

/// Outcome of a credential check. The first row matching the email decides,
/// even when a later row carries the same email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { user_id: String },
    UnknownEmail,
    WrongPassword,
}

pub struct UserDirectory {
    sheets: Arc<dyn SheetsApi>,
}

impl UserDirectory {
    pub fn new(sheets: Arc<dyn SheetsApi>) -> Self {
        Self { sheets }
    }

    /// User id for an email, if registered. First match wins.
    pub async fn find_user_id(&self, email: &str) -> SheetsResult<Option<String>> {
        let rows = self.sheets.get_values(USERS_SCAN_RANGE).await?;

        Ok(rows
            .iter()
            .filter_map(|row| UserAccount::from_row(row))
            .find(|account| account.email == email)
            .map(|account| account.user_id))
    }

    /// Register a new account: generate the user id, append the credential
    /// row, and provision the user's record sheet with its header.
    ///
    /// Nothing checks for an existing registration of the same email; the
    /// credential scan is first-match-wins over duplicates.
    pub async fn create_user(&self, email: &str, password: &str) -> SheetsResult<String> {
        let user_id = Uuid::new_v4().to_string();
        debug!("generated user id {} for '{}'", user_id, email);

        let account = UserAccount {
            email: email.to_string(),
            password: encode_password(password),
            user_id: user_id.clone(),
        };
        self.sheets
            .append_values(USERS_APPEND_RANGE, vec![account.to_row()])
            .await?;

        RecordStore::new(self.sheets.clone())
            .provision(&user_id)
            .await?;

        info!("registered '{}', record sheet '{}'", email, user_id);
        Ok(user_id)
    }

    /// Linear scan of the users sheet; the first email match determines
    /// accept or reject.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> SheetsResult<LoginOutcome> {
        let rows = self.sheets.get_values(USERS_SCAN_RANGE).await?;

        for row in &rows {
            let Some(account) = UserAccount::from_row(row) else {
                continue;
            };
            if account.email != email {
                continue;
            }

            return Ok(if verify_password(password, &account.password) {
                debug!("login accepted for '{}'", email);
                LoginOutcome::Success {
                    user_id: account.user_id,
                }
            } else {
                debug!("login rejected for '{}': password mismatch", email);
                LoginOutcome::WrongPassword
            });
        }

        debug!("login rejected: no account for '{}'", email);
        Ok(LoginOutcome::UnknownEmail)
    }
}
