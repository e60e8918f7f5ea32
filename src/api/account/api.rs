//! Account API operations

use crate::api::transport::Transport;
use crate::error::Result;

use super::models::{Account, Balance};

impl Transport {
    /// Fetch the authenticated account
    pub async fn get_account(&self) -> Result<Account> {
        self.get_item("/account", "account").await
    }

    /// Fetch the current billing balance
    pub async fn get_balance(&self) -> Result<Balance> {
        self.get_item("/customers/my/balance", "balance").await
    }
}
