//! Account command handlers

use crate::api::Transport;
use crate::cli::{AccountCmd, CommandContext};
use crate::error::Result;
use crate::output::{self, AccountDisplay, BalanceDisplay};

pub async fn run(transport: &Transport, cmd: &AccountCmd, ctx: &CommandContext) -> Result<()> {
    match cmd {
        AccountCmd::Get => {
            let account = transport.get_account().await?;
            output::print(&AccountDisplay(account), &ctx.display)
        }
        AccountCmd::Balance => {
            let balance = transport.get_balance().await?;
            output::print(&BalanceDisplay(balance), &ctx.display)
        }
    }
}
