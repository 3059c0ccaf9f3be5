//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use lumina::account;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, ctx: &AppContext) -> Result<()> {
    ctx.require_login()?;

    let profile = account::me(ctx.client())
        .await
        .map_err(|e| output::failure(e, "Failed to load profile"))?;

    output::profile(&profile);

    Ok(())
}
