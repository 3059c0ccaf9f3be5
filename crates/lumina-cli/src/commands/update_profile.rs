//! Update profile command implementation.

use anyhow::Result;
use clap::Args;

use lumina::{ProfileUpdate, account};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    /// New full name
    #[arg(long)]
    pub full_name: String,
}

pub async fn run(args: UpdateProfileArgs, ctx: &AppContext) -> Result<()> {
    ctx.require_login()?;

    let profile = account::update_me(ctx.client(), &ProfileUpdate::full_name(args.full_name))
        .await
        .map_err(|e| output::failure(e, "Update failed"))?;

    output::success("Profile updated");
    output::profile(&profile);

    Ok(())
}
