//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs, ctx: &AppContext) -> Result<()> {
    let was_logged_in = ctx.session().is_authenticated();
    ctx.session().logout();

    if was_logged_in {
        output::success("Signed out");
    } else {
        output::success("No active session");
    }

    Ok(())
}
