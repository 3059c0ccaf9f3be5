//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use lumina::Credentials;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, ctx: &AppContext) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    ctx.session()
        .login(credentials)
        .await
        .map_err(|e| output::failure(e, "Login failed"))?;

    output::success("Logged in successfully");
    output::field("Email", &args.email);
    output::field("API", ctx.client().base_url().as_str());

    Ok(())
}
