//! Signup command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use lumina::{NewAccount, account};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Full name shown on the profile
    #[arg(long, default_value = "")]
    pub full_name: String,

    /// Log in with the new account right away
    #[arg(long)]
    pub login: bool,
}

pub async fn run(args: SignupArgs, ctx: &AppContext) -> Result<()> {
    let new_account = NewAccount::new(args.email, args.password, args.full_name);

    eprintln!("{}", "Creating account...".dimmed());

    let result = if args.login {
        ctx.session().signup_and_login(&new_account).await
    } else {
        account::signup(ctx.client(), &new_account).await
    };
    let profile = result.map_err(|e| output::failure(e, "Signup failed"))?;

    output::success("Account created successfully");
    output::profile(&profile);

    if args.login {
        output::success("Logged in");
    } else {
        eprintln!("{}", "Run 'lumina login' to start a session.".dimmed());
    }

    Ok(())
}
