//! Subcommand implementations.

mod books;
mod login;
mod logout;
mod signup;
mod update_profile;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::context::AppContext;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List books in the catalog
    Books(books::BooksArgs),

    /// Create a new account
    Signup(signup::SignupArgs),

    /// Log in and keep the session token
    Login(login::LoginArgs),

    /// Forget the session token
    Logout(logout::LogoutArgs),

    /// Show the logged-in user's profile
    Whoami(whoami::WhoamiArgs),

    /// Change the logged-in user's full name
    UpdateProfile(update_profile::UpdateProfileArgs),
}

pub async fn handle(cmd: Command, ctx: &AppContext) -> Result<()> {
    match cmd {
        Command::Books(args) => books::run(args, ctx).await,
        Command::Signup(args) => signup::run(args, ctx).await,
        Command::Login(args) => login::run(args, ctx).await,
        Command::Logout(args) => logout::run(args, ctx),
        Command::Whoami(args) => whoami::run(args, ctx).await,
        Command::UpdateProfile(args) => update_profile::run(args, ctx).await,
    }
}
