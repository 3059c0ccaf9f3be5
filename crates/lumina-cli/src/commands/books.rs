//! Books command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use lumina::books;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct BooksArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: BooksArgs, ctx: &AppContext) -> Result<()> {
    let page = books::list_books(ctx.client(), args.page)
        .await
        .map_err(|e| output::failure(e, "Failed to load books"))?;

    if args.json {
        return output::json_pretty(&page);
    }

    if page.items.is_empty() {
        eprintln!("{}", "No books found.".dimmed());
        return Ok(());
    }

    for (i, book) in page.items.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", output::book_card(book));
    }

    eprintln!();
    eprintln!("{}: {}", "Page".dimmed(), page.page);

    Ok(())
}
