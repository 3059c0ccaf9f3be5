//! Book catalog listing.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Result;
use crate::http::ApiClient;
use crate::http::endpoints::{BOOKS, BooksQuery};

/// Page requested when the caller does not name one.
pub const FIRST_PAGE: u32 = 1;

/// A catalog entry. Owned by the server; this client only displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One page of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPage {
    pub items: Vec<Book>,
    pub page: u32,
}

/// Fetch a page of books, page 1 by default.
///
/// The decoded page is returned as the server sent it.
#[instrument(skip(client))]
pub async fn list_books(client: &ApiClient, page: Option<u32>) -> Result<BookPage> {
    let query = BooksQuery {
        page: page.unwrap_or(FIRST_PAGE),
    };
    debug!(page = query.page, "Listing books");
    client.get(BOOKS, &query).await
}
