//! Server-rendered HTML for the back-office pages.

mod documents;
mod rows;

pub use documents::{
    escape, index_document, listing_document, sign_in_document, RESOURCE_LINKS,
};
pub use rows::TableRow;
