//! HTML documents for the back-office pages.
//!
//! Pages are assembled as plain strings around a shared shell. Every
//! dynamic value passes through [`escape`] on its way into the markup;
//! remote data is never trusted to be HTML-safe.

use crate::application::listing::{ListData, ListState};

use super::rows::TableRow;

/// The resource pages linked from the index, in display order.
pub const RESOURCE_LINKS: &[(&str, &str)] = &[
    ("Products", "/products"),
    ("Users", "/users"),
    ("Categories", "/categories"),
    ("Adverts", "/adverts"),
    ("Shops", "/shops"),
    ("Reservations", "/reservations"),
];

/// Escapes a value for use in HTML text and attribute positions.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps a body in the shared page shell.
fn document(title: &str, body: &str) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{} - Shopdesk</title>\n", escape(title)));
    page.push_str("<style>\n");
    page.push_str("body { font-family: sans-serif; margin: 2rem; }\n");
    page.push_str("table { border-collapse: collapse; }\n");
    page.push_str("th, td { border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }\n");
    page.push_str(".error { color: #a00; }\n");
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

fn table<T: TableRow>(data: &ListData<T>) -> String {
    let mut markup = String::from("<table>\n<thead>\n<tr>");
    for column in T::columns() {
        markup.push_str(&format!("<th>{}</th>", escape(column)));
    }
    markup.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &data.content {
        markup.push_str("<tr>");
        for cell in row.cells() {
            markup.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        markup.push_str("</tr>\n");
    }

    markup.push_str("</tbody>\n</table>\n");
    markup
}

fn pagination<T>(path: &str, data: &ListData<T>) -> String {
    let mut nav = String::from("<nav>\n");
    if data.page > 1 {
        nav.push_str(&format!(
            "<a href=\"{}?page={}&amp;per_page={}\">Previous</a>\n",
            escape(path),
            data.page - 1,
            data.per_page
        ));
    }
    if !data.last {
        nav.push_str(&format!(
            "<a href=\"{}?page={}&amp;per_page={}\">Next</a>\n",
            escape(path),
            data.page + 1,
            data.per_page
        ));
    }
    nav.push_str("</nav>\n");
    nav
}

/// Renders one listing page: the table on success, an error banner on
/// failure. An empty page renders its headers and no rows.
pub fn listing_document<T: TableRow>(title: &str, path: &str, state: &ListState<T>) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    body.push_str("<p><a href=\"/\">Back to overview</a></p>\n");

    match state {
        ListState::Loaded(data) => {
            body.push_str(&table(data));
            if data.content.is_empty() {
                body.push_str("<p>No records to display.</p>\n");
            } else {
                body.push_str(&format!(
                    "<p>Page {} of {} ({} total)</p>\n",
                    data.page, data.total_pages, data.total_elements
                ));
            }
            body.push_str(&pagination(path, data));
        }
        ListState::Failed { message } => {
            body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
        }
    }

    document(title, &body)
}

/// Renders the sign-in form, with an error banner when the previous
/// attempt was rejected.
pub fn sign_in_document(sign_in_path: &str, error: Option<&str>) -> String {
    let mut body = String::from("<h1>Sign in</h1>\n");

    if let Some(message) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n",
        escape(sign_in_path)
    ));
    body.push_str("<p><label>Email <input type=\"email\" name=\"email\" required></label></p>\n");
    body.push_str(
        "<p><label>Password <input type=\"password\" name=\"password\" required></label></p>\n",
    );
    body.push_str("<p><button type=\"submit\">Sign in</button></p>\n");
    body.push_str("</form>\n");

    document("Sign in", &body)
}

/// Renders the landing page: links to every resource listing and the
/// sign-out control.
pub fn index_document() -> String {
    let mut body = String::from("<h1>Shopdesk</h1>\n<ul>\n");
    for (label, path) in RESOURCE_LINKS {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(path),
            escape(label)
        ));
    }
    body.push_str("</ul>\n");
    body.push_str("<form method=\"post\" action=\"/sign-out\">\n");
    body.push_str("<button type=\"submit\">Sign out</button>\n");
    body.push_str("</form>\n");

    document("Overview", &body)
}
