//! Table rendering for the catalog read models.
//!
//! Each listed resource describes its own columns and how one record maps
//! onto them. Cell values are plain text; the document builder escapes
//! them before they reach HTML.

use crate::domain::catalog::{Advert, Category, Product, Reservation, Shop, User};

/// A record that can be rendered as one row of a listing table.
pub trait TableRow {
    /// Column headers, in render order.
    fn columns() -> &'static [&'static str];

    /// One plain-text cell per column, in the same order.
    fn cells(&self) -> Vec<String>;
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn timestamp(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

impl TableRow for Product {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "SKU", "Price", "Stock", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.sku.clone(),
            format!("{:.2}", self.price),
            self.stock.to_string(),
            yes_no(self.active),
        ]
    }
}

impl TableRow for User {
    fn columns() -> &'static [&'static str] {
        &["ID", "Email", "Name", "Role", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.email.clone(),
            self.name.clone().unwrap_or_default(),
            self.role.clone(),
            yes_no(self.active),
        ]
    }
}

impl TableRow for Category {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "Slug", "Products"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            self.product_count.to_string(),
        ]
    }
}

impl TableRow for Advert {
    fn columns() -> &'static [&'static str] {
        &["ID", "Title", "Product", "Starts", "Ends", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.product_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "shop-wide".to_string()),
            timestamp(&self.starts_at),
            timestamp(&self.ends_at),
            yes_no(self.active),
        ]
    }
}

impl TableRow for Shop {
    fn columns() -> &'static [&'static str] {
        &["ID", "Name", "City", "Owner"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.city.clone(),
            self.owner_email.clone(),
        ]
    }
}

impl TableRow for Reservation {
    fn columns() -> &'static [&'static str] {
        &["ID", "Product", "Quantity", "Status", "Expires"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.product_id.to_string(),
            self.quantity.to_string(),
            self.status.as_str().to_string(),
            timestamp(&self.expires_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn every_row_type_fills_all_its_columns() {
        let product = Product {
            id: 1,
            name: "Anvil".to_string(),
            sku: "SKU-0001".to_string(),
            price: 12.5,
            stock: 4,
            active: true,
        };
        assert_eq!(product.cells().len(), Product::columns().len());

        let advert = Advert {
            id: 2,
            title: "Spring sale".to_string(),
            product_id: None,
            starts_at: chrono::Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            ends_at: chrono::Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap(),
            active: false,
        };
        assert_eq!(advert.cells().len(), Advert::columns().len());
        assert_eq!(advert.cells()[2], "shop-wide");
        assert_eq!(advert.cells()[5], "no");
    }

    #[test]
    fn prices_render_with_two_decimals() {
        let product = Product {
            id: 1,
            name: "Anvil".to_string(),
            sku: "SKU-0001".to_string(),
            price: 9.0,
            stock: 0,
            active: true,
        };
        assert_eq!(product.cells()[3], "9.00");
    }

    #[test]
    fn missing_user_name_renders_as_an_empty_cell() {
        let user = User {
            id: 3,
            email: "ops@example.com".to_string(),
            name: None,
            role: "admin".to_string(),
            active: true,
        };
        assert_eq!(user.cells()[2], "");
    }
}
