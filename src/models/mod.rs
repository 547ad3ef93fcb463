pub mod api;

use rust_decimal::Decimal;

/// Price written when the listing says the amount is negotiable
pub const NEGOTIABLE: Decimal = Decimal::NEGATIVE_ONE;

/// Price written when the listing says the amount is free
pub const FREE: Decimal = Decimal::ZERO;

/// Lightweight listing row collected from the search endpoint
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Listing {
    pub token: String,
    pub title: String,
    pub top_description_text: String,
    pub middle_description_text: String,
    pub bottom_description_text: String,
}

/// Structured detail row, written once per listing token
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct ListingDetail {
    pub token: String,
    pub title: String,
    pub region: String,
    pub meterage: Decimal,
    pub mortgage: Decimal,
    pub rent: Decimal,
    pub rooms: i32,
    pub construction_year: i32,
    pub elevator: bool,
    pub parking: bool,
    pub warehouse: bool,
}
