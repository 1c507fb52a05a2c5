//! Database schema definitions.
//!
//! The catalog is a single table. `id` autoincrements and is never reused;
//! `name` carries the uniqueness constraint the insert operation relies on.

/// DDL for the `cafes` table. Idempotent; run on every startup.
pub const CREATE_CAFES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS cafes (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL UNIQUE,
    map_url        TEXT NOT NULL,
    img_url        TEXT NOT NULL,
    location       TEXT NOT NULL,
    seats          TEXT NOT NULL,
    has_toilet     INTEGER NOT NULL,
    has_wifi       INTEGER NOT NULL,
    has_sockets    INTEGER NOT NULL,
    can_take_calls INTEGER NOT NULL,
    coffee_price   TEXT
)
";

/// Column list shared by every SELECT, in declaration order.
pub const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
                                has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";
