/// Upper bound on slug lookups before giving up on collision resolution
pub const MAX_SLUG_ATTEMPTS: u32 = 100;

/// Upper bound for percentage discounts
pub const MAX_PERCENTAGE_DISCOUNT: i64 = 100;

/// Largest amount a `NUMERIC(10, 2)` column holds, in cents
pub const MAX_MONEY_CENTS: i64 = 9_999_999_999;

/// Decimal places stored for money amounts
pub const MONEY_SCALE: u32 = 2;
