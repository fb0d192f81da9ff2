/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Prefix for the alert message keys carried in mutation response headers,
/// e.g. `cadastroApp.cidade.created`. Client toast notifications key off it.
pub const ALERT_KEY_PREFIX: &str = "cadastroApp";
