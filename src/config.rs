/// Name of the employee the deposit program works on.
pub const EMPLOYEE_NAME: &str = "Jorge";

/// Age of the employee the deposit program works on.
pub const EMPLOYEE_AGE: u32 = 45;

/// Balance the employee starts with.
pub const INITIAL_BALANCE: i64 = 1000;

/// Amount deposited by the deposit program.
pub const DEPOSIT_AMOUNT: i64 = 2000;

/// Text measured by the char-count program.
pub const SAMPLE_TEXT: &str = "Hello, 世界!";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
