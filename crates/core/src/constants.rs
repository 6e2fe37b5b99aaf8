use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Monthly central overhead applied when no overhead configuration covers a date
pub const DEFAULT_MONTHLY_OVERHEAD: Decimal = dec!(4200);

/// Partner share of the profit pool, in percent
pub const DEFAULT_PARTNER_SHARE_PERCENT: Decimal = dec!(12);

/// Achievement percent at or above which a metric reads green
pub const RAG_GREEN_THRESHOLD: Decimal = dec!(100);

/// Achievement percent at or above which a metric reads amber
pub const RAG_AMBER_THRESHOLD: Decimal = dec!(85);

/// Achievement percentage points lost per unit of an escalation-type metric
pub const ESCALATION_PENALTY_PER_UNIT: Decimal = dec!(25);
