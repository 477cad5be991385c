//! Small cross-cutting constants.

/// Items per page everywhere a list is paginated.
pub const PAGE_SIZE: usize = 5;

/// Window width below which the sidebar collapses behind a toggle.
pub const NARROW_BREAKPOINT: f32 = 700.0;

/// Cosmetic subscription pricing shown on the subscribe screen.
pub const SUBSCRIPTION_PRICE: &str = "₦15,000";
pub const SUBSCRIPTION_PERIOD: &str = "per month";

/// How long the signup success message stays up before routing to login.
pub const SIGNUP_REDIRECT_MS: u64 = 1500;

/// How long the "Paid" confirmation stays up before the modal closes.
pub const PAID_CONFIRMATION_MS: u64 = 3500;
