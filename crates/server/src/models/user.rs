//! User domain type.

/// A registered shopper.
///
/// Passwords are stored in plaintext and compared exactly. The fixture
/// exists to exercise client flows, not to protect real accounts.
#[derive(Debug, Clone)]
pub struct User {
    /// Email address, unique across the user table.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Current bearer token. Reissued on register and on every login;
    /// lookups against a stale token simply stop matching.
    pub token: String,
}
