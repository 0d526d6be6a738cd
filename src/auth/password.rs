// Password hashing utilities
// Uses bcrypt so plaintext passwords are never stored

use bcrypt::{hash, BcryptError};

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
/// * `Ok(String)` - The bcrypt hash
/// * `Err(BcryptError)` - If the cost is out of range
///
/// # Example
/// ```
/// use starwars_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(bcrypt::verify("my_password", &hash).unwrap());
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}
