use std::env;

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    /// Bcrypt work factor. Defaults to 10.
    pub cost: u32,
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        Self {
            cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { cost: 10 }
    }
}
