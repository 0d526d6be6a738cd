// Credential handling for stored user accounts

pub mod password;
