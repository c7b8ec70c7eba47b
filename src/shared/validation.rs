use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for Indonesian mobile numbers written on reports
    /// Must start with 08, 628 or +628 followed by 7-12 digits
    /// - Valid: "081234567890", "+6281234567890", "6289876543"
    /// - Invalid: "0212345678", "8123456789", "08-1234-5678"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^(\+62|62|0)8[0-9]{7,12}$").unwrap();
}
