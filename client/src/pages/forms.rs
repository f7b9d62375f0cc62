//! Input validation shared by the auth forms.
//!
//! Errors are the exact strings the forms display.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Trim and sanity-check an email address.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(email.to_owned())
}

/// Login input: a plausible email and a non-empty password.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email).ok_or("Enter a valid email address.")?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

/// Signup input: valid email, long-enough password, matching confirmation.
pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email).ok_or("Enter a valid email address.")?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password.to_owned()))
}

/// Verification input: valid email and a six-digit code.
pub fn validate_verification(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email).ok_or("Enter a valid email address.")?;
    let code = code.trim();
    if code.len() != VERIFICATION_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code from your email.");
    }
    Ok((email, code.to_owned()))
}
