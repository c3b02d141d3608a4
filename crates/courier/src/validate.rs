//! Input validation helpers.
//!
//! These run in the UI-facing layer before payloads reach the facades; the
//! core engines themselves do not re-validate (a well-formed payload is the
//! caller's responsibility).

/// `local@domain` where domain contains a dot and no part is empty or
/// contains whitespace.
pub fn email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) || local.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    for part in [host, tld] {
        if part.is_empty() || part.contains(char::is_whitespace) || part.contains('@') {
            return false;
        }
    }
    true
}

/// Exactly ten digits.
pub fn phone(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// At least six characters.
pub fn password(value: &str) -> bool {
    value.len() >= 6
}

/// Exactly four digits.
pub fn otp(value: &str) -> bool {
    value.len() == 4 && value.chars().all(|c| c.is_ascii_digit())
}

/// At least ten characters after trimming.
pub fn address(value: &str) -> bool {
    value.trim().len() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("admin@test.com"));
        assert!(email("a.b+c@mail.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!email("admin"));
        assert!(!email("admin@"));
        assert!(!email("@test.com"));
        assert!(!email("admin@test"));
        assert!(!email("ad min@test.com"));
        assert!(!email("admin@te st.com"));
    }

    #[test]
    fn phone_wants_ten_digits() {
        assert!(phone("9876543210"));
        assert!(!phone("987654321"));
        assert!(!phone("98765432101"));
        assert!(!phone("987654321x"));
    }

    #[test]
    fn otp_wants_four_digits() {
        assert!(otp("1234"));
        assert!(!otp("123"));
        assert!(!otp("12a4"));
    }

    #[test]
    fn address_wants_some_substance() {
        assert!(address("123 Main St, Springfield"));
        assert!(!address("   short   "));
    }

    #[test]
    fn password_wants_six_chars() {
        assert!(password("password123"));
        assert!(!password("pass"));
    }
}
