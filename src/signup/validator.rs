use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref USERNAME_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to create username regex");
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to create email regex");
}

pub const STRENGTH_LABELS: [&str; 5] = ["Weak", "Fair", "Good", "Strong", "Very Strong"];

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCheck {
    Valid,
    Invalid(String),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        *self == FieldCheck::Valid
    }

    fn invalid(message: &str) -> Self {
        FieldCheck::Invalid(message.to_string())
    }
}

pub fn validate_fullname(value: &str) -> FieldCheck {
    let value = value.trim();

    if value.is_empty() {
        return FieldCheck::invalid("Full name is required");
    }
    if value.chars().count() < 3 {
        return FieldCheck::invalid("Name must be at least 3 characters");
    }

    FieldCheck::Valid
}

pub fn validate_username(value: &str) -> FieldCheck {
    let value = value.trim();

    if value.is_empty() {
        return FieldCheck::invalid("Username is required");
    }
    if value.chars().count() < 4 {
        return FieldCheck::invalid("Username must be at least 4 characters");
    }
    if !USERNAME_REGEX.is_match(value) {
        return FieldCheck::invalid("Username can only contain letters, numbers, and underscores");
    }

    FieldCheck::Valid
}

pub fn validate_email(value: &str) -> FieldCheck {
    let value = value.trim();

    if value.is_empty() {
        return FieldCheck::invalid("Email is required");
    }
    if !EMAIL_REGEX.is_match(value) {
        return FieldCheck::invalid("Please enter a valid email address");
    }

    FieldCheck::Valid
}

/// 0-4 score behind the live strength meter: one point each for
/// length >= 8, an uppercase letter, a digit and a symbol.
pub fn password_strength(value: &str) -> u8 {
    let mut strength = 0;

    if value.chars().count() >= 8 {
        strength += 1;
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if value.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }

    strength
}

pub fn strength_label(strength: u8) -> &'static str {
    STRENGTH_LABELS[usize::from(strength).min(STRENGTH_LABELS.len() - 1)]
}

/// Client-side password rule: present, 8+ characters, strength >= 3.
pub fn validate_password(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::invalid("Password is required");
    }
    if value.chars().count() < 8 {
        return FieldCheck::invalid("Password must be at least 8 characters");
    }
    if password_strength(value) < 3 {
        return FieldCheck::invalid("Password should include uppercase, numbers, and symbols");
    }

    FieldCheck::Valid
}

/// Whole-form validation, per-field results plus the form-level
/// summary shown when anything fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidation {
    pub fullname: FieldCheck,
    pub username: FieldCheck,
    pub email: FieldCheck,
    pub password: FieldCheck,
    pub strength: u8,
}

impl FormValidation {
    pub fn check(fullname: &str, username: &str, email: &str, password: &str) -> Self {
        Self {
            fullname: validate_fullname(fullname),
            username: validate_username(username),
            email: validate_email(email),
            password: validate_password(password),
            strength: password_strength(password),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fullname.is_valid()
            && self.username.is_valid()
            && self.email.is_valid()
            && self.password.is_valid()
    }

    pub fn summary(&self) -> Option<&'static str> {
        if self.is_valid() {
            None
        } else {
            Some("Please fix the errors in the form")
        }
    }
}
