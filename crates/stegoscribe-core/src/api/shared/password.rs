use std::fmt::{self, Debug, Formatter};

/// A password that never shows up in logs or debug output.
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    /// the password, if one was given and it is not empty
    pub fn secret(&self) -> Option<&str> {
        self.0.as_deref().filter(|p| !p.is_empty())
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_ref() {
        let password: Password = None.into();
        assert_eq!(password.as_ref(), &None);

        let password: Password = "password".into();
        assert_eq!(password.as_ref(), &Some("password".to_string()));
    }

    #[test]
    fn test_debug() {
        let password: Password = None.into();
        assert_eq!(format!("{:?}", password), "Password(None)");

        let password: Password = "password".into();
        assert_eq!(format!("{:?}", password), "Password(********)");
    }

    #[test]
    fn empty_password_is_no_secret() {
        assert_eq!(Password::from("").secret(), None);
        assert_eq!(Password::default().secret(), None);
        assert_eq!(Password::from("Secret42").secret(), Some("Secret42"));
    }
}
