/// Session - what the client knows about the signed-in user.
///
/// Owned by the caller and handed to the controllers that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub email: Option<String>,
}

impl Session {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    /// The email, if one is set and not blank.
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_absent() {
        assert_eq!(Session::with_email("  ").email(), None);
        assert_eq!(Session::default().email(), None);
        assert_eq!(
            Session::with_email("mentor@example.com").email(),
            Some("mentor@example.com")
        );
    }
}
