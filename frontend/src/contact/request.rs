/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    CompanyName,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::CompanyName,
        Field::Email,
        Field::Phone,
        Field::Message,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::CompanyName => "companyName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::CompanyName => "Company Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::CompanyName => "Your Company Name",
            Field::Email => "your.email@example.com",
            Field::Phone => "+1 234 567 8900",
            Field::Message => "Tell us how we can help you...",
        }
    }

    /// `type` attribute of the rendered input. The message is a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Field::Name | Field::CompanyName => Some("text"),
            Field::Email => Some("email"),
            Field::Phone => Some("tel"),
            Field::Message => None,
        }
    }
}

/// Lead details typed into the contact modal.
///
/// Email and phone are only checked for presence, never for format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CompanyName => &self.company_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::CompanyName => &mut self.company_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactRequest {
        ContactRequest {
            name: "Jane".to_string(),
            company_name: "Acme".to_string(),
            email: "jane@acme.com".to_string(),
            phone: "+1 555 0100".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn filled_request_is_complete() {
        assert!(jane().is_complete());
        assert!(jane().missing_fields().is_empty());
    }

    #[test]
    fn empty_fields_are_reported_in_form_order() {
        let mut request = jane();
        request.set(Field::Message, String::new());
        request.set(Field::Name, String::new());
        assert_eq!(request.missing_fields(), vec![Field::Name, Field::Message]);
        assert!(!request.is_complete());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut request = jane();
        request.set(Field::Phone, " ".to_string());
        assert!(request.is_complete());
    }

    #[test]
    fn malformed_email_is_not_rejected() {
        let mut request = jane();
        request.set(Field::Email, "not-an-email".to_string());
        assert!(request.is_complete());
    }

    #[test]
    fn set_and_clear() {
        let mut request = ContactRequest::default();
        request.set(Field::CompanyName, "Acme".to_string());
        assert_eq!(request.get(Field::CompanyName), "Acme");
        assert_eq!(request.missing_fields().len(), 4);
        request.clear();
        assert_eq!(request, ContactRequest::default());
    }
}
