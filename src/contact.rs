// Contact form

use crate::validation::ValidationErrors;
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must contain at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must contain at least 10 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub const ACKNOWLEDGEMENT: &str = "Message sent. We'll get back to you shortly.";

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ValidationErrors> {
        ValidationErrors::from_rules(self, &["name", "email", "message"]).into_result(|| {
            ContactMessage {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                message: self.message.trim().to_string(),
            }
        })
    }
}
