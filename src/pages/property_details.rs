use super::Outcome;
use crate::api::HomeFinderApi;
use crate::components::format_price;
use crate::forms::{ContactField, ContactForm, FormErrors};
use crate::models::Property;
use crate::notice::Notice;
use std::fmt;
use tracing::{debug, error, info};

/// Full listing view with the "request information" form
#[derive(Debug)]
pub struct PropertyDetailsPage {
    id: i64,
    property: Option<Property>,
    show_contact_form: bool,
    contact: ContactForm,
    errors: FormErrors,
    notice: Option<Notice>,
}

impl PropertyDetailsPage {
    pub async fn mount(api: &dyn HomeFinderApi, id: i64) -> Self {
        let mut page = Self {
            id,
            property: None,
            show_contact_form: false,
            contact: ContactForm::default(),
            errors: FormErrors::new(),
            notice: None,
        };

        match api.get_property(id).await {
            Ok(property) => {
                debug!("Loaded property {}", property.property_id);
                page.property = Some(property);
            }
            Err(e) => {
                error!("Error fetching property {}: {}", id, e);
                page.notice = Some(Notice::error("Error loading property details"));
            }
        }
        page
    }

    pub fn property(&self) -> Option<&Property> {
        self.property.as_ref()
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn is_contact_form_open(&self) -> bool {
        self.show_contact_form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn toggle_contact_form(&mut self) {
        self.show_contact_form = !self.show_contact_form;
    }

    /// Update one input and drop the error shown for it
    pub fn change_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value);
        self.errors.remove(&field);
    }

    pub async fn submit_contact(&mut self, api: &dyn HomeFinderApi) -> Outcome {
        let property_id = self.property.as_ref().map(|p| p.property_id);

        let errors = self.contact.validate(property_id);
        if !errors.is_empty() {
            debug!("Contact form has {} errors", errors.len());
            self.errors = errors;
            return Outcome::none();
        }
        let Some(property_id) = property_id else {
            return Outcome::none();
        };

        let request = self.contact.to_request(property_id);
        let notice = match api.create_contact_request(&request).await {
            Ok(_) => {
                info!("Contact request sent for property {}", property_id);
                self.contact = ContactForm::default();
                self.show_contact_form = false;
                Notice::success("Contact request sent successfully!")
            }
            Err(e) => {
                error!("Contact request error: {}", e);
                Notice::error(
                    e.server_error()
                        .unwrap_or("Error sending contact request. Please try again."),
                )
            }
        };

        self.notice = Some(notice.clone());
        Outcome::notice(notice)
    }
}

impl fmt::Display for PropertyDetailsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(p) = &self.property else {
            if let Some(notice) = &self.notice {
                writeln!(f, "{notice}")?;
            }
            return write!(f, "Property not found");
        };

        writeln!(f, "{}  {}", p.title, format_price(p.price))?;
        writeln!(f, "📍 {}", p.location)?;
        if let Some(url) = &p.image_url {
            writeln!(f, "🖼  {url}")?;
        }
        writeln!(f)?;
        writeln!(f, "Key Features")?;
        writeln!(f, "  🛏  {} Bedrooms", p.num_bedrooms)?;
        writeln!(f, "  🛁 {} Bathrooms", p.num_bathrooms)?;
        writeln!(f, "  🚗 {} Garage Spaces", p.num_garage)?;
        writeln!(f)?;
        writeln!(f, "Description")?;
        writeln!(f, "  {}", p.description.as_deref().unwrap_or(""))?;
        writeln!(f)?;
        writeln!(f, "Contact Agent")?;
        if let Some(email) = &p.agent_email {
            writeln!(f, "  ✉  mailto:{email}")?;
        }
        if let Some(phone) = &p.agent_phone {
            writeln!(f, "  ☎  tel:{phone}")?;
        }
        write!(f, "  Request Information: homefinder property {} --contact", self.id)?;

        if self.show_contact_form {
            writeln!(f)?;
            let fields = [
                ("Name", ContactField::Name, &self.contact.name),
                ("Email", ContactField::Email, &self.contact.email),
                ("Phone", ContactField::Phone, &self.contact.phone),
                ("Message", ContactField::Message, &self.contact.message),
            ];
            for (label, field, value) in fields {
                write!(f, "\n  {label}: {value}")?;
                if let Some(error) = self.errors.get(&field) {
                    write!(f, "  ({error})")?;
                }
            }
        }

        if let Some(notice) = &self.notice {
            write!(f, "\n{notice}")?;
        }
        Ok(())
    }
}
