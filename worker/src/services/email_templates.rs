//! Incident alert email template.
//!
//! `render()` returns an `EmailMessage` ready to pass to `EmailSender::send`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::services::email_sender::EmailMessage;

/// Context of one reported incident, stamped at pipeline start.
#[derive(Debug, Clone)]
pub struct IncidentDetails {
    pub id: Uuid,
    pub reported_at: DateTime<Utc>,
    /// Place the incident was reported at (the geocoded query)
    pub place: String,
    pub train_number: Option<String>,
    pub train_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl IncidentDetails {
    pub fn new(place: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            reported_at: Utc::now(),
            place: place.to_string(),
            train_number: None,
            train_name: None,
            origin: None,
            destination: None,
        }
    }
}

// =============================================================================
// Incident alert
// =============================================================================

pub struct IncidentAlertEmail<'a> {
    pub to: &'a str,
    pub incident: &'a IncidentDetails,
    /// Number of emergency contacts written to the log
    pub contact_count: usize,
}

impl<'a> IncidentAlertEmail<'a> {
    pub fn render(&self) -> EmailMessage {
        let incident = self.incident;

        let subject = match &incident.train_number {
            Some(number) => format!(
                "Emergency alert: train {} incident at {}",
                number, incident.place
            ),
            None => format!("Emergency alert: incident at {}", incident.place),
        };

        let mut body = String::new();
        body.push_str(&format!("Incident {}\n", incident.id));
        body.push_str(&format!(
            "Reported at: {}\n\n",
            incident.reported_at.to_rfc3339()
        ));

        if let Some(number) = &incident.train_number {
            body.push_str(&format!("Train number: {}\n", number));
        }
        if let Some(name) = &incident.train_name {
            body.push_str(&format!("Train name: {}\n", name));
        }
        if let Some(origin) = &incident.origin {
            body.push_str(&format!("Journey start: {}\n", origin));
        }
        if let Some(destination) = &incident.destination {
            body.push_str(&format!("Destination: {}\n", destination));
        }

        body.push_str(&format!("Incident location: {}\n\n", incident.place));
        body.push_str(&format!(
            "{} emergency contacts saved to the local log.\n",
            self.contact_count
        ));
        body.push_str("Immediate action required.\n");

        EmailMessage {
            to: self.to.to_string(),
            subject,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_carries_train_number_when_known() {
        let mut incident = IncidentDetails::new("Chiplun");
        incident.train_number = Some("22229".to_string());
        incident.train_name = Some("Vande Bharat Express".to_string());

        let msg = IncidentAlertEmail {
            to: "ops@example.com",
            incident: &incident,
            contact_count: 12,
        }
        .render();

        assert_eq!(msg.to, "ops@example.com");
        assert!(msg.subject.contains("train 22229"));
        assert!(msg.subject.contains("Chiplun"));
        assert!(msg.body.contains("Vande Bharat Express"));
        assert!(msg.body.contains("12 emergency contacts"));
    }

    #[test]
    fn subject_without_train_still_names_the_place() {
        let incident = IncidentDetails::new("Chiplun");

        let msg = IncidentAlertEmail {
            to: "ops@example.com",
            incident: &incident,
            contact_count: 0,
        }
        .render();

        assert_eq!(msg.subject, "Emergency alert: incident at Chiplun");
        assert!(!msg.body.contains("Train number"));
    }
}
