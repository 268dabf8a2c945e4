//! Nearby emergency amenity pipeline
//!
//! place name → coordinates → concurrent amenity queries → contact log CSV,
//! plus an alert email when a recipient is configured.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::services::email_sender::create_email_sender;
use crate::services::email_templates::{IncidentAlertEmail, IncidentDetails};
use crate::services::export;
use crate::services::geocoding;
use crate::services::overpass::OverpassClient;
use crate::services::proximity;

pub struct NearbyArgs {
    pub place: String,
    pub country: Option<String>,
    pub radius_m: u32,
    pub out: String,
    pub train_number: Option<String>,
    pub train_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

pub async fn run(config: &Config, args: NearbyArgs) -> Result<()> {
    let geocoder = geocoding::create_geocoder(&config.geocoder_backend, &config.nominatim_url);

    let resolved = geocoder
        .resolve(&args.place, args.country.as_deref())
        .await
        .context("geocoding failed")?;

    let Some(resolved) = resolved else {
        bail!("no match for '{}', check the place name", args.place);
    };

    info!(
        place = %resolved.display_name,
        lat = resolved.coordinates.lat,
        lng = resolved.coordinates.lng,
        "Resolved incident location"
    );

    let index = OverpassClient::new(&config.overpass_url);
    let contacts = proximity::gather_contacts(&index, resolved.coordinates, args.radius_m).await;

    if contacts.is_empty() {
        warn!("No emergency amenities found within {} m", args.radius_m);
    }

    export::write_contacts_csv(Path::new(&args.out), &contacts)?;
    info!("Saved {} contacts to {}", contacts.len(), args.out);

    println!(
        "{} emergency contacts around {} (radius {} m):",
        contacts.len(),
        args.place,
        args.radius_m
    );
    for record in &contacts {
        println!(
            "  {:<40} {:<18} {:<8} {:>8.2} km",
            record.name,
            record.phone,
            record.amenity.as_str(),
            record.distance_km
        );
    }
    println!("Contact log saved to {}", args.out);

    if let Some(recipient) = &config.alert_recipient {
        let mut incident = IncidentDetails::new(&args.place);
        incident.train_number = args.train_number;
        incident.train_name = args.train_name;
        incident.origin = args.origin;
        incident.destination = args.destination;

        let message = IncidentAlertEmail {
            to: recipient,
            incident: &incident,
            contact_count: contacts.len(),
        }
        .render();

        create_email_sender()
            .send(message)
            .await
            .context("failed to send alert email")?;
        info!(to = %recipient, "Alert email dispatched");
    }

    Ok(())
}
