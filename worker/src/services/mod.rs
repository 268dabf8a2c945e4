//! Business logic services

pub mod actors;
pub mod alliance;
pub mod email_sender;
pub mod email_templates;
pub mod export;
pub mod geo;
pub mod geocoding;
pub mod nominatim;
pub mod overpass;
pub mod proximity;
pub mod relations;
pub mod risk;
