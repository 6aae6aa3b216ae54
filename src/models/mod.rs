//! Data models for the MEDDoC directory entities.
//!
//! This module contains the data structures representing pharmacies,
//! ambulances, partners, contact messages, social links, site information,
//! and the documents library, as stored in the hosted record store.

pub mod ambulance;
pub mod document;
pub mod message;
pub mod partner;
pub mod pharmacy;
pub mod site;

pub use ambulance::{Ambulance, AmbulanceChanges, NewAmbulance};
pub use document::{DocumentFile, NewDocumentFile};
pub use message::{ContactMessage, NewContactMessage};
pub use partner::{NewPartner, Partner, PartnerChanges};
pub use pharmacy::{NewPharmacy, Pharmacy, PharmacyChanges};
pub use site::{NewSocialLink, SiteInfo, SiteInfoChanges, SocialLink};
