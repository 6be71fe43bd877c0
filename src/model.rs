//! # Data Model
//!
//! Core data structures for company-record deduplication: compact record and
//! cluster identifiers and the normalized company record itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for records, assigned by input order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Compact identifier for duplicate clusters. This is the `group_id` of the
/// output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId(pub u32);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Input columns, in schema order. Every input table must carry all of them;
/// the same order is used for the output tables.
pub const COLUMNS: [&str; 22] = [
    "company_name",
    "company_legal_names",
    "company_commercial_names",
    "short_description",
    "long_description",
    "primary_phone",
    "phone_numbers",
    "primary_email",
    "emails",
    "website_url",
    "website_domain",
    "facebook_url",
    "twitter_url",
    "instagram_url",
    "linkedin_url",
    "main_city",
    "main_postcode",
    "main_country_code",
    "main_latitude",
    "main_longitude",
    "domains",
    "all_domains",
];

/// A normalized company listing.
///
/// All fields are free text; absence is represented as an empty string, never
/// as a missing value. Field values are immutable once the record enters the
/// engine — only derived data (block keys, cluster ids, completeness) is
/// computed downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: RecordId,
    pub company_name: String,
    pub company_legal_names: String,
    pub company_commercial_names: String,
    pub short_description: String,
    pub long_description: String,
    pub primary_phone: String,
    pub phone_numbers: String,
    pub primary_email: String,
    pub emails: String,
    pub website_url: String,
    pub website_domain: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub main_city: String,
    pub main_postcode: String,
    pub main_country_code: String,
    pub main_latitude: String,
    pub main_longitude: String,
    pub domains: String,
    pub all_domains: String,
}

impl CompanyRecord {
    /// Build a record from column values in schema order.
    pub fn from_columns(id: RecordId, values: [String; 22]) -> Self {
        let [company_name, company_legal_names, company_commercial_names, short_description, long_description, primary_phone, phone_numbers, primary_email, emails, website_url, website_domain, facebook_url, twitter_url, instagram_url, linkedin_url, main_city, main_postcode, main_country_code, main_latitude, main_longitude, domains, all_domains] =
            values;
        Self {
            id,
            company_name,
            company_legal_names,
            company_commercial_names,
            short_description,
            long_description,
            primary_phone,
            phone_numbers,
            primary_email,
            emails,
            website_url,
            website_domain,
            facebook_url,
            twitter_url,
            instagram_url,
            linkedin_url,
            main_city,
            main_postcode,
            main_country_code,
            main_latitude,
            main_longitude,
            domains,
            all_domains,
        }
    }

    /// Field values in schema order, matching [`COLUMNS`].
    pub fn fields(&self) -> [&str; 22] {
        [
            &self.company_name,
            &self.company_legal_names,
            &self.company_commercial_names,
            &self.short_description,
            &self.long_description,
            &self.primary_phone,
            &self.phone_numbers,
            &self.primary_email,
            &self.emails,
            &self.website_url,
            &self.website_domain,
            &self.facebook_url,
            &self.twitter_url,
            &self.instagram_url,
            &self.linkedin_url,
            &self.main_city,
            &self.main_postcode,
            &self.main_country_code,
            &self.main_latitude,
            &self.main_longitude,
            &self.domains,
            &self.all_domains,
        ]
    }

    /// Social-media URL values across the four tracked platforms.
    pub fn social_urls(&self) -> [&str; 4] {
        [
            &self.facebook_url,
            &self.twitter_url,
            &self.instagram_url,
            &self.linkedin_url,
        ]
    }

    /// Count of non-empty fields. Used to pick cluster representatives.
    pub fn completeness(&self) -> usize {
        self.fields().iter().filter(|value| !value.is_empty()).count()
    }
}
