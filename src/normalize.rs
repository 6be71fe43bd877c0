//! # Normalization Module
//!
//! Text normalization applied to every field before records enter the engine:
//! lowercasing, removal of characters that carry no matching signal, and
//! whitespace collapsing. Emails, URLs and phone separators survive the strip.

use crate::model::CompanyRecord;
use regex::Regex;

/// Field normalizer with precompiled patterns.
#[derive(Debug, Clone)]
pub struct Normalizer {
    strip: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            // Keep word characters plus the punctuation that appears in
            // emails, URLs and phone numbers.
            strip: Regex::new(r"[^\w\s@.:/-]").expect("valid strip pattern"),
            whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    /// Normalize a single field value.
    pub fn normalize_text(&self, value: &str) -> String {
        let lowered = value.to_lowercase();
        let stripped = self.strip.replace_all(&lowered, "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }

    /// Normalize every field of a record in place.
    ///
    /// The primary phone additionally loses a trailing `.0` — an artifact of
    /// numeric columns passing through a float representation upstream.
    pub fn normalize_record(&self, record: &mut CompanyRecord) {
        record.company_name = self.normalize_text(&record.company_name);
        record.company_legal_names = self.normalize_text(&record.company_legal_names);
        record.company_commercial_names = self.normalize_text(&record.company_commercial_names);
        record.short_description = self.normalize_text(&record.short_description);
        record.long_description = self.normalize_text(&record.long_description);
        record.primary_phone = self.normalize_text(&record.primary_phone);
        record.phone_numbers = self.normalize_text(&record.phone_numbers);
        record.primary_email = self.normalize_text(&record.primary_email);
        record.emails = self.normalize_text(&record.emails);
        record.website_url = self.normalize_text(&record.website_url);
        record.website_domain = self.normalize_text(&record.website_domain);
        record.facebook_url = self.normalize_text(&record.facebook_url);
        record.twitter_url = self.normalize_text(&record.twitter_url);
        record.instagram_url = self.normalize_text(&record.instagram_url);
        record.linkedin_url = self.normalize_text(&record.linkedin_url);
        record.main_city = self.normalize_text(&record.main_city);
        record.main_postcode = self.normalize_text(&record.main_postcode);
        record.main_country_code = self.normalize_text(&record.main_country_code);
        record.main_latitude = self.normalize_text(&record.main_latitude);
        record.main_longitude = self.normalize_text(&record.main_longitude);
        record.domains = self.normalize_text(&record.domains);
        record.all_domains = self.normalize_text(&record.all_domains);

        if let Some(cleaned) = record.primary_phone.strip_suffix(".0") {
            record.primary_phone = cleaned.to_string();
        }
    }

    /// Normalize a batch of records in place.
    pub fn normalize_records(&self, records: &mut [CompanyRecord]) {
        for record in records {
            self.normalize_record(record);
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
