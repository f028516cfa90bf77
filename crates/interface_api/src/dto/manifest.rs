//! Manifest DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_events::{Manifest, ManifestSummary, RouteCategory};

#[derive(Debug, Deserialize)]
pub struct ManifestRequest {
    pub category: RouteCategory,
    pub resi: String,
    #[serde(default)]
    pub ship_date: Option<NaiveDate>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
    #[serde(default)]
    pub koli: u32,
    #[serde(default)]
    pub weight_kg: Decimal,
    #[serde(default)]
    pub rate: Money,
    pub total: Money,
    #[serde(default)]
    pub advance: Money,
    #[serde(default)]
    pub paid: bool,
}

impl ManifestRequest {
    pub fn apply(self, manifest: &mut Manifest) {
        manifest.category = self.category;
        manifest.resi = self.resi;
        manifest.ship_date = self.ship_date;
        manifest.sender = self.sender;
        manifest.destination = self.destination;
        manifest.receiver = self.receiver;
        manifest.received_date = self.received_date;
        manifest.koli = self.koli;
        manifest.weight_kg = self.weight_kg;
        manifest.rate = self.rate;
        manifest.total = self.total;
        manifest.advance = self.advance;
        manifest.paid = self.paid;
    }
}

#[derive(Debug, Deserialize)]
pub struct ManifestListQuery {
    #[serde(default)]
    pub category: Option<RouteCategory>,
    #[serde(default)]
    pub paid: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ManifestListResponse {
    pub manifests: Vec<Manifest>,
    pub summary: ManifestSummary,
}
