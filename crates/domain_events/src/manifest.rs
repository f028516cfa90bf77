//! Vendor manifests
//!
//! A manifest is a consignment owed to a route vendor: the total becomes
//! a payable, an optional prepaid advance is paid from cash up front.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use core_kernel::{ManifestId, Money};

use crate::error::EventError;

/// Vendor route the manifest travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteCategory {
    Hulu,
    Ketapang,
    Pantura,
    Putussibau,
    Truk,
    Kalteng,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 6] = [
        RouteCategory::Hulu,
        RouteCategory::Ketapang,
        RouteCategory::Pantura,
        RouteCategory::Putussibau,
        RouteCategory::Truk,
        RouteCategory::Kalteng,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCategory::Hulu => "HULU",
            RouteCategory::Ketapang => "KETAPANG",
            RouteCategory::Pantura => "PANTURA",
            RouteCategory::Putussibau => "PUTUSSIBAU",
            RouteCategory::Truk => "TRUK",
            RouteCategory::Kalteng => "KALTENG",
        }
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vendor manifest, unique per (resi, route category)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub id: ManifestId,
    pub category: RouteCategory,
    pub resi: String,
    pub ship_date: Option<NaiveDate>,
    pub sender: Option<String>,
    pub destination: Option<String>,
    pub receiver: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub koli: u32,
    pub weight_kg: Decimal,
    pub rate: Money,
    /// Amount owed to the vendor
    pub total: Money,
    /// Prepaid advance, paid from cash when > 0
    pub advance: Money,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl Manifest {
    pub fn new(category: RouteCategory, resi: impl Into<String>, total: Money) -> Self {
        Self {
            id: ManifestId::new_v7(),
            category,
            resi: resi.into(),
            ship_date: None,
            sender: None,
            destination: None,
            receiver: None,
            received_date: None,
            koli: 0,
            weight_kg: Decimal::ZERO,
            rate: Money::zero(),
            total,
            advance: Money::zero(),
            paid: false,
            created_at: Utc::now(),
        }
    }
}

/// Outstanding vs settled totals over a manifest listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub count: usize,
    pub total: Money,
    pub total_advance: Money,
    /// Unpaid manifests only
    pub outstanding: Money,
    /// Paid manifests only
    pub settled: Money,
}

/// In-memory register of manifests, unique per (resi, category)
#[derive(Debug, Default, Clone)]
pub struct ManifestRegister {
    manifests: HashMap<ManifestId, Manifest>,
}

impl ManifestRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, manifest: Manifest) -> Result<ManifestId, EventError> {
        self.validate(&manifest)?;
        let id = manifest.id;
        self.manifests.insert(id, manifest);
        Ok(id)
    }

    pub fn update(&mut self, manifest: Manifest) -> Result<(), EventError> {
        if !self.manifests.contains_key(&manifest.id) {
            return Err(EventError::not_found("manifest"));
        }
        self.validate(&manifest)?;
        self.manifests.insert(manifest.id, manifest);
        Ok(())
    }

    pub fn remove(&mut self, id: ManifestId) -> Result<Manifest, EventError> {
        self.manifests
            .remove(&id)
            .ok_or_else(|| EventError::not_found("manifest"))
    }

    pub fn get(&self, id: ManifestId) -> Option<&Manifest> {
        self.manifests.get(&id)
    }

    /// All manifests, most recent ship date first, then by category
    pub fn list(&self) -> Vec<&Manifest> {
        let mut all: Vec<_> = self.manifests.values().collect();
        all.sort_by(|a, b| {
            b.ship_date
                .cmp(&a.ship_date)
                .then(a.category.as_str().cmp(b.category.as_str()))
                .then(a.resi.cmp(&b.resi))
        });
        all
    }

    pub fn filter(&self, category: Option<RouteCategory>, paid: Option<bool>) -> Vec<&Manifest> {
        self.list()
            .into_iter()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .filter(|m| paid.map_or(true, |p| m.paid == p))
            .collect()
    }

    pub fn summarize<'a>(manifests: impl IntoIterator<Item = &'a Manifest>) -> ManifestSummary {
        let mut summary = ManifestSummary {
            count: 0,
            total: Money::zero(),
            total_advance: Money::zero(),
            outstanding: Money::zero(),
            settled: Money::zero(),
        };
        for manifest in manifests {
            summary.count += 1;
            summary.total += manifest.total;
            summary.total_advance += manifest.advance;
            if manifest.paid {
                summary.settled += manifest.total;
            } else {
                summary.outstanding += manifest.total;
            }
        }
        summary
    }

    fn validate(&self, manifest: &Manifest) -> Result<(), EventError> {
        if manifest.resi.trim().is_empty() {
            return Err(EventError::validation("resi number is required"));
        }
        let taken = self.manifests.values().any(|m| {
            m.resi == manifest.resi && m.category == manifest.category && m.id != manifest.id
        });
        if taken {
            return Err(EventError::DuplicateManifest {
                resi: manifest.resi.clone(),
                category: manifest.category.to_string(),
            });
        }
        Ok(())
    }
}
