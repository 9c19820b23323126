//! Sales data shapes and the scope a drill level fetches for.

use drillboard_core::BreadcrumbEntry;
use serde::{Deserialize, Serialize};

/// One bar of an aggregate breakdown (region or city).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub value: f64,
}

/// One store in a city listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreRow {
    pub id: u32,
    pub name: String,
    /// Store format ("flagship", "outlet", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub revenue: f64,
}

/// Which slice of the sales hierarchy a view shows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SalesScope {
    /// All regions
    Regions,
    /// Cities of one region
    Cities { region: String },
    /// Stores of one city
    Stores { region: String, city: String },
}

impl SalesScope {
    /// Derive the scope from a breadcrumb trail.
    ///
    /// Levels below stores have no listing of their own and yield `None`.
    pub fn from_trail(trail: &[BreadcrumbEntry]) -> Option<Self> {
        match trail {
            [_root] => Some(Self::Regions),
            [_root, region] => Some(Self::Cities {
                region: region.key.clone(),
            }),
            [_root, region, city] => Some(Self::Stores {
                region: region.key.clone(),
                city: city.key.clone(),
            }),
            _ => None,
        }
    }

    /// Resource path relative to the data base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Regions => "sales/regions.json".to_string(),
            Self::Cities { region } => format!("sales/{}.json", slug(region)),
            Self::Stores { region, city } => {
                format!("sales/{}/{}.json", slug(region), slug(city))
            }
        }
    }

    /// Cache key for this scope's raw payload.
    pub fn cache_key(&self, prefix: &str) -> String {
        format!("{}:{}", prefix, self.path())
    }
}

/// Lowercase, spaces to dashes, everything else non-alphanumeric dropped.
pub(super) fn slug(key: &str) -> String {
    key.trim()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' | '_' => Some('-'),
            c if c.is_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}
