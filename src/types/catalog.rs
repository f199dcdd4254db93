use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::trip::TripType;

/// The two districts making up the Vagad region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum District {
    Banswara,
    Dungarpur,
}

impl District {
    /// Wire label matching the store's enum attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            District::Banswara => "banswara",
            District::Dungarpur => "dungarpur",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    BambooCrafts,
    StoneCarvings,
    Textiles,
    Warli,
    Terracotta,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::BambooCrafts => "bamboo_crafts",
            ProductCategory::StoneCarvings => "stone_carvings",
            ProductCategory::Textiles => "textiles",
            ProductCategory::Warli => "warli",
            ProductCategory::Terracotta => "terracotta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayType {
    FarmStay,
    HeritageHome,
    EcoHut,
    Riverside,
}

impl StayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StayType::FarmStay => "farm_stay",
            StayType::HeritageHome => "heritage_home",
            StayType::EcoHut => "eco_hut",
            StayType::Riverside => "riverside",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceType {
    Kayaking,
    TribalCraft,
    HeritageWalk,
    Camping,
    Birdwatching,
    Boating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    Temple,
    Dam,
    Island,
    Heritage,
    Nature,
    TribalVillage,
}

/// Craft marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: ProductCategory,
    pub price: i64,
    pub artisan_name: String,
    pub artisan_verified: bool,
    pub district: District,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub click_collect: bool,
}

/// Homestay listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stay {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub district: District,
    #[serde(rename = "type")]
    pub stay_type: StayType,
    pub host_name: String,
    pub price_per_night: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_landmark: Option<String>,
    #[serde(default)]
    pub rips_certified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paryatan_mitra_level: Option<i64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Verified craftsperson profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artisan {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub craft_type: String,
    pub district: District,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(default)]
    pub govt_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speciality: Option<String>,
}

/// Bookable guided experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub experience_type: ExperienceType,
    pub location: String,
    pub district: District,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_person: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub guide_required: bool,
    #[serde(default)]
    pub available_months: Vec<String>,
}

/// Destination guide entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRecord {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub district: District,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub entry_fee: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A generated itinerary persisted by a user. The plan itself is stored as a
/// JSON string, matching the document store's flat field model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedItinerary {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    pub days: u32,
    pub trip_type: TripType,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_plan: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
