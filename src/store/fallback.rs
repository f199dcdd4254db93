//! Catalog data source with a built-in sample fallback.
//!
//! List and detail views substitute static sample records when the document
//! store is unconfigured, errors out, or returns nothing. This is a UI
//! resilience convenience at the presentation boundary; the planner core
//! never goes through here.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::types::{
    Artisan, DestinationRecord, District, Experience, Product, ProductCategory, SavedItinerary,
    Stay, StayType,
};

use super::{
    DocumentStore, Query, ARTISANS_COL, DESTINATIONS_COL, EXPERIENCES_COL, ITINERARIES_COL,
    PRODUCTS_COL, STAYS_COL,
};

const LIST_LIMIT: usize = 50;

/// Read side of the catalog, composed over an optional [`DocumentStore`].
#[derive(Clone)]
pub struct Catalog {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Catalog {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    pub fn without_store() -> Self {
        Self { store: None }
    }

    async fn list_or_fallback<T: DeserializeOwned>(
        &self,
        collection: &str,
        queries: Vec<Query>,
        samples: Vec<T>,
    ) -> Vec<T> {
        let Some(store) = &self.store else {
            return samples;
        };

        match store.list_documents(collection, &queries).await {
            Ok(documents) if !documents.is_empty() => {
                let records: Vec<T> = documents
                    .iter()
                    .filter_map(|doc| doc.deserialize().ok())
                    .collect();
                if records.is_empty() {
                    samples
                } else {
                    records
                }
            }
            Ok(_) => samples,
            Err(err) => {
                debug!(collection, %err, "document store unavailable, serving sample data");
                samples
            }
        }
    }

    pub async fn list_products(
        &self,
        category: Option<ProductCategory>,
        district: Option<District>,
    ) -> Vec<Product> {
        let mut queries = vec![Query::limit(LIST_LIMIT)];
        if let Some(category) = category {
            queries.push(Query::equal("category", category.as_str()));
        }
        if let Some(district) = district {
            queries.push(Query::equal("district", district.as_str()));
        }

        let samples = sample_products()
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| district.map_or(true, |d| p.district == d))
            .collect();

        self.list_or_fallback(PRODUCTS_COL, queries, samples).await
    }

    pub async fn get_product(&self, id: &str) -> Option<Product> {
        self.get_or_fallback(PRODUCTS_COL, id, sample_products()).await
    }

    pub async fn list_stays(
        &self,
        district: Option<District>,
        stay_type: Option<StayType>,
    ) -> Vec<Stay> {
        let mut queries = vec![Query::limit(LIST_LIMIT)];
        if let Some(district) = district {
            queries.push(Query::equal("district", district.as_str()));
        }
        if let Some(stay_type) = stay_type {
            queries.push(Query::equal("type", stay_type.as_str()));
        }

        let samples = sample_stays()
            .into_iter()
            .filter(|s| district.map_or(true, |d| s.district == d))
            .filter(|s| stay_type.map_or(true, |t| s.stay_type == t))
            .collect();

        self.list_or_fallback(STAYS_COL, queries, samples).await
    }

    pub async fn get_stay(&self, id: &str) -> Option<Stay> {
        self.get_or_fallback(STAYS_COL, id, sample_stays()).await
    }

    pub async fn list_destinations(&self, district: Option<District>) -> Vec<DestinationRecord> {
        let mut queries = vec![Query::limit(LIST_LIMIT)];
        if let Some(district) = district {
            queries.push(Query::equal("district", district.as_str()));
        }

        let samples = sample_destinations()
            .into_iter()
            .filter(|d| district.map_or(true, |want| d.district == want))
            .collect();

        self.list_or_fallback(DESTINATIONS_COL, queries, samples)
            .await
    }

    pub async fn list_experiences(&self, district: Option<District>) -> Vec<Experience> {
        let mut queries = vec![Query::limit(LIST_LIMIT)];
        if let Some(district) = district {
            queries.push(Query::equal("district", district.as_str()));
        }

        let samples = sample_experiences()
            .into_iter()
            .filter(|e| district.map_or(true, |want| e.district == want))
            .collect();

        self.list_or_fallback(EXPERIENCES_COL, queries, samples)
            .await
    }

    pub async fn list_artisans(&self, district: Option<District>) -> Vec<Artisan> {
        let mut queries = vec![Query::limit(LIST_LIMIT)];
        if let Some(district) = district {
            queries.push(Query::equal("district", district.as_str()));
        }

        let samples = sample_artisans()
            .into_iter()
            .filter(|a| district.map_or(true, |want| a.district == want))
            .collect();

        self.list_or_fallback(ARTISANS_COL, queries, samples).await
    }

    async fn get_or_fallback<T: DeserializeOwned + HasId>(
        &self,
        collection: &str,
        id: &str,
        samples: Vec<T>,
    ) -> Option<T> {
        if let Some(store) = &self.store {
            if let Ok(doc) = store.get_document(collection, id).await {
                if let Ok(record) = doc.deserialize() {
                    return Some(record);
                }
            }
        }
        samples.into_iter().find(|record| record.id() == Some(id))
    }

    /// Persist a generated itinerary. Unlike the list views there is no
    /// fallback here: saving requires a configured store.
    pub async fn save_itinerary(&self, itinerary: &SavedItinerary) -> Result<SavedItinerary> {
        let store = self.store.as_ref().ok_or_else(|| {
            PlannerError::Store("document store is not configured".to_string())
        })?;

        let data: Value = serde_json::to_value(itinerary)?;
        let doc = store.create_document(ITINERARIES_COL, data).await?;
        let mut saved = itinerary.clone();
        saved.id = Some(doc.id);
        Ok(saved)
    }

    pub async fn list_itineraries(&self, user_id: Option<&str>) -> Result<Vec<SavedItinerary>> {
        let store = self.store.as_ref().ok_or_else(|| {
            PlannerError::Store("document store is not configured".to_string())
        })?;

        let mut queries = vec![Query::limit(LIST_LIMIT)];
        match user_id {
            Some(user_id) => queries.push(Query::equal("user_id", user_id)),
            None => queries.push(Query::equal("is_public", true)),
        }

        let documents = store.list_documents(ITINERARIES_COL, &queries).await?;
        documents.iter().map(|doc| doc.deserialize()).collect()
    }
}

trait HasId {
    fn id(&self) -> Option<&str>;
}

impl HasId for Product {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl HasId for Stay {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

// Sample records shown when no document store is configured. Mirrors the
// seed data used by provisioning.

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: Some("p1".to_string()),
            name: "Bamboo Wind Chimes".to_string(),
            category: ProductCategory::BambooCrafts,
            price: 850,
            artisan_name: "Ramesh Bhil".to_string(),
            artisan_verified: true,
            district: District::Banswara,
            description: Some(
                "Handcrafted bamboo wind chimes with natural dyes, made using traditional Bhil weaving techniques.".to_string(),
            ),
            tags: vec!["bamboo".to_string(), "handmade".to_string()],
            images: vec![],
            click_collect: true,
        },
        Product {
            id: Some("p2".to_string()),
            name: "Warli Village Painting".to_string(),
            category: ProductCategory::Warli,
            price: 2400,
            artisan_name: "Sunita Gamit".to_string(),
            artisan_verified: true,
            district: District::Dungarpur,
            description: Some(
                "An intricate Warli painting of a harvest festival scene on handmade khadi paper.".to_string(),
            ),
            tags: vec!["warli".to_string(), "painting".to_string()],
            images: vec![],
            click_collect: false,
        },
        Product {
            id: Some("p3".to_string()),
            name: "Terracotta Tribal Vase".to_string(),
            category: ProductCategory::Terracotta,
            price: 1200,
            artisan_name: "Mohanlal Vasave".to_string(),
            artisan_verified: false,
            district: District::Banswara,
            description: Some(
                "Hand-thrown terracotta vase with tribal motifs, fired in a traditional firewood kiln.".to_string(),
            ),
            tags: vec!["terracotta".to_string()],
            images: vec![],
            click_collect: true,
        },
        Product {
            id: Some("p4".to_string()),
            name: "Sandstone Deity Carving".to_string(),
            category: ProductCategory::StoneCarvings,
            price: 5500,
            artisan_name: "Devji Katara".to_string(),
            artisan_verified: true,
            district: District::Dungarpur,
            description: Some(
                "Sandstone carving of Goddess Tripura Sundari in the Vagad stone-carving style.".to_string(),
            ),
            tags: vec!["stone".to_string(), "heritage".to_string()],
            images: vec![],
            click_collect: false,
        },
    ]
}

pub fn sample_stays() -> Vec<Stay> {
    vec![
        Stay {
            id: Some("s1".to_string()),
            name: "Mahi Riverside Retreat".to_string(),
            location: "Ghatol".to_string(),
            district: District::Banswara,
            stay_type: StayType::Riverside,
            host_name: "Ramesh Bhil".to_string(),
            price_per_night: 1800,
            rating: Some(4.9),
            review_count: 38,
            distance_from_landmark: Some("2 km from Mahi Dam".to_string()),
            rips_certified: true,
            paryatan_mitra_level: Some(3),
            amenities: vec![
                "Home-cooked meals".to_string(),
                "River-view balcony".to_string(),
                "Bonfire".to_string(),
                "Boating".to_string(),
            ],
            images: vec![],
        },
        Stay {
            id: Some("s2".to_string()),
            name: "Dungarpur Hilltop Haveli".to_string(),
            location: "Old City, Dungarpur".to_string(),
            district: District::Dungarpur,
            stay_type: StayType::HeritageHome,
            host_name: "Meena Devi".to_string(),
            price_per_night: 2400,
            rating: Some(4.8),
            review_count: 55,
            distance_from_landmark: Some("1 km from Juna Mahal".to_string()),
            rips_certified: true,
            paryatan_mitra_level: Some(3),
            amenities: vec![
                "AC rooms".to_string(),
                "Rooftop dining".to_string(),
                "Heritage tour".to_string(),
            ],
            images: vec![],
        },
        Stay {
            id: Some("s3".to_string()),
            name: "Organic Farm Cottage".to_string(),
            location: "Sagwara, Dungarpur".to_string(),
            district: District::Dungarpur,
            stay_type: StayType::FarmStay,
            host_name: "Patel Family".to_string(),
            price_per_night: 1800,
            rating: Some(4.7),
            review_count: 24,
            distance_from_landmark: None,
            rips_certified: true,
            paryatan_mitra_level: Some(2),
            amenities: vec![
                "Organic breakfast".to_string(),
                "Farm tour".to_string(),
                "Solar power".to_string(),
            ],
            images: vec![],
        },
    ]
}

pub fn sample_destinations() -> Vec<DestinationRecord> {
    use crate::types::DestinationType;

    vec![
        DestinationRecord {
            id: Some("d1".to_string()),
            name: "Tripura Sundari Temple".to_string(),
            district: District::Banswara,
            destination_type: DestinationType::Temple,
            description: Some(
                "One of 108 Shakti Peethas. A 1008 CE hilltop temple with panoramic views of Banswara's island-dotted backwaters.".to_string(),
            ),
            images: vec![],
            latitude: Some(23.5467),
            longitude: Some(74.4567),
            entry_fee: 0,
            best_time_to_visit: Some("October to March, especially at sunrise".to_string()),
            tags: vec!["Shakti Peetha".to_string(), "Sunrise".to_string()],
        },
        DestinationRecord {
            id: Some("d2".to_string()),
            name: "Mahi Bajaj Sagar Dam".to_string(),
            district: District::Banswara,
            destination_type: DestinationType::Dam,
            description: Some(
                "The island-strewn reservoir giving Banswara the title \"City of 100 Islands\". Boat rides through the emerald islands are a must-do.".to_string(),
            ),
            images: vec![],
            latitude: Some(23.58),
            longitude: Some(74.48),
            entry_fee: 0,
            best_time_to_visit: Some("July to February for boating".to_string()),
            tags: vec!["Boating".to_string(), "Islands".to_string()],
        },
        DestinationRecord {
            id: Some("d3".to_string()),
            name: "Juna Mahal".to_string(),
            district: District::Dungarpur,
            destination_type: DestinationType::Heritage,
            description: Some(
                "A 13th-century multi-storied palace fortress adorned with intricate stone carvings and mirror-work frescoes.".to_string(),
            ),
            images: vec![],
            latitude: Some(23.8412),
            longitude: Some(73.7149),
            entry_fee: 50,
            best_time_to_visit: Some("October to March".to_string()),
            tags: vec!["Heritage".to_string(), "Palace".to_string()],
        },
    ]
}

pub fn sample_experiences() -> Vec<Experience> {
    use crate::types::ExperienceType;

    vec![
        Experience {
            id: Some("e1".to_string()),
            name: "Mahi Island Boating".to_string(),
            experience_type: ExperienceType::Boating,
            location: "Mahi Bajaj Sagar Dam".to_string(),
            district: District::Banswara,
            duration_hours: Some(2.0),
            price_per_person: Some(350),
            description: Some("Boat ride through the green islands of the Mahi backwaters.".to_string()),
            images: vec![],
            difficulty: Some("easy".to_string()),
            guide_required: false,
            available_months: vec!["Jul".to_string(), "Aug".to_string(), "Sep".to_string()],
        },
        Experience {
            id: Some("e2".to_string()),
            name: "Warli Painting Workshop".to_string(),
            experience_type: ExperienceType::TribalCraft,
            location: "Bhil artisan village".to_string(),
            district: District::Dungarpur,
            duration_hours: Some(3.0),
            price_per_person: Some(500),
            description: Some("Hands-on Warli painting session with a Govt. verified artisan.".to_string()),
            images: vec![],
            difficulty: Some("easy".to_string()),
            guide_required: true,
            available_months: vec![],
        },
        Experience {
            id: Some("e3".to_string()),
            name: "Old City Heritage Walk".to_string(),
            experience_type: ExperienceType::HeritageWalk,
            location: "Juna Mahal, Dungarpur".to_string(),
            district: District::Dungarpur,
            duration_hours: Some(2.5),
            price_per_person: Some(200),
            description: Some("Guided walk through Dungarpur's medieval old city and palace.".to_string()),
            images: vec![],
            difficulty: Some("moderate".to_string()),
            guide_required: true,
            available_months: vec![],
        },
    ]
}

pub fn sample_artisans() -> Vec<Artisan> {
    vec![
        Artisan {
            id: Some("a1".to_string()),
            name: "Ramesh Bhil".to_string(),
            craft_type: "Bamboo craft".to_string(),
            district: District::Banswara,
            village: Some("Ghatol".to_string()),
            govt_verified: true,
            contact: None,
            bio: Some("Third-generation bamboo weaver from the Bhil community.".to_string()),
            profile_image: None,
            speciality: Some("Wind chimes and lamps".to_string()),
        },
        Artisan {
            id: Some("a2".to_string()),
            name: "Sunita Gamit".to_string(),
            craft_type: "Warli painting".to_string(),
            district: District::Dungarpur,
            village: None,
            govt_verified: true,
            contact: None,
            bio: Some("Warli artist working with rice-paste pigments on khadi paper.".to_string()),
            profile_image: None,
            speciality: Some("Festival scenes".to_string()),
        },
        Artisan {
            id: Some("a3".to_string()),
            name: "Devji Katara".to_string(),
            craft_type: "Stone carving".to_string(),
            district: District::Dungarpur,
            village: None,
            govt_verified: true,
            contact: None,
            bio: Some("Sandstone sculptor in the Dungarpur carving tradition.".to_string()),
            profile_image: None,
            speciality: Some("Deity figures".to_string()),
        },
    ]
}
