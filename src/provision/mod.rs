//! One-shot backend provisioning: database, collections, attributes,
//! indexes, storage buckets and seed data.
//!
//! Idempotent in the create-if-absent sense: anything that already exists is
//! reported and skipped, other failures are reported and provisioning moves
//! on to the next item.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::error::{PlannerError, Result};
use crate::store::fallback::{sample_destinations, sample_products, sample_stays};
use crate::store::{AppwriteClient, DocumentStore, DESTINATIONS_COL, PRODUCTS_COL, STAYS_COL};

/// The store needs a brief gap between attribute creations.
const ATTRIBUTE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Default)]
pub struct ProvisionSummary {
    pub collections_created: usize,
    pub buckets_created: usize,
    pub records_added: usize,
    pub skipped: usize,
}

enum AttributeKind {
    Str {
        size: u32,
        required: bool,
        array: bool,
    },
    Integer {
        required: bool,
        default: Option<i64>,
    },
    Float {
        required: bool,
    },
    Boolean {
        required: bool,
        default: Option<bool>,
    },
    Enum {
        elements: &'static [&'static str],
        required: bool,
    },
    Datetime,
}

struct AttributeSpec {
    key: &'static str,
    kind: AttributeKind,
}

impl AttributeSpec {
    fn str(key: &'static str, size: u32, required: bool) -> Self {
        Self {
            key,
            kind: AttributeKind::Str {
                size,
                required,
                array: false,
            },
        }
    }

    fn str_array(key: &'static str, size: u32) -> Self {
        Self {
            key,
            kind: AttributeKind::Str {
                size,
                required: false,
                array: true,
            },
        }
    }

    fn integer(key: &'static str, required: bool) -> Self {
        Self {
            key,
            kind: AttributeKind::Integer {
                required,
                default: None,
            },
        }
    }

    fn integer_default(key: &'static str, default: i64) -> Self {
        Self {
            key,
            kind: AttributeKind::Integer {
                required: false,
                default: Some(default),
            },
        }
    }

    fn float(key: &'static str) -> Self {
        Self {
            key,
            kind: AttributeKind::Float { required: false },
        }
    }

    fn boolean(key: &'static str, required: bool) -> Self {
        Self {
            key,
            kind: AttributeKind::Boolean {
                required,
                default: None,
            },
        }
    }

    fn boolean_default(key: &'static str, default: bool) -> Self {
        Self {
            key,
            kind: AttributeKind::Boolean {
                required: false,
                default: Some(default),
            },
        }
    }

    fn enumeration(key: &'static str, elements: &'static [&'static str], required: bool) -> Self {
        Self {
            key,
            kind: AttributeKind::Enum { elements, required },
        }
    }

    fn datetime(key: &'static str) -> Self {
        Self {
            key,
            kind: AttributeKind::Datetime,
        }
    }

    fn path_segment(&self) -> &'static str {
        match self.kind {
            AttributeKind::Str { .. } => "string",
            AttributeKind::Integer { .. } => "integer",
            AttributeKind::Float { .. } => "float",
            AttributeKind::Boolean { .. } => "boolean",
            AttributeKind::Enum { .. } => "enum",
            AttributeKind::Datetime => "datetime",
        }
    }

    fn body(&self) -> Value {
        match &self.kind {
            AttributeKind::Str {
                size,
                required,
                array,
            } => json!({ "key": self.key, "size": size, "required": required, "array": array }),
            AttributeKind::Integer { required, default } => {
                let mut body = json!({ "key": self.key, "required": required });
                if let Some(default) = default {
                    body["default"] = json!(default);
                }
                body
            }
            AttributeKind::Float { required } => {
                json!({ "key": self.key, "required": required })
            }
            AttributeKind::Boolean { required, default } => {
                let mut body = json!({ "key": self.key, "required": required });
                if let Some(default) = default {
                    body["default"] = json!(default);
                }
                body
            }
            AttributeKind::Enum { elements, required } => {
                json!({ "key": self.key, "elements": elements, "required": required })
            }
            AttributeKind::Datetime => json!({ "key": self.key, "required": false }),
        }
    }
}

struct IndexSpec {
    key: &'static str,
    attributes: &'static [&'static str],
}

struct CollectionSpec {
    id: &'static str,
    name: &'static str,
    attributes: Vec<AttributeSpec>,
    indexes: Vec<IndexSpec>,
}

const DISTRICTS: &[&str] = &["banswara", "dungarpur"];

fn collection_specs() -> Vec<CollectionSpec> {
    vec![
        CollectionSpec {
            id: PRODUCTS_COL,
            name: "Products",
            attributes: vec![
                AttributeSpec::str("name", 255, true),
                AttributeSpec::enumeration(
                    "category",
                    &[
                        "bamboo_crafts",
                        "stone_carvings",
                        "textiles",
                        "warli",
                        "terracotta",
                    ],
                    true,
                ),
                AttributeSpec::integer("price", true),
                AttributeSpec::str("artisan_name", 255, true),
                AttributeSpec::boolean("artisan_verified", true),
                AttributeSpec::str("description", 2000, false),
                AttributeSpec::str_array("tags", 100),
                AttributeSpec::str_array("images", 500),
                AttributeSpec::enumeration("district", DISTRICTS, true),
                AttributeSpec::boolean_default("click_collect", false),
            ],
            indexes: vec![
                IndexSpec {
                    key: "idx_category",
                    attributes: &["category"],
                },
                IndexSpec {
                    key: "idx_district",
                    attributes: &["district"],
                },
            ],
        },
        CollectionSpec {
            id: STAYS_COL,
            name: "Stays",
            attributes: vec![
                AttributeSpec::str("name", 255, true),
                AttributeSpec::str("location", 255, true),
                AttributeSpec::enumeration("district", DISTRICTS, true),
                AttributeSpec::str("distance_from_landmark", 255, false),
                AttributeSpec::str("host_name", 255, true),
                AttributeSpec::integer("paryatan_mitra_level", false),
                AttributeSpec::boolean_default("rips_certified", false),
                AttributeSpec::integer("price_per_night", true),
                AttributeSpec::float("rating"),
                AttributeSpec::integer_default("review_count", 0),
                AttributeSpec::str_array("images", 500),
                AttributeSpec::enumeration(
                    "type",
                    &["farm_stay", "heritage_home", "eco_hut", "riverside"],
                    true,
                ),
                AttributeSpec::str_array("amenities", 100),
            ],
            indexes: vec![
                IndexSpec {
                    key: "idx_district",
                    attributes: &["district"],
                },
                IndexSpec {
                    key: "idx_type",
                    attributes: &["type"],
                },
                IndexSpec {
                    key: "idx_rips_certified",
                    attributes: &["rips_certified"],
                },
            ],
        },
        CollectionSpec {
            id: "artisans",
            name: "Artisans",
            attributes: vec![
                AttributeSpec::str("name", 255, true),
                AttributeSpec::str("craft_type", 255, true),
                AttributeSpec::str("village", 255, false),
                AttributeSpec::enumeration("district", DISTRICTS, true),
                AttributeSpec::boolean_default("govt_verified", false),
                AttributeSpec::str("contact", 20, false),
                AttributeSpec::str("bio", 1000, false),
                AttributeSpec::str("profile_image", 500, false),
                AttributeSpec::str("speciality", 255, false),
            ],
            indexes: vec![],
        },
        CollectionSpec {
            id: "itineraries",
            name: "Itineraries",
            attributes: vec![
                AttributeSpec::str("user_id", 255, false),
                AttributeSpec::str("title", 255, true),
                AttributeSpec::integer("days", true),
                AttributeSpec::enumeration(
                    "trip_type",
                    &["cultural", "nature", "spiritual", "adventure", "mixed"],
                    true,
                ),
                AttributeSpec::str_array("interests", 100),
                AttributeSpec::str("generated_plan", 50000, false),
                AttributeSpec::str_array("destinations", 100),
                AttributeSpec::boolean_default("is_public", false),
                AttributeSpec::datetime("created_at"),
            ],
            indexes: vec![],
        },
        CollectionSpec {
            id: "experiences",
            name: "Experiences",
            attributes: vec![
                AttributeSpec::str("name", 255, true),
                AttributeSpec::enumeration(
                    "type",
                    &[
                        "kayaking",
                        "tribal_craft",
                        "heritage_walk",
                        "camping",
                        "birdwatching",
                        "boating",
                    ],
                    true,
                ),
                AttributeSpec::str("location", 255, true),
                AttributeSpec::enumeration("district", DISTRICTS, true),
                AttributeSpec::float("duration_hours"),
                AttributeSpec::integer("price_per_person", false),
                AttributeSpec::str("description", 2000, false),
                AttributeSpec::str_array("images", 500),
                AttributeSpec::enumeration("difficulty", &["easy", "moderate", "hard"], false),
                AttributeSpec::boolean_default("guide_required", false),
                AttributeSpec::str_array("available_months", 20),
            ],
            indexes: vec![
                IndexSpec {
                    key: "idx_type",
                    attributes: &["type"],
                },
                IndexSpec {
                    key: "idx_district",
                    attributes: &["district"],
                },
            ],
        },
        CollectionSpec {
            id: "destinations",
            name: "Destinations",
            attributes: vec![
                AttributeSpec::str("name", 255, true),
                AttributeSpec::enumeration("district", DISTRICTS, true),
                AttributeSpec::enumeration(
                    "type",
                    &["temple", "dam", "island", "heritage", "nature", "tribal_village"],
                    true,
                ),
                AttributeSpec::str("description", 3000, false),
                AttributeSpec::str_array("images", 500),
                AttributeSpec::float("latitude"),
                AttributeSpec::float("longitude"),
                AttributeSpec::integer_default("entry_fee", 0),
                AttributeSpec::str("best_time_to_visit", 255, false),
                AttributeSpec::str_array("tags", 100),
            ],
            indexes: vec![
                IndexSpec {
                    key: "idx_district",
                    attributes: &["district"],
                },
                IndexSpec {
                    key: "idx_type",
                    attributes: &["type"],
                },
            ],
        },
    ]
}

struct BucketSpec {
    id: &'static str,
    name: &'static str,
    max_size: u64,
}

const BUCKETS: &[BucketSpec] = &[
    BucketSpec {
        id: "product-images",
        name: "Product Images",
        max_size: 5 * 1024 * 1024,
    },
    BucketSpec {
        id: "stay-images",
        name: "Stay Images",
        max_size: 10 * 1024 * 1024,
    },
    BucketSpec {
        id: "profile-images",
        name: "Profile Images",
        max_size: 2 * 1024 * 1024,
    },
];

/// Record the outcome of one create call: created, already there, or failed.
fn tally(label: &str, result: Result<Value>, summary: &mut ProvisionSummary) -> bool {
    match result {
        Ok(_) => {
            info!("created {label}");
            true
        }
        Err(PlannerError::AlreadyExists(_)) => {
            warn!("{label} already exists, skipping");
            summary.skipped += 1;
            false
        }
        Err(err) => {
            error!("{label}: {err}");
            false
        }
    }
}

/// Provision the whole backend against the configured project.
pub async fn run(client: &AppwriteClient) -> Result<ProvisionSummary> {
    let mut summary = ProvisionSummary::default();
    let db = client.database_id().to_string();

    info!("provisioning database `{db}`");
    tally(
        &format!("database {db}"),
        client
            .post("databases", json!({ "databaseId": db, "name": "Vagad DB" }))
            .await,
        &mut summary,
    );

    for spec in collection_specs() {
        info!("provisioning collection `{}`", spec.id);
        let created = tally(
            &format!("collection {}", spec.id),
            client
                .post(
                    &format!("databases/{db}/collections"),
                    json!({ "collectionId": spec.id, "name": spec.name }),
                )
                .await,
            &mut summary,
        );
        if created {
            summary.collections_created += 1;
        }

        for attribute in &spec.attributes {
            tally(
                &format!("attribute {}.{}", spec.id, attribute.key),
                client
                    .post(
                        &format!(
                            "databases/{db}/collections/{}/attributes/{}",
                            spec.id,
                            attribute.path_segment()
                        ),
                        attribute.body(),
                    )
                    .await,
                &mut summary,
            );
            tokio::time::sleep(ATTRIBUTE_DELAY).await;
        }

        for index in &spec.indexes {
            tally(
                &format!("index {}.{}", spec.id, index.key),
                client
                    .post(
                        &format!("databases/{db}/collections/{}/indexes", spec.id),
                        json!({ "key": index.key, "type": "key", "attributes": index.attributes }),
                    )
                    .await,
                &mut summary,
            );
            tokio::time::sleep(ATTRIBUTE_DELAY).await;
        }
    }

    for bucket in BUCKETS {
        let created = tally(
            &format!("bucket {}", bucket.id),
            client
                .post(
                    "storage/buckets",
                    json!({
                        "bucketId": bucket.id,
                        "name": bucket.name,
                        "maximumFileSize": bucket.max_size,
                        "allowedFileExtensions": ["jpg", "jpeg", "png", "webp"],
                    }),
                )
                .await,
            &mut summary,
        );
        if created {
            summary.buckets_created += 1;
        }
    }

    summary.records_added += seed_documents(client).await;

    info!(
        collections = summary.collections_created,
        buckets = summary.buckets_created,
        records = summary.records_added,
        skipped = summary.skipped,
        "provisioning finished"
    );

    Ok(summary)
}

async fn seed_documents(client: &AppwriteClient) -> usize {
    let mut added = 0;

    for product in sample_products() {
        added += seed_one(client, PRODUCTS_COL, &product.name, &product).await;
    }
    for stay in sample_stays() {
        added += seed_one(client, STAYS_COL, &stay.name, &stay).await;
    }
    for destination in sample_destinations() {
        added += seed_one(client, DESTINATIONS_COL, &destination.name, &destination).await;
    }

    added
}

async fn seed_one<T: serde::Serialize>(
    client: &AppwriteClient,
    collection: &str,
    label: &str,
    record: &T,
) -> usize {
    let mut data = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(err) => {
            error!("seed {collection}/{label}: {err}");
            return 0;
        }
    };
    // Seed records come from the sample set, which carries placeholder ids.
    if let Some(obj) = data.as_object_mut() {
        obj.remove("$id");
    }

    match client.create_document(collection, data).await {
        Ok(_) => {
            info!("seeded {collection}: {label}");
            1
        }
        Err(PlannerError::AlreadyExists(_)) => 0,
        Err(err) => {
            error!("seed {collection}/{label}: {err}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_cover_all_six_collections() {
        let specs = collection_specs();
        let ids: Vec<&str> = specs.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "products",
                "stays",
                "artisans",
                "itineraries",
                "experiences",
                "destinations"
            ]
        );
    }

    #[test]
    fn enum_attributes_carry_elements() {
        let specs = collection_specs();
        let products = &specs[0];
        let category = products
            .attributes
            .iter()
            .find(|a| a.key == "category")
            .unwrap();
        let body = category.body();
        assert_eq!(body["elements"][0], "bamboo_crafts");
        assert_eq!(category.path_segment(), "enum");
    }

    #[test]
    fn generated_plan_is_large_enough_for_serialized_itineraries() {
        let specs = collection_specs();
        let itineraries = specs.iter().find(|s| s.id == "itineraries").unwrap();
        let plan = itineraries
            .attributes
            .iter()
            .find(|a| a.key == "generated_plan")
            .unwrap();
        assert_eq!(plan.body()["size"], 50000);
    }
}
