pub mod catalog;
pub mod itinerary;
pub mod trip;

pub use catalog::{
    Artisan, DestinationRecord, DestinationType, District, Experience, ExperienceType, Product,
    ProductCategory, SavedItinerary, Stay, StayType,
};
pub use itinerary::{Activity, ActivityKind, DayPlan, Itinerary, Meals};
pub use trip::{GenerateItineraryRequest, TripRequest, TripType};
