pub mod planner;

pub use planner::ItineraryPlanner;
