//! The shared key-value namespace. Each concern owns its keys; values are
//! JSON documents with ISO-8601 timestamp strings.

pub const USER_APPLICATIONS: &str = "user_applications";
pub const LIKED_PROPERTIES: &str = "liked_properties";
pub const DM_CONVERSATIONS: &str = "dm_conversations";
pub const SEARCH_HISTORY: &str = "search_history";
pub const SEARCH_FILTERS: &str = "search_filters";
pub const SEARCH_SUGGESTIONS: &str = "search_suggestions";
pub const USER_STATUS: &str = "userStatus";
pub const APPROVED_ACCOMMODATION: &str = "approvedAccommodation";
pub const ACCOMMODATION_OFFERS: &str = "accommodationOffers";
pub const PROFILE_IMAGE: &str = "profileImage";
pub const USER_NAME: &str = "userName";
pub const PERSONAL_INFO: &str = "personalInfo";

pub fn application_form_key(property_id: &str) -> String {
    format!("application_form_{}", property_id)
}
