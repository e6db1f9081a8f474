use log::Level;

/// localStorage slot shared by the trip form and the itinerary page.
pub const STORAGE_KEY: &str = "travelFormData";

/// How long each hero background stays up before rotating, in ms.
pub const HERO_ROTATE_MS: u32 = 6000;

/// Fake "AI is thinking" delay on the itinerary page, in ms.
pub const PROCESSING_DELAY_MS: u32 = 2000;

/// Upper bound on day cards for a stored duration. The form never offers
/// more than 14, but the stored record isn't validated.
pub const MAX_TRIP_DAYS: usize = 365;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
