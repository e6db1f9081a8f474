use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct TravelRequest {
    pub destination: String,
    pub duration: String,
    pub travelers: String,
    pub interests: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interest {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const INTERESTS: [Interest; 8] = [
    Interest { id: "adventure", label: "Adventure", icon: "🏔️" },
    Interest { id: "culture", label: "Culture", icon: "🏛️" },
    Interest { id: "food", label: "Food & Dining", icon: "🍽️" },
    Interest { id: "beach", label: "Beach & Relaxation", icon: "🏖️" },
    Interest { id: "shopping", label: "Shopping", icon: "🛍️" },
    Interest { id: "nightlife", label: "Nightlife", icon: "🌃" },
    Interest { id: "nature", label: "Nature", icon: "🌿" },
    Interest { id: "history", label: "History", icon: "🏰" },
];

pub fn find_interest(id: &str) -> Option<&'static Interest> {
    INTERESTS.iter().find(|interest| interest.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecommendedLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub tags: [&'static str; 2],
}

pub const RECOMMENDED_LOCATIONS: [RecommendedLocation; 4] = [
    RecommendedLocation {
        id: "bali",
        name: "Bali, Indonesia",
        image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&w=800",
        tags: ["Beach", "Culture"],
    },
    RecommendedLocation {
        id: "swiss",
        name: "Swiss Alps",
        image: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?auto=format&fit=crop&w=800",
        tags: ["Mountains", "Adventure"],
    },
    RecommendedLocation {
        id: "tokyo",
        name: "Tokyo, Japan",
        image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?auto=format&fit=crop&w=800",
        tags: ["City", "Culture"],
    },
    RecommendedLocation {
        id: "santorini",
        name: "Santorini, Greece",
        image: "https://images.unsplash.com/photo-1613395877344-13d4a8e0d49e?auto=format&fit=crop&w=800",
        tags: ["Beach", "Romance"],
    },
];

pub fn find_location(id: &str) -> Option<&'static RecommendedLocation> {
    RECOMMENDED_LOCATIONS.iter().find(|location| location.id == id)
}

/// Values offered by the duration select, paired with their labels.
pub const DURATION_OPTIONS: [(&str, &str); 5] = [
    ("3", "3 Days"),
    ("5", "5 Days"),
    ("7", "7 Days"),
    ("10", "10 Days"),
    ("14", "14 Days"),
];

pub const TRAVELER_OPTIONS: [(&str, &str); 5] = [
    ("1", "1 Person"),
    ("2", "2 People"),
    ("3", "3 People"),
    ("4", "4 People"),
    ("5+", "5+ People"),
];

/// Working state of the trip form before it becomes a `TravelRequest`.
/// `selected_location` and `custom_destination` are kept mutually exclusive.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TripForm {
    pub selected_interests: Vec<String>,
    pub selected_location: Option<String>,
    pub custom_destination: String,
    pub duration: String,
    pub travelers: String,
}

impl TripForm {
    pub fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.selected_interests.iter().position(|selected| selected == id) {
            self.selected_interests.remove(pos);
        } else {
            self.selected_interests.push(id.to_string());
        }
    }

    pub fn is_interest_selected(&self, id: &str) -> bool {
        self.selected_interests.iter().any(|selected| selected == id)
    }

    pub fn select_location(&mut self, id: &str) {
        self.selected_location = Some(id.to_string());
        self.custom_destination.clear();
    }

    pub fn set_custom_destination(&mut self, text: String) {
        self.custom_destination = text;
        self.selected_location = None;
    }

    pub fn set_duration(&mut self, duration: String) {
        self.duration = duration;
    }

    pub fn set_travelers(&mut self, travelers: String) {
        self.travelers = travelers;
    }

    pub fn to_request(&self) -> TravelRequest {
        let destination = match self.selected_location.as_deref().and_then(find_location) {
            Some(location) => location.name.to_string(),
            None => self.custom_destination.clone(),
        };

        TravelRequest {
            destination,
            duration: self.duration.clone(),
            travelers: self.travelers.clone(),
            interests: self
                .selected_interests
                .iter()
                .filter_map(|id| find_interest(id))
                .map(|interest| interest.label.to_string())
                .collect(),
        }
    }
}

/// One user edit to the trip form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    ToggleInterest(&'static str),
    SelectLocation(&'static str),
    SetCustomDestination(String),
    SetDuration(String),
    SetTravelers(String),
}

impl Reducible for TripForm {
    type Action = FormAction;

    // Applied to the latest state, so edits landing in the same tick stack up.
    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::ToggleInterest(id) => next.toggle_interest(id),
            FormAction::SelectLocation(id) => next.select_location(id),
            FormAction::SetCustomDestination(text) => next.set_custom_destination(text),
            FormAction::SetDuration(duration) => next.set_duration(duration),
            FormAction::SetTravelers(travelers) => next.set_travelers(travelers),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_back_edits_both_land() {
        let form = Rc::new(TripForm::default())
            .reduce(FormAction::ToggleInterest("adventure"))
            .reduce(FormAction::ToggleInterest("food"))
            .reduce(FormAction::SelectLocation("bali"))
            .reduce(FormAction::SetDuration("5".to_string()))
            .reduce(FormAction::SetTravelers("2".to_string()));

        assert_eq!(form.selected_interests, vec!["adventure", "food"]);
        assert_eq!(form.to_request().destination, "Bali, Indonesia");
        assert_eq!(form.duration, "5");
        assert_eq!(form.travelers, "2");
    }

    #[test]
    fn custom_destination_action_clears_location() {
        let form = Rc::new(TripForm::default())
            .reduce(FormAction::SelectLocation("tokyo"))
            .reduce(FormAction::SetCustomDestination("Lima".to_string()));

        assert_eq!(form.selected_location, None);
        assert_eq!(form.custom_destination, "Lima");
    }

    #[test]
    fn selecting_location_clears_custom_destination() {
        let mut form = TripForm::default();
        form.set_custom_destination("Reykjavik".to_string());
        form.select_location("tokyo");

        assert_eq!(form.selected_location.as_deref(), Some("tokyo"));
        assert!(form.custom_destination.is_empty());
    }

    #[test]
    fn typing_custom_destination_clears_location() {
        let mut form = TripForm::default();
        form.select_location("bali");
        form.set_custom_destination("Lisbon".to_string());

        assert_eq!(form.selected_location, None);
        assert_eq!(form.to_request().destination, "Lisbon");
    }

    #[test]
    fn double_toggle_restores_selection_order() {
        let mut form = TripForm::default();
        form.toggle_interest("culture");
        form.toggle_interest("nature");
        form.toggle_interest("history");
        let before = form.selected_interests.clone();

        form.toggle_interest("beach");
        assert!(form.is_interest_selected("beach"));
        form.toggle_interest("beach");
        assert_eq!(form.selected_interests, before);
    }

    #[test]
    fn toggling_selected_interest_keeps_others_in_order() {
        let mut form = TripForm::default();
        form.toggle_interest("culture");
        form.toggle_interest("nature");
        form.toggle_interest("history");

        form.toggle_interest("nature");
        assert_eq!(form.selected_interests, vec!["culture", "history"]);
        form.toggle_interest("nature");
        assert_eq!(form.selected_interests, vec!["culture", "history", "nature"]);
    }

    #[test]
    fn request_uses_location_name_and_interest_labels() {
        let mut form = TripForm::default();
        form.select_location("bali");
        form.set_duration("5".to_string());
        form.set_travelers("2".to_string());
        form.toggle_interest("adventure");
        form.toggle_interest("food");

        assert_eq!(
            form.to_request(),
            TravelRequest {
                destination: "Bali, Indonesia".to_string(),
                duration: "5".to_string(),
                travelers: "2".to_string(),
                interests: vec!["Adventure".to_string(), "Food & Dining".to_string()],
            }
        );
    }

    #[test]
    fn empty_form_builds_empty_request() {
        let request = TripForm::default().to_request();
        assert_eq!(request, TravelRequest::default());
    }

    #[test]
    fn request_serializes_to_four_flat_fields() {
        let request = TravelRequest {
            destination: "Bali, Indonesia".to_string(),
            duration: "5".to_string(),
            travelers: "2".to_string(),
            interests: vec!["Adventure".to_string(), "Food & Dining".to_string()],
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["destination"], "Bali, Indonesia");
        assert_eq!(object["duration"], "5");
        assert_eq!(object["travelers"], "2");
        assert_eq!(object["interests"], serde_json::json!(["Adventure", "Food & Dining"]));
    }
}
