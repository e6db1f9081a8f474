use log::{debug, info, warn};
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;
use crate::models::TravelRequest;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no browser window available")]
    NoWindow,
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage rejected the write")]
    WriteRejected,
    #[error("could not encode travel request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored travel request is malformed: {0}")]
    Decode(#[source] serde_json::Error),
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = window().ok_or(StorageError::NoWindow)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

pub fn encode_request(request: &TravelRequest) -> Result<String, StorageError> {
    serde_json::to_string(request).map_err(StorageError::Encode)
}

/// Missing slot is `Ok(None)`; a present but unreadable one is an error.
pub fn decode_request(raw: Option<&str>) -> Result<Option<TravelRequest>, StorageError> {
    match raw {
        Some(raw) => serde_json::from_str(raw).map(Some).map_err(StorageError::Decode),
        None => Ok(None),
    }
}

/// Overwrites whatever request was saved before.
pub fn save_request(request: &TravelRequest) -> Result<(), StorageError> {
    let encoded = encode_request(request)?;
    local_storage()?
        .set_item(config::STORAGE_KEY, &encoded)
        .map_err(|_| StorageError::WriteRejected)?;
    debug!("Saved travel request for {:?}", request.destination);
    Ok(())
}

pub fn load_request() -> Result<Option<TravelRequest>, StorageError> {
    let raw = local_storage()?
        .get_item(config::STORAGE_KEY)
        .map_err(|_| StorageError::Unavailable)?;
    decode_request(raw.as_deref())
}

/// Any failure reads as "nothing stored".
pub fn load_request_or_none() -> Option<TravelRequest> {
    match load_request() {
        Ok(Some(request)) => Some(request),
        Ok(None) => {
            info!("No stored travel request, nothing to plan");
            None
        }
        Err(e) => {
            warn!("Ignoring stored travel request: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_is_no_request() {
        assert!(decode_request(None).unwrap().is_none());
    }

    #[test]
    fn decodes_what_the_form_writes() {
        let raw = r#"{"destination":"Bali, Indonesia","duration":"5","travelers":"2","interests":["Adventure","Food & Dining"]}"#;
        let request = decode_request(Some(raw)).unwrap().unwrap();

        assert_eq!(request.destination, "Bali, Indonesia");
        assert_eq!(request.duration, "5");
        assert_eq!(request.travelers, "2");
        assert_eq!(request.interests, vec!["Adventure", "Food & Dining"]);
        assert_eq!(encode_request(&request).unwrap(), raw);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_request(Some("not json")).unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));
    }

    #[test]
    fn partial_record_fills_in_blanks() {
        let request = decode_request(Some(r#"{"destination":"Oslo"}"#)).unwrap().unwrap();
        assert_eq!(request.destination, "Oslo");
        assert!(request.duration.is_empty());
        assert!(request.interests.is_empty());
    }
}
