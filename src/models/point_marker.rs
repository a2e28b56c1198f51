use serde::{Deserialize, Serialize};
use crate::models::location::{LatLng, LocationError};

/// Punto persistido en el almacén (un documento de la colección)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub id: String,
    pub location: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: i64,
}

impl PointMarker {
    pub fn lat_lng(&self) -> Result<LatLng, LocationError> {
        LatLng::parse_location(&self.location)
    }
}

/// Payload de escritura: el id lo asigna el almacén
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPointMarker {
    pub location: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: i64,
}

impl NewPointMarker {
    pub fn at(position: LatLng, time_stamp: i64) -> Self {
        Self {
            location: position.to_location_string(),
            time_stamp,
        }
    }

    /// Marca de tiempo actual (ms desde epoch)
    pub fn now(position: LatLng) -> Self {
        Self::at(position, chrono::Utc::now().timestamp_millis())
    }

    pub fn with_id(self, id: String) -> PointMarker {
        PointMarker {
            id,
            location: self.location,
            time_stamp: self.time_stamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marker_serializes_with_store_field_names() {
        let marker = NewPointMarker::at(LatLng::new(10.0, 20.5), 1_700_000_000_000);
        let json = serde_json::to_value(&marker).unwrap();

        assert_eq!(json["location"], "10,20.5");
        assert_eq!(json["timeStamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn now_stamps_a_recent_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let marker = NewPointMarker::now(LatLng::new(1.0, 2.0));
        assert!(marker.time_stamp >= before);
    }
}
