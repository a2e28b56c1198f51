use serde::{Deserialize, Serialize};

/// Coordenada geográfica (grados decimales)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Error al interpretar un string "lat,lng" del almacén
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    MissingSeparator,
    InvalidNumber(String),
    NotFinite,
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::MissingSeparator => write!(f, "Location has no ',' separator"),
            LocationError::InvalidNumber(part) => write!(f, "Invalid coordinate: '{}'", part),
            LocationError::NotFinite => write!(f, "Coordinate is not finite"),
        }
    }
}

impl std::error::Error for LocationError {}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formato persistido: "lat,lng"
    pub fn to_location_string(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    /// Interpretar el campo `location` de un documento.
    /// Solo acepta exactamente dos números finitos.
    pub fn parse_location(raw: &str) -> Result<Self, LocationError> {
        let (lat, lng) = raw
            .split_once(',')
            .ok_or(LocationError::MissingSeparator)?;

        let lat = parse_coordinate(lat)?;
        let lng = parse_coordinate(lng)?;

        Ok(Self { lat, lng })
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

fn parse_coordinate(part: &str) -> Result<f64, LocationError> {
    let part = part.trim();
    let value: f64 = part
        .parse()
        .map_err(|_| LocationError::InvalidNumber(part.to_string()))?;

    if !value.is_finite() {
        return Err(LocationError::NotFinite);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_string_parses_back_to_the_same_point() {
        let point = LatLng::new(28.70, 77.10);
        let parsed = LatLng::parse_location(&point.to_location_string()).unwrap();

        assert!((parsed.lat - 28.70).abs() < 1e-9);
        assert!((parsed.lng - 77.10).abs() < 1e-9);
    }

    #[test]
    fn whitespace_around_coordinates_is_accepted() {
        let parsed = LatLng::parse_location(" -33.8688 , 151.2093 ").unwrap();
        assert_eq!(parsed, LatLng::new(-33.8688, 151.2093));
    }

    #[test]
    fn malformed_locations_are_rejected() {
        assert_eq!(
            LatLng::parse_location("not-a-number,77.1"),
            Err(LocationError::InvalidNumber("not-a-number".to_string()))
        );
        assert_eq!(LatLng::parse_location("28.7"), Err(LocationError::MissingSeparator));
        assert_eq!(LatLng::parse_location("28.7,"), Err(LocationError::InvalidNumber(String::new())));
        assert_eq!(LatLng::parse_location("NaN,77.1"), Err(LocationError::NotFinite));
        assert_eq!(LatLng::parse_location("28.7,inf"), Err(LocationError::NotFinite));
        assert!(LatLng::parse_location("1,2,3").is_err());
    }
}
