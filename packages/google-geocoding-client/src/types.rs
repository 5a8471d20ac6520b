use serde::{Deserialize, Serialize};

/// First candidate returned for an address lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw body of a `/geocode/json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeocodeCandidate> for GeocodedPlace {
    fn from(candidate: GeocodeCandidate) -> Self {
        Self {
            address: candidate.formatted_address,
            latitude: candidate.geometry.location.lat,
            longitude: candidate.geometry.location.lng,
        }
    }
}
