use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::Coordinates,
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeMatch {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    results: Vec<GeocodeMatch>,
}

/// Resolves a postal address to coordinates. An address the upstream API
/// cannot match is an input error, not an infrastructure failure.
#[tracing::instrument]
pub async fn resolve_address(address: &str) -> Result<Coordinates, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let url = format!("https://{}/maps/api/geocode/json", api_base);
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("address", address.to_owned())])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    coordinates_from(data)
}

fn coordinates_from(data: Response) -> Result<Coordinates, Error> {
    if data.status == "ZERO_RESULTS" {
        return Err(invalid_input_error());
    }

    if data.status != "OK" {
        return Err(upstream_error());
    }

    data.results
        .into_iter()
        .next()
        .map(|m| m.geometry.location)
        .ok_or_else(|| upstream_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_geocode_response() {
        let payload = r#"{
            "status": "OK",
            "results": [
                {
                    "formatted_address": "20 W 34th St, New York, NY 10001, USA",
                    "geometry": {
                        "location": { "lat": 40.7484405, "lng": -73.9878531 }
                    }
                }
            ]
        }"#;

        let data: Response = serde_json::from_str(payload).unwrap();

        assert_eq!(data.status, "OK");
        assert_eq!(
            coordinates_from(data).unwrap(),
            Coordinates {
                lat: 40.7484405,
                lng: -73.9878531,
            }
        );
    }

    #[test]
    fn an_unmatched_address_is_an_input_error() {
        let payload = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;

        let data: Response = serde_json::from_str(payload).unwrap();
        let err = coordinates_from(data).unwrap_err();

        assert_eq!(err.code, invalid_input_error().code);
    }

    #[test]
    fn an_upstream_denial_is_an_upstream_error() {
        let payload = r#"{ "status": "REQUEST_DENIED", "results": [] }"#;

        let data: Response = serde_json::from_str(payload).unwrap();
        let err = coordinates_from(data).unwrap_err();

        assert_eq!(err.code, upstream_error().code);
    }
}
