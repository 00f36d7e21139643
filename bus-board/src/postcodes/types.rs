//! postcodes.io response DTOs.

use serde::Deserialize;

/// Envelope returned by `GET /postcodes/{postcode}`.
///
/// Successful lookups carry `result`; error envelopes omit it.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    pub result: Option<PostcodeResult>,
}

/// The subset of postcode data we use.
///
/// Coordinates are `null` for a handful of postcodes (e.g. Channel
/// Islands, some PO boxes), so both are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResult {
    pub postcode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success_envelope() {
        let json = r#"{
            "status": 200,
            "result": {
                "postcode": "SE7 7FH",
                "quality": 1,
                "eastings": 541206,
                "northings": 178020,
                "country": "England",
                "longitude": 0.005,
                "latitude": 51.483
            }
        }"#;

        let response: PostcodeResponse = serde_json::from_str(json).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.postcode, "SE7 7FH");
        assert_eq!(result.latitude, Some(51.483));
        assert_eq!(result.longitude, Some(0.005));
    }

    #[test]
    fn parse_error_envelope() {
        let json = r#"{"status": 404, "error": "Postcode not found"}"#;

        let response: PostcodeResponse = serde_json::from_str(json).unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn parse_null_coordinates() {
        let json = r#"{
            "status": 200,
            "result": {"postcode": "GY1 1AA", "latitude": null, "longitude": null}
        }"#;

        let response: PostcodeResponse = serde_json::from_str(json).unwrap();
        let result = response.result.unwrap();
        assert!(result.latitude.is_none());
        assert!(result.longitude.is_none());
    }
}
