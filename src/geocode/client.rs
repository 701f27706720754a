use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};
use serde::Deserialize;

use crate::config::LocationConfig;
use crate::types::LocationFix;

/// 反向地理编码线程
/// 逐条消费定位结果，向配置的 /reverse 接口发起一次查询，
/// 把显示字符串回传给GUI。查询失败不重试。

pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const LOCATION_ERROR: &str = "Error fetching location";
pub const GEOCODER_UNAVAILABLE: &str = "Geocoder not available";
pub const UNKNOWN_CITY: &str = "Unknown City";
pub const UNKNOWN_STATE: &str = "Unknown State";

#[derive(Debug, thiserror::Error)]
enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Nominatim 风格的 /reverse 响应，只保留用到的字段
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
}

pub fn run_geocode_worker(
    fix_receiver: Receiver<LocationFix>,
    result_sender: Sender<String>,
    config: LocationConfig,
) {
    if config.geocoder_url.trim().is_empty() {
        error!("Geocoder service not available");
        let _ = result_sender.send(GEOCODER_UNAVAILABLE.to_string());
        return;
    }

    let client = match reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build geocoding client: {}", e);
            let _ = result_sender.send(LOCATION_ERROR.to_string());
            return;
        }
    };

    // 串行消费定位结果，同一时刻最多一次在途查询
    for fix in fix_receiver.iter() {
        debug!(
            "Reverse geocoding lat: {}, lng: {}",
            fix.latitude, fix.longitude
        );

        let display = match fetch_address(&client, &config.geocoder_url, &fix) {
            Ok(response) => describe_address(response),
            Err(e) => {
                error!("Error in geocoding: {}", e);
                LOCATION_ERROR.to_string()
            }
        };

        if result_sender.send(display).is_err() {
            info!("Location result channel disconnected, geocode worker exiting");
            break;
        }
    }
}

fn fetch_address(
    client: &reqwest::blocking::Client,
    base_url: &str,
    fix: &LocationFix,
) -> Result<ReverseResponse, GeocodeError> {
    let url = format!("{}/reverse", base_url.trim_end_matches('/'));

    let response = client
        .get(url)
        .query(&[
            ("format", "jsonv2".to_string()),
            ("lat", fix.latitude.to_string()),
            ("lon", fix.longitude.to_string()),
        ])
        .send()?;

    if !response.status().is_success() {
        return Err(GeocodeError::Status(response.status()));
    }

    Ok(response.json()?)
}

/// 把响应映射为显示字符串，缺失字段用占位文本
fn describe_address(response: ReverseResponse) -> String {
    let Some(address) = response.address else {
        return LOCATION_NOT_FOUND.to_string();
    };

    let city = address
        .city
        .or(address.town)
        .or(address.village)
        .unwrap_or_else(|| UNKNOWN_CITY.to_string());
    let state = address
        .state
        .unwrap_or_else(|| UNKNOWN_STATE.to_string());

    format!("{}, {}", city, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_address_maps_to_not_found() {
        let response = ReverseResponse { address: None };
        assert_eq!(describe_address(response), LOCATION_NOT_FOUND);
    }

    #[test]
    fn city_and_state_are_joined() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"address": {"city": "Columbus", "state": "Ohio"}}"#).unwrap();
        assert_eq!(describe_address(response), "Columbus, Ohio");
    }

    #[test]
    fn town_and_village_back_fill_the_city() {
        let town: ReverseResponse =
            serde_json::from_str(r#"{"address": {"town": "Speedway", "state": "Indiana"}}"#)
                .unwrap();
        assert_eq!(describe_address(town), "Speedway, Indiana");

        let village: ReverseResponse =
            serde_json::from_str(r#"{"address": {"village": "Oolitic", "state": "Indiana"}}"#)
                .unwrap();
        assert_eq!(describe_address(village), "Oolitic, Indiana");
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"address": {"state": "Indiana"}}"#).unwrap();
        assert_eq!(describe_address(response), "Unknown City, Indiana");

        let response: ReverseResponse =
            serde_json::from_str(r#"{"address": {"city": "Bloomington"}}"#).unwrap();
        assert_eq!(describe_address(response), "Bloomington, Unknown State");
    }

    #[test]
    fn error_body_without_address_maps_to_not_found() {
        // Nominatim 对无法解析的坐标返回 {"error": "..."} 而不是 address
        let response: ReverseResponse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert_eq!(describe_address(response), LOCATION_NOT_FOUND);
    }
}
