//! Dublin Bus real-time arrivals, one record per configured stop.

use axum::Json;
use axum::extract::State;
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument};

use crate::error::{Feed, FeedError, UpstreamError};
use crate::models::StopStatus;
use crate::pool::FetchPool;
use crate::server::AppState;
use crate::upstream::UpstreamClient;

/// Upper bound on concurrent RTPI calls per request.
const MAX_BUS_WORKERS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

fn bus_pool(stops: usize) -> FetchPool {
    let workers = NonZeroUsize::new(stops).map_or(MAX_BUS_WORKERS, |n| n.min(MAX_BUS_WORKERS));
    FetchPool::new(workers)
}

/// Arrivals for every stop, in the order the stops are listed.
#[instrument(level = "info", skip(upstream))]
pub async fn arrivals(upstream: &UpstreamClient, stops: &[u32]) -> Result<Vec<StopStatus>, UpstreamError> {
    let pool = bus_pool(stops.len());
    debug!(stops = stops.len(), workers = pool.workers(), "Fanning out stop lookups");
    let statuses = pool
        .fetch_all(stops.to_vec(), |stop| upstream.stop_arrivals(stop))
        .await?;

    info!(
        stops = statuses.len(),
        arrivals = statuses.iter().map(|s| s.results.len()).sum::<usize>(),
        "Fetched stop arrivals"
    );
    Ok(statuses)
}

/// `GET /bus`
pub async fn get_buses(State(state): State<AppState>) -> Result<Json<Vec<StopStatus>>, FeedError> {
    arrivals(&state.upstream, &state.config.bus_stops)
        .await
        .map(Json)
        .map_err(|e| FeedError::new(Feed::Bus, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_app;
    use crate::server::testing::{body_bytes, config, content_type, get, state_for};
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use std::path::Path;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate, Times};

    async fn mount_stop(server: &MockServer, stop: u32, delay_ms: u64, expected_calls: impl Into<Times>) {
        Mock::given(method("GET"))
            .and(path("/cgi-bin/rtpi/realtimebusinformation"))
            .and(query_param("stopid", stop.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "errorcode": "0",
                        "errormessage": "",
                        "numberofresults": 1,
                        "stopid": stop.to_string(),
                        "timestamp": "19/10/2026 14:02:11",
                        "results": [{
                            "arrivaldatetime": "19/10/2026 14:09:00",
                            "duetime": "6",
                            "scheduledarrivaldatetime": "19/10/2026 14:08:00",
                            "destination": format!("Terminus {stop}"),
                            "origin": "City Centre"
                        }]
                    }))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[test]
    fn test_bus_pool_width() {
        assert_eq!(bus_pool(0).workers(), 4);
        assert_eq!(bus_pool(2).workers(), 2);
        assert_eq!(bus_pool(9).workers(), 4);
    }

    #[tokio::test]
    async fn test_bus_keeps_configured_stop_order() {
        let server = MockServer::start().await;
        // 701 answers well before 700.
        mount_stop(&server, 700, 150, 1).await;
        mount_stop(&server, 701, 0, 1).await;

        let app = build_app(state_for(&server, config(0, 1, vec![700, 701])), Path::new("pages"));
        let res = get(app, "/bus").await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(content_type(&res).starts_with("application/json"));

        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        let stops: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["stopid"].as_str().unwrap())
            .collect();
        assert_eq!(stops, vec!["700", "701"]);
        assert_eq!(body[1]["results"][0]["destination"], "Terminus 701");
        assert_eq!(body[0]["results"][0]["duetime"], "6");
    }

    #[tokio::test]
    async fn test_bus_no_stops_is_empty_array() {
        let server = MockServer::start().await;
        let app = build_app(state_for(&server, config(0, 1, vec![])), Path::new("pages"));
        let res = get(app, "/bus").await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_bytes(res).await, b"[]");
    }

    #[tokio::test]
    async fn test_bus_one_bad_stop_fails_response() {
        let server = MockServer::start().await;
        mount_stop(&server, 700, 0, 0..=1).await;
        Mock::given(path("/cgi-bin/rtpi/realtimebusinformation"))
            .and(query_param("stopid", "701"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let app = build_app(state_for(&server, config(0, 1, vec![700, 701])), Path::new("pages"));
        let res = get(app, "/bus").await;

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_bytes(res).await, b"Error retrieving bus times");
    }
}
