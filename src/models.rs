//! Upstream record shapes, republished verbatim on the public endpoints.
//!
//! - [`Story`]: a Hacker News item
//! - [`HourlyForecast`] / [`Temperature`]: one AccuWeather hourly entry
//! - [`StopStatus`] / [`BusArrival`]: Dublin Bus real-time info for one stop
//!
//! Every struct is `#[serde(default)]`: the upstreams routinely omit fields
//! (a link story has no `text`, a fresh story no `kids`), and a missing field
//! decodes to its zero value instead of failing the whole feed. Malformed
//! JSON or a wrong top-level type still fails to decode.

use serde::{Deserialize, Serialize};

/// A Hacker News story as returned by `/v0/item/{id}.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Story {
    /// Username of the submitter.
    pub by: String,
    /// Total comment count.
    pub descendants: i64,
    /// Same id space as the top-stories index.
    pub id: u64,
    /// Ids of top-level comments, in ranked order.
    pub kids: Vec<u64>,
    pub score: i64,
    /// Submission time, Unix seconds.
    pub time: i64,
    pub title: String,
    /// HTML body for Ask/Show HN posts; empty for link posts.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Temperature reading inside an [`HourlyForecast`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Temperature {
    pub value: f64,
    pub unit: String,
}

/// One entry of the AccuWeather 12-hour hourly forecast.
///
/// AccuWeather returns many more fields; only these four are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HourlyForecast {
    /// ISO-8601 local timestamp, e.g. `2026-10-19T14:00:00+01:00`.
    pub date_time: String,
    pub icon_phrase: String,
    pub temperature: Temperature,
    pub precipitation_probability: i64,
}

/// A single scheduled or real-time arrival at a stop.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BusArrival {
    #[serde(rename = "arrivaldatetime")]
    pub eta: String,
    /// Minutes until arrival, or `"Due"`.
    #[serde(rename = "duetime")]
    pub due_minutes: String,
    #[serde(rename = "scheduledarrivaldatetime")]
    pub scheduled_arrival: String,
    pub destination: String,
    pub origin: String,
}

/// Real-time passenger information for one stop.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StopStatus {
    #[serde(rename = "errorcode")]
    pub error_code: String,
    #[serde(rename = "errormessage")]
    pub error_message: String,
    #[serde(rename = "numberofresults")]
    pub result_count: i64,
    #[serde(rename = "stopid")]
    pub stop_id: String,
    pub timestamp: String,
    pub results: Vec<BusArrival>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_story_missing_fields_default() {
        let story: Story = serde_json::from_value(json!({
            "by": "pg",
            "id": 1,
            "score": 57,
            "time": 1160418111,
            "title": "Y Combinator",
            "type": "story",
            "url": "http://ycombinator.com"
        }))
        .unwrap();

        assert_eq!(story.by, "pg");
        assert_eq!(story.kind, "story");
        assert!(story.kids.is_empty());
        assert_eq!(story.text, "");
        assert_eq!(story.descendants, 0);
    }

    #[test]
    fn test_story_serializes_every_field() {
        let value = serde_json::to_value(Story::default()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "by",
            "descendants",
            "id",
            "kids",
            "score",
            "time",
            "title",
            "text",
            "type",
            "url",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 10);
    }

    #[test]
    fn test_story_id_is_unsigned() {
        let story: Story = serde_json::from_value(json!({ "id": 45_000_000_001u64, "kids": [1, 2] })).unwrap();
        assert_eq!(story.id, 45_000_000_001);
        assert!(serde_json::from_value::<Story>(json!({ "id": -1 })).is_err());
    }

    #[test]
    fn test_story_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Story>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Story>(r#"{"id": "#).is_err());
    }

    #[test]
    fn test_forecast_keeps_only_known_fields() {
        let forecast: HourlyForecast = serde_json::from_value(json!({
            "DateTime": "2026-10-19T14:00:00+01:00",
            "EpochDateTime": 1792414800,
            "WeatherIcon": 12,
            "IconPhrase": "Showers",
            "Temperature": { "Value": 11.4, "Unit": "C", "UnitType": 17 },
            "PrecipitationProbability": 62
        }))
        .unwrap();

        assert_eq!(forecast.icon_phrase, "Showers");
        assert_eq!(forecast.temperature.unit, "C");
        assert_eq!(forecast.precipitation_probability, 62);

        let out = serde_json::to_value(&forecast).unwrap();
        assert_eq!(
            out,
            json!({
                "DateTime": "2026-10-19T14:00:00+01:00",
                "IconPhrase": "Showers",
                "Temperature": { "Value": 11.4, "Unit": "C" },
                "PrecipitationProbability": 62
            })
        );
    }

    #[test]
    fn test_stop_status_field_names() {
        let status: StopStatus = serde_json::from_value(json!({
            "errorcode": "0",
            "errormessage": "",
            "numberofresults": 1,
            "stopid": "700",
            "timestamp": "19/10/2026 14:02:11",
            "results": [{
                "arrivaldatetime": "19/10/2026 14:09:00",
                "duetime": "6",
                "scheduledarrivaldatetime": "19/10/2026 14:08:00",
                "destination": "Heuston Station",
                "origin": "Clongriffin",
                "route": "145"
            }]
        }))
        .unwrap();

        assert_eq!(status.stop_id, "700");
        assert_eq!(status.result_count, 1);
        assert_eq!(status.results[0].due_minutes, "6");
        assert_eq!(status.results[0].destination, "Heuston Station");

        let out = serde_json::to_value(&status).unwrap();
        assert_eq!(out["results"][0]["scheduledarrivaldatetime"], "19/10/2026 14:08:00");
        assert!(out["results"][0].get("route").is_none());
        assert_eq!(out["timestamp"], "19/10/2026 14:02:11");
    }
}
