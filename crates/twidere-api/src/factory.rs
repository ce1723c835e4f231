//! Response factory: raw [`HttpResponse`] to typed values.
//!
//! Each function takes the response of one endpoint call and either returns
//! the decoded value or a [`TwitterError`]. None of them perform I/O.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{TwitterError, TwitterResult};
use crate::http::HttpResponse;
use crate::types::{
    Ids, PagableResponseList, Place, ProfileImage, QueryResult, RelatedResults, Relationship,
    ResponseList, SimilarPlaces, Status, Trend, Trends, twitter_date,
};

/// Single JSON object.
pub fn object<T: DeserializeOwned>(response: &HttpResponse) -> TwitterResult<T> {
    response.json()
}

/// JSON array as a [`ResponseList`] carrying the response headers.
pub fn list<T: DeserializeOwned>(response: &HttpResponse) -> TwitterResult<ResponseList<T>> {
    Ok(wrap(response, response.json()?))
}

/// Array nested under `field` of the top-level object.
pub fn list_from_field<T: DeserializeOwned>(
    response: &HttpResponse,
    field: &str,
) -> TwitterResult<ResponseList<T>> {
    let mut value: serde_json::Value = response.json()?;
    let items = value
        .get_mut(field)
        .map(serde_json::Value::take)
        .ok_or_else(|| missing(field))?;
    Ok(wrap(response, serde_json::from_value(items)?))
}

/// Cursor-paged list nested under `field`.
pub fn pagable_list<T: DeserializeOwned>(
    response: &HttpResponse,
    field: &str,
) -> TwitterResult<PagableResponseList<T>> {
    #[derive(Deserialize)]
    struct Cursors {
        #[serde(default)]
        previous_cursor: i64,
        #[serde(default)]
        next_cursor: i64,
    }

    let cursors: Cursors = response.json()?;
    Ok(PagableResponseList {
        list: list_from_field(response, field)?,
        previous_cursor: cursors.previous_cursor,
        next_cursor: cursors.next_cursor,
    })
}

/// Empty list for endpoints that answer "nothing" with an error status.
#[must_use]
pub fn empty_list<T>() -> ResponseList<T> {
    ResponseList::default()
}

/// `{"ids": [...], "next_cursor": ..}` or a bare array of ids.
pub fn ids(response: &HttpResponse) -> TwitterResult<Ids> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIds {
        Paged(Ids),
        Bare(Vec<u64>),
    }

    Ok(match response.json()? {
        RawIds::Paged(ids) => ids,
        RawIds::Bare(ids) => Ids {
            ids,
            ..Ids::default()
        },
    })
}

/// Search API page. The search API reports its own rate limit via headers
/// like the REST API, so nothing extra is captured.
pub fn query_result(response: &HttpResponse) -> TwitterResult<QueryResult> {
    response.json()
}

/// `trends/{woeid}` answers a one-element array.
pub fn trends(response: &HttpResponse) -> TwitterResult<Trends> {
    let list: Vec<Trends> = response.json()?;
    list.into_iter()
        .next()
        .ok_or_else(|| TwitterError::UnexpectedResponse("empty trends array".into()))
}

/// Daily/weekly trends: `{"as_of": epoch, "trends": {"2012-08-23 10:00": [..]}}`.
///
/// Returned sorted by time slot, oldest first.
pub fn trends_list(response: &HttpResponse) -> TwitterResult<ResponseList<Trends>> {
    #[derive(Deserialize)]
    struct Raw {
        #[serde(with = "twitter_date")]
        as_of: chrono::DateTime<Utc>,
        trends: BTreeMap<String, Vec<Trend>>,
    }

    let raw: Raw = response.json()?;
    let items = raw
        .trends
        .into_iter()
        .map(|(slot, trends)| Trends {
            as_of: raw.as_of,
            trend_at: parse_trend_slot(&slot),
            trends,
            locations: Vec::new(),
        })
        .collect();
    Ok(wrap(response, items))
}

fn parse_trend_slot(slot: &str) -> Option<chrono::DateTime<Utc>> {
    NaiveDateTime::parse_from_str(slot, "%Y-%m-%d %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(slot, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `{"relationship": {"source": .., "target": ..}}`.
pub fn relationship(response: &HttpResponse) -> TwitterResult<Relationship> {
    #[derive(Deserialize)]
    struct Envelope {
        relationship: Relationship,
    }

    let envelope: Envelope = response.json()?;
    Ok(envelope.relationship)
}

/// `{"result": {"places": [..]}}`.
pub fn places(response: &HttpResponse) -> TwitterResult<ResponseList<Place>> {
    let result = result_object(response)?;
    let places = result
        .get("places")
        .cloned()
        .ok_or_else(|| missing("result.places"))?;
    Ok(wrap(response, serde_json::from_value(places)?))
}

/// `{"result": {"places": [..], "token": ".."}}`.
pub fn similar_places(response: &HttpResponse) -> TwitterResult<SimilarPlaces> {
    let result = result_object(response)?;
    Ok(serde_json::from_value(result)?)
}

fn result_object(response: &HttpResponse) -> TwitterResult<serde_json::Value> {
    let mut value: serde_json::Value = response.json()?;
    value
        .get_mut("result")
        .map(serde_json::Value::take)
        .ok_or_else(|| missing("result"))
}

/// String field of a top-level object (legal endpoints).
pub fn string_field(response: &HttpResponse, field: &str) -> TwitterResult<String> {
    let value: serde_json::Value = response.json()?;
    value
        .get(field)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(field))
}

/// Whether the raw body contains `needle`.
pub fn contains(response: &HttpResponse, needle: &str) -> TwitterResult<bool> {
    Ok(response.as_str()?.contains(needle))
}

/// `users/profile_image` redirects to the image; the target is the result.
pub fn profile_image(response: &HttpResponse) -> TwitterResult<ProfileImage> {
    response
        .location
        .clone()
        .map(|url| ProfileImage { url })
        .ok_or_else(|| {
            TwitterError::UnexpectedResponse(format!(
                "expected redirect with Location, got status {}",
                response.status
            ))
        })
}

/// Groups of `{"groupName": .., "results": [{"kind": "Tweet", "value": {..}}]}`.
pub fn related_results(response: &HttpResponse) -> TwitterResult<RelatedResults> {
    #[derive(Deserialize)]
    struct Group {
        #[serde(rename = "groupName", default)]
        group_name: String,
        #[serde(default)]
        results: Vec<Entry>,
    }

    #[derive(Deserialize)]
    struct Entry {
        #[serde(default)]
        kind: String,
        value: serde_json::Value,
    }

    let groups: Vec<Group> = response.json()?;
    let mut related = RelatedResults::default();
    for group in groups {
        let statuses = group
            .results
            .into_iter()
            .filter(|e| e.kind == "Tweet")
            .map(|e| serde_json::from_value::<Status>(e.value))
            .collect::<Result<Vec<_>, _>>()?;
        match group.group_name.as_str() {
            "TweetsWithConversation" => related.tweets_with_conversation.extend(statuses),
            "TweetsWithReply" => related.tweets_with_reply.extend(statuses),
            "TweetsFromUser" => related.tweets_from_user.extend(statuses),
            _ => {}
        }
    }
    Ok(related)
}

fn wrap<T>(response: &HttpResponse, items: Vec<T>) -> ResponseList<T> {
    ResponseList {
        items,
        rate_limit: response.rate_limit,
        access_level: response.access_level,
    }
}

fn missing(field: &str) -> TwitterError {
    TwitterError::UnexpectedResponse(format!("missing field `{field}`"))
}
