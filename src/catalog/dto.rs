use super::model::{Event, EventAction, Schedule};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Top-level remote document: `{ "events": [ ... ] }`
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<ResponseEvent>,
}

// Note: some String fields need the custom deserializer due to being optional
#[derive(Debug, Deserialize)]
pub struct ResponseEvent {
    pub id: u64,
    pub title: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub date: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub time: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub location: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub price: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub buttons: Vec<ResponseButton>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseButton {
    pub text: String,
    #[serde(rename = "class", deserialize_with = "deserialize_str", default)]
    pub style: String,
    #[serde(deserialize_with = "deserialize_str", default)]
    pub icon: String,
}

impl ResponseEvent {
    pub fn to_model(&self) -> Event {
        Event::new(
            self.id,
            self.title.to_string(),
            self.description.to_string(),
            Schedule::new(self.date.to_string(), self.time.to_string()),
            self.location.to_string(),
            self.price.to_string(),
            self.category.to_string(),
            self.buttons
                .iter()
                .map(|button| {
                    EventAction::new(
                        button.text.to_string(),
                        button.style.to_string(),
                        button.icon.to_string(),
                    )
                })
                .collect(),
        )
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s.parse().map_err(de::Error::custom)?,
        _ => String::new(),
    })
}
