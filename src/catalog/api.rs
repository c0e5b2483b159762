use super::dto::EventsResponse;
use super::model::{Event, EventAction, Schedule};
use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::time::Duration;
use tracing::{error, info};

const MAX_RETRIES: u32 = 5;
// The remote has no timeout of its own; without this a stalled fetch
// would block catalog readiness forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Error creating http client")
    )
    .with(RetryTransientMiddleware::new_with_policy(
        ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
    ))
    .build();
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("request rejected: {0}")]
    Status(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Where the catalog gets its full event set from. The catalog owns the
/// fallback; a source only reports success or failure.
pub trait EventSource {
    fn fetch_events(&self) -> impl std::future::Future<Output = Result<Vec<Event>, ApiError>>;
}

/// Fetches the event document from a static JSON resource.
#[derive(Debug)]
pub struct RemoteEventSource {
    url: String,
}

impl RemoteEventSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl EventSource for RemoteEventSource {
    #[tracing::instrument(fields(url = %self.url))]
    async fn fetch_events(&self) -> Result<Vec<Event>, ApiError> {
        let json_response = REST_CLIENT
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let parsed_response = serde_json::from_str::<EventsResponse>(&json_response);

        match parsed_response {
            Ok(parsed_response) => {
                info!("Got {} events", parsed_response.events.len());

                Ok(parsed_response
                    .events
                    .iter()
                    .map(|response| response.to_model())
                    .collect())
            }
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(ApiError::InvalidResponse(e))
            }
        }
    }
}

/// Built-in events shown when the remote source is unreachable or
/// returns garbage. Keeps the catalog non-empty after every load.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Renaissance Revisited".to_string(),
            "A contemporary reinterpretation of Renaissance masterpieces by emerging artists."
                .to_string(),
            Schedule::new(
                "June 15-30, 2025".to_string(),
                "10:00 AM - 6:00 PM Daily".to_string(),
            ),
            "Grand Art Gallery, Florence".to_string(),
            "€15 (Students €10)".to_string(),
            "exhibition".to_string(),
            vec![
                EventAction::new(
                    "Book Tickets".to_string(),
                    "btn-primary".to_string(),
                    "fas fa-ticket-alt".to_string(),
                ),
                EventAction::new(
                    "More Details".to_string(),
                    "btn-secondary".to_string(),
                    "fas fa-info-circle".to_string(),
                ),
            ],
        ),
        Event::new(
            2,
            "Pottery Basics".to_string(),
            "A beginner-friendly wheel-throwing workshop led by resident ceramicists.".to_string(),
            Schedule::new("July 5, 2025".to_string(), "2:00 PM - 5:00 PM".to_string()),
            "Studio Wing, Room 3".to_string(),
            "€25 (Materials included)".to_string(),
            "workshop".to_string(),
            vec![
                EventAction::new(
                    "Register Now".to_string(),
                    "btn-primary".to_string(),
                    "fas fa-pen".to_string(),
                ),
                EventAction::new(
                    "Workshop Details".to_string(),
                    "btn-secondary".to_string(),
                    "fas fa-info-circle".to_string(),
                ),
            ],
        ),
        Event::new(
            3,
            "Summer Arts Festival".to_string(),
            "An open-air festival of music, street performance and local crafts.".to_string(),
            Schedule::new(
                "August 9-11, 2025".to_string(),
                "12:00 PM - 10:00 PM".to_string(),
            ),
            "Museum Gardens".to_string(),
            "Free entry".to_string(),
            "festival".to_string(),
            vec![
                EventAction::new(
                    "View Schedule".to_string(),
                    "btn-primary".to_string(),
                    "fas fa-calendar".to_string(),
                ),
                EventAction::new(
                    "Event Guide".to_string(),
                    "btn-secondary".to_string(),
                    "fas fa-map".to_string(),
                ),
            ],
        ),
    ]
}
