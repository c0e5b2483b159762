use museumguide::catalog::api::RemoteEventSource;
use museumguide::catalog::state::EventCatalog;
use museumguide::catalog::view::{Feedback, MarkupSink, Notifier};
use museumguide::config::env_loader::load_config;
use museumguide::tracing::setup_loki;
use tracing::info;

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::BookingRequested { title } => {
                info!("Booking requested for: {title}")
            }
            Feedback::Details(details) => {
                info!(
                    "{}\n\nDate: {}\nTime: {}\nLocation: {}\nPrice: {}\n\n{}",
                    details.title,
                    details.date,
                    details.time,
                    details.location,
                    details.price,
                    details.description
                )
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;
    let config = load_config();

    let mut catalog = EventCatalog::new(RemoteEventSource::new(config.events_url))
        .with_filter_mode(config.filter_mode);

    catalog.attach_sink(Box::new(MarkupSink::new()));
    catalog.init().await.expect("Catalog failed to initialize");

    let cards = catalog.render();
    let shown = config.debug_config.event_limit.unwrap_or(cards.len());

    for card in cards.iter().take(shown) {
        info!(
            "{} [{}] on {} at {}",
            card.title, card.category, card.date, card.location
        );
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        handle.await.expect("Loki task failed");
    }
}
