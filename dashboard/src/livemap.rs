use crate::client::ApiClient;
use crate::map_canvas;
use chrono::{DateTime, Utc};
use firecore::feed_interface::{ConfidenceTier, DetectionRecord, Satellite};
use firecore::markers::{BatchStats, FilterState, FireMarker, MarkerCollections};
use firecore::polling::PollPolicy;
use firecore::telemetry::MetricsRecorder;
use iced::widget::{
    canvas::{self, Canvas, Frame, Geometry, Path},
    checkbox, column, row, text, Column, Container,
};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme};
use std::time::Duration;

/// Live detection screen: polls the feed, keeps per-source marker
/// collections, and applies the two visibility facets.
#[derive(Debug)]
pub struct LiveFeed {
    collections: MarkerCollections,
    filters: FilterState,
    stats: Option<BatchStats>,
    last_update: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    policy: PollPolicy,
    selected: Option<DetectionRecord>,
    metrics: MetricsRecorder,
}

#[derive(Debug, Clone)]
pub enum Event {
    Tick,
    BatchFetched(Result<Vec<DetectionRecord>, String>),
    TierToggled(ConfidenceTier, bool),
    SourceToggled(Satellite, bool),
    MarkerPicked(Option<DetectionRecord>),
}

impl LiveFeed {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            collections: MarkerCollections::new(),
            filters: FilterState::all_enabled(),
            stats: None,
            last_update: None,
            consecutive_failures: 0,
            policy,
            selected: None,
            metrics: MetricsRecorder::new(),
        }
    }

    /// Immediate fetch when the screen is entered; the timer takes over
    /// afterwards.
    pub fn begin(&mut self, client: &ApiClient) -> Task<Event> {
        self.fetch(client)
    }

    pub fn poll_delay(&self) -> Duration {
        self.policy.delay_after(self.consecutive_failures)
    }

    pub fn update(&mut self, event: Event, client: &ApiClient) -> Task<Event> {
        match event {
            Event::Tick => self.fetch(client),
            Event::BatchFetched(Ok(batch)) => {
                self.apply_batch(batch, Utc::now());
                Task::none()
            }
            Event::BatchFetched(Err(message)) => {
                self.apply_failure(&message);
                Task::none()
            }
            Event::TierToggled(tier, enabled) => {
                self.filters.set_tier(tier, enabled);
                self.drop_hidden_selection();
                Task::none()
            }
            Event::SourceToggled(source, enabled) => {
                self.filters.set_source(source, enabled);
                self.drop_hidden_selection();
                Task::none()
            }
            Event::MarkerPicked(record) => {
                self.selected = record;
                Task::none()
            }
        }
    }

    fn fetch(&self, client: &ApiClient) -> Task<Event> {
        let client = client.clone();
        Task::perform(
            async move { client.fetch_fire_data().await },
            Event::BatchFetched,
        )
    }

    /// A successful poll replaces the whole batch: counters come from the
    /// full batch, never the filtered view.
    fn apply_batch(&mut self, batch: Vec<DetectionRecord>, now: DateTime<Utc>) {
        self.stats = Some(BatchStats::from_records(&batch, now));
        self.collections.replace_batch(batch);
        self.last_update = Some(now);
        self.consecutive_failures = 0;
        self.selected = None;
        self.metrics.record_poll_success();
    }

    /// A failed poll leaves markers and counters untouched; the feed is
    /// expected to self-correct on a later poll.
    fn apply_failure(&mut self, message: &str) {
        log::error!("Error fetching fire data: {message}");
        self.consecutive_failures += 1;
        self.metrics.record_poll_failure();
    }

    fn drop_hidden_selection(&mut self) {
        if let Some(record) = &self.selected {
            if !self.filters.allows(record) {
                self.selected = None;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let markers: Vec<FireMarker> = self.collections.visible(&self.filters).cloned().collect();
        let map = Canvas::new(DetectionMap {
            markers,
            selected: self
                .selected
                .as_ref()
                .map(|r| (r.latitude, r.longitude)),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut sidebar = column![text("Live Fire Map").size(26)].spacing(10);

        sidebar = sidebar.push(match &self.stats {
            Some(stats) => column![
                text(format!("Active fires: {}", stats.total)).size(15),
                text(format!("High confidence: {}", stats.high_confidence)).size(15),
                text(format!("Last 24 hours: {}", stats.last_24h)).size(15),
            ]
            .spacing(4),
            None => column![text("Waiting for fire data...").size(15)],
        });

        sidebar = sidebar.push(text(match &self.last_update {
            Some(when) => format!("Updated {}", when.format("%H:%M:%S UTC")),
            None => "Not updated yet".into(),
        })
        .size(12));

        sidebar = sidebar.push(text("Confidence").size(16));
        for tier in ConfidenceTier::ALL {
            sidebar = sidebar.push(
                checkbox(self.filters.is_tier_enabled(tier))
                    .label(tier.label())
                    .on_toggle(move |enabled| Event::TierToggled(tier, enabled))
                    .size(16),
            );
        }

        sidebar = sidebar.push(text("Satellites").size(16));
        for source in Satellite::ALL {
            sidebar = sidebar.push(
                checkbox(self.filters.is_source_enabled(source))
                    .label(source.label())
                    .on_toggle(move |enabled| Event::SourceToggled(source, enabled))
                    .size(16),
            );
        }

        if let Some(record) = &self.selected {
            let popup = record
                .popup_lines()
                .into_iter()
                .fold(
                    Column::new().push(text("Fire Detection").size(16)).spacing(4),
                    |col, line| col.push(text(line).size(13)),
                );
            sidebar = sidebar.push(Container::new(popup).padding(8));
        }

        let (succeeded, failed, _) = self.metrics.snapshot();
        sidebar = sidebar.push(
            text(format!("polls ok {succeeded} / failed {failed}")).size(11),
        );

        row![
            Container::new(sidebar)
                .padding(16)
                .width(Length::Fixed(260.0)),
            map
        ]
        .spacing(10)
        .into()
    }
}

/// Canvas rendering exactly the currently visible markers; clicks pick the
/// nearest marker for the info panel.
#[derive(Debug)]
struct DetectionMap {
    markers: Vec<FireMarker>,
    selected: Option<(f64, f64)>,
}

impl DetectionMap {
    fn marker_at(&self, position: Point, bounds: Rectangle) -> Option<&FireMarker> {
        let projection = map_canvas::projection(bounds.size());
        self.markers
            .iter()
            .map(|marker| {
                let (x, y) = projection.to_xy(marker.record.latitude, marker.record.longitude);
                let distance = ((x - position.x).powi(2) + (y - position.y).powi(2)).sqrt();
                (marker, distance)
            })
            .filter(|(marker, distance)| *distance <= marker.icon.size_px.max(8.0))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(marker, _)| marker)
    }
}

impl canvas::Program<Event> for DetectionMap {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Event>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let position = cursor.position_in(bounds)?;
            let picked = self.marker_at(position, bounds).map(|m| m.record.clone());
            return Some(canvas::Action::publish(Event::MarkerPicked(picked)));
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        map_canvas::draw_basemap(&mut frame, bounds.size());

        let projection = map_canvas::projection(bounds.size());
        for marker in &self.markers {
            let (x, y) = projection.to_xy(marker.record.latitude, marker.record.longitude);
            let center = Point::new(x, y);
            let radius = marker.icon.size_px / 2.0;
            let color = map_canvas::marker_color(marker.icon.color);

            // soft halo so hotspots read at low zoom
            let halo = Path::new(|builder| builder.circle(center, radius * 1.8));
            frame.fill(&halo, Color { a: 0.25, ..color });
            let dot = Path::new(|builder| builder.circle(center, radius));
            frame.fill(&dot, color);
        }

        if let Some((lat, lon)) = self.selected {
            let (x, y) = projection.to_xy(lat, lon);
            let ring = Path::new(|builder| builder.circle(Point::new(x, y), 10.0));
            frame.stroke(
                &ring,
                canvas::Stroke::default()
                    .with_color(Color::WHITE)
                    .with_width(1.5),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn record(
        satellite: Satellite,
        confidence: ConfidenceTier,
        hours_ago: i64,
    ) -> DetectionRecord {
        DetectionRecord {
            satellite,
            confidence,
            latitude: 21.0,
            longitude: 79.0,
            acq_date: Utc::now() - ChronoDuration::hours(hours_ago),
            brightness: 330.0,
            frp: 15.0,
        }
    }

    fn sample_batch() -> Vec<DetectionRecord> {
        vec![
            record(Satellite::Landsat, ConfidenceTier::High, 1),
            record(Satellite::Landsat, ConfidenceTier::High, 30),
            record(Satellite::Viirs, ConfidenceTier::Nominal, 2),
            record(Satellite::Viirs, ConfidenceTier::Low, 12),
            record(Satellite::Modis, ConfidenceTier::Low, 48),
        ]
    }

    #[test]
    fn successful_poll_replaces_batch_and_recomputes_stats() {
        let mut feed = LiveFeed::new(PollPolicy::default());
        feed.apply_batch(sample_batch(), Utc::now());

        let stats = feed.stats.unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.high_confidence, 2);
        assert_eq!(stats.last_24h, 3);
        assert_eq!(feed.collections.total(), 5);
        assert_eq!(feed.consecutive_failures, 0);
    }

    #[test]
    fn failed_poll_leaves_markers_and_counters_untouched() {
        let mut feed = LiveFeed::new(PollPolicy::default());
        feed.apply_batch(sample_batch(), Utc::now());
        let stats_before = feed.stats;
        let last_update_before = feed.last_update;

        feed.apply_failure("connection refused");

        assert_eq!(feed.collections.total(), 5);
        assert_eq!(feed.stats, stats_before);
        assert_eq!(feed.last_update, last_update_before);
        assert_eq!(feed.consecutive_failures, 1);
        assert_eq!(feed.metrics.snapshot(), (1, 1, 0));
    }

    #[test]
    fn failures_stretch_the_poll_delay_until_a_success() {
        let mut feed = LiveFeed::new(PollPolicy::default());
        assert_eq!(feed.poll_delay(), Duration::from_secs(10));

        feed.apply_failure("timeout");
        feed.apply_failure("timeout");
        assert_eq!(feed.poll_delay(), Duration::from_secs(40));

        feed.apply_batch(sample_batch(), Utc::now());
        assert_eq!(feed.poll_delay(), Duration::from_secs(10));
    }

    #[test]
    fn toggling_a_filter_hides_matching_markers_only() {
        let mut feed = LiveFeed::new(PollPolicy::default());
        feed.apply_batch(sample_batch(), Utc::now());
        assert_eq!(feed.collections.visible_count(&feed.filters), 5);

        feed.filters.set_tier(ConfidenceTier::Low, false);
        assert_eq!(feed.collections.visible_count(&feed.filters), 3);

        feed.filters.set_tier(ConfidenceTier::Low, true);
        assert_eq!(feed.collections.visible_count(&feed.filters), 5);
    }

    #[test]
    fn hiding_the_selected_marker_closes_its_popup() {
        let mut feed = LiveFeed::new(PollPolicy::default());
        feed.apply_batch(sample_batch(), Utc::now());
        feed.selected = Some(record(Satellite::Modis, ConfidenceTier::Low, 1));

        feed.filters.set_source(Satellite::Modis, false);
        feed.drop_hidden_selection();
        assert!(feed.selected.is_none());
    }
}
