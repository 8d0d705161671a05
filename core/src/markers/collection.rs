use crate::feed_interface::{DetectionRecord, Satellite};
use crate::markers::filter::FilterState;
use crate::markers::icon::MarkerIcon;
use crate::telemetry::LogManager;

/// One renderable marker: the detection plus its precomputed icon.
/// Visibility is never stored here; it is derived from the filter state
/// at render time.
#[derive(Debug, Clone)]
pub struct FireMarker {
    pub record: DetectionRecord,
    pub icon: MarkerIcon,
}

impl FireMarker {
    pub fn new(record: DetectionRecord) -> Self {
        let icon = MarkerIcon::for_detection(record.satellite, record.confidence);
        Self { record, icon }
    }
}

/// Per-satellite marker collections. Every record of the current batch is
/// kept regardless of filter state so a later toggle can reveal it without
/// a re-fetch; each poll replaces the whole batch.
#[derive(Debug, Default)]
pub struct MarkerCollections {
    landsat: Vec<FireMarker>,
    viirs: Vec<FireMarker>,
    modis: Vec<FireMarker>,
    logger: LogManager,
}

impl MarkerCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous batch and rebuilds all per-source collections.
    pub fn replace_batch(&mut self, records: Vec<DetectionRecord>) {
        self.landsat.clear();
        self.viirs.clear();
        self.modis.clear();
        for record in records {
            let marker = FireMarker::new(record);
            self.for_source_mut(marker.record.satellite).push(marker);
        }
        self.logger
            .record(&format!("marker batch replaced, {} records", self.total()));
    }

    pub fn for_source(&self, source: Satellite) -> &[FireMarker] {
        match source {
            Satellite::Landsat => &self.landsat,
            Satellite::Viirs => &self.viirs,
            Satellite::Modis => &self.modis,
        }
    }

    fn for_source_mut(&mut self, source: Satellite) -> &mut Vec<FireMarker> {
        match source {
            Satellite::Landsat => &mut self.landsat,
            Satellite::Viirs => &mut self.viirs,
            Satellite::Modis => &mut self.modis,
        }
    }

    pub fn total(&self) -> usize {
        self.landsat.len() + self.viirs.len() + self.modis.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FireMarker> {
        self.landsat
            .iter()
            .chain(self.viirs.iter())
            .chain(self.modis.iter())
    }

    /// The markers currently allowed onto the map.
    pub fn visible<'a>(&'a self, filters: &'a FilterState) -> impl Iterator<Item = &'a FireMarker> {
        self.iter().filter(move |m| filters.allows(&m.record))
    }

    pub fn visible_count(&self, filters: &FilterState) -> usize {
        self.visible(filters).count()
    }
}
