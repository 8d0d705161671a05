use crate::client::ApiClient;
use crate::map_canvas;
use firecore::feed_interface::{PredictionRequest, PredictionResult};
use firecore::geo::Coordinate;
use iced::widget::{
    button,
    canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
    column, progress_bar, row, text, text_input, Column, Container,
};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme};

/// Point-prediction screen: pick a coordinate on the map, submit it, and
/// render the returned risk metrics.
#[derive(Debug, Default)]
pub struct PredictController {
    latitude_field: String,
    longitude_field: String,
    selected: Option<Coordinate>,
    result: Option<PredictionResult>,
    error: Option<String>,
    loading: bool,
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum Event {
    LocationPicked(Coordinate),
    LatitudeChanged(String),
    LongitudeChanged(String),
    Submit,
    Fetched(u64, Result<PredictionResult, String>),
}

impl PredictController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: Event, client: &ApiClient) -> Task<Event> {
        match event {
            Event::LocationPicked(coord) => {
                self.apply_location(coord);
                Task::none()
            }
            Event::LatitudeChanged(value) => {
                self.latitude_field = value;
                self.sync_selection_from_fields();
                Task::none()
            }
            Event::LongitudeChanged(value) => {
                self.longitude_field = value;
                self.sync_selection_from_fields();
                Task::none()
            }
            Event::Submit => match self.validate_fields() {
                Ok(coord) => {
                    self.generation += 1;
                    self.loading = true;
                    self.error = None;
                    let generation = self.generation;
                    let client = client.clone();
                    Task::perform(
                        async move {
                            client
                                .predict(PredictionRequest {
                                    lat: coord.lat,
                                    lon: coord.lon,
                                })
                                .await
                        },
                        move |result| Event::Fetched(generation, result),
                    )
                }
                Err(message) => {
                    self.error = Some(message);
                    Task::none()
                }
            },
            Event::Fetched(generation, result) => {
                self.apply_fetched(generation, result);
                Task::none()
            }
        }
    }

    fn apply_location(&mut self, coord: Coordinate) {
        let (lat, lon) = coord.field_values();
        self.latitude_field = lat;
        self.longitude_field = lon;
        self.selected = Some(coord);
    }

    fn sync_selection_from_fields(&mut self) {
        let parsed = self
            .latitude_field
            .trim()
            .parse::<f64>()
            .ok()
            .zip(self.longitude_field.trim().parse::<f64>().ok())
            .and_then(|(lat, lon)| Coordinate::new(lat, lon).ok());
        self.selected = parsed;
    }

    /// Submit precondition: both fields present, numeric, and in range.
    /// Failing here never issues a network call.
    fn validate_fields(&self) -> Result<Coordinate, String> {
        if self.latitude_field.trim().is_empty() || self.longitude_field.trim().is_empty() {
            return Err("Please select a location on the map first".into());
        }
        let lat = self
            .latitude_field
            .trim()
            .parse::<f64>()
            .map_err(|_| "Please select a valid location on the map".to_string())?;
        let lon = self
            .longitude_field
            .trim()
            .parse::<f64>()
            .map_err(|_| "Please select a valid location on the map".to_string())?;
        Coordinate::new(lat, lon).map_err(|_| "Invalid coordinates range".to_string())
    }

    /// Only the response matching the latest generation is applied; a
    /// superseded request cannot overwrite a newer result.
    fn apply_fetched(&mut self, generation: u64, result: Result<PredictionResult, String>) {
        if generation != self.generation {
            log::debug!("dropping stale prediction response (generation {generation})");
            return;
        }
        self.loading = false;
        match result {
            Ok(prediction) => {
                self.result = Some(prediction);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(format!("Error getting prediction: {message}"));
            }
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let map = Canvas::new(SelectionMap {
            selected: self.selected,
        })
        .width(Length::Fill)
        .height(Length::Fixed(420.0));

        let caption = match &self.selected {
            Some(coord) => coord.caption(),
            None => "Click the map to choose a location".into(),
        };

        let map_column = column![map, text(caption).size(14)]
            .spacing(8)
            .width(Length::FillPortion(3));

        let mut panel = column![
            text("Fire Risk Prediction").size(26),
            text_input("Latitude", &self.latitude_field)
                .on_input(Event::LatitudeChanged)
                .padding(6),
            text_input("Longitude", &self.longitude_field)
                .on_input(Event::LongitudeChanged)
                .padding(6),
            button("Predict").on_press(Event::Submit).padding(10),
        ]
        .spacing(10);

        if self.loading {
            panel = panel.push(text("Calculating risk...").size(14));
        }
        if let Some(error) = &self.error {
            panel = panel.push(text(error).size(14).color(Color::from_rgb(0.9, 0.3, 0.3)));
        }
        if let Some(result) = &self.result {
            panel = panel.push(results_panel(result));
        }

        let layout = row![
            map_column,
            Container::new(panel)
                .padding(16)
                .width(Length::FillPortion(2))
        ]
        .spacing(20)
        .padding(10);

        layout.into()
    }
}

fn risk_color(class: &str) -> Color {
    match class {
        "low-risk" => Color::from_rgb(0.35, 0.78, 0.42),
        "moderate-risk" => Color::from_rgb(0.95, 0.82, 0.25),
        "high-risk" => Color::from_rgb(0.96, 0.55, 0.20),
        "extreme-risk" => Color::from_rgb(0.92, 0.26, 0.21),
        _ => Color::WHITE,
    }
}

fn results_panel(result: &PredictionResult) -> Column<'_, Event> {
    let weather = &result.weather;
    column![
        text(&result.risk_level)
            .size(22)
            .color(risk_color(&result.risk_class())),
        progress_bar(0.0..=100.0, result.probability as f32).girth(Length::Fixed(10.0)),
        text(format!("Risk probability: {:.0}%", result.probability)).size(16),
        text(format!(
            "Temperature factor: {:.0}%  Vegetation factor: {:.0}%",
            result.temp_probability, result.veg_probability
        ))
        .size(13),
        text("Weather").size(16),
        text(format!("Temperature: {:.1}°C", weather.temperature)).size(13),
        text(format!("Humidity: {:.0}%", weather.humidity)).size(13),
        text(format!("Wind speed: {:.1} m/s", weather.wind_speed)).size(13),
        text(format!("Pressure: {:.0} hPa", weather.pressure)).size(13),
        text(format!("NDVI: {:.2}", weather.ndvi)).size(13),
        text(format!(
            "Rain: {:.1} mm ({:.0}% chance)  Snow: {:.0}% chance",
            weather.rain, weather.rain_probability, weather.snow_probability
        ))
        .size(13),
        text("Fire weather indices").size(16),
        text(format!(
            "FFMC {:.1}  DMC {:.1}  DC {:.1}",
            weather.ffmc, weather.dmc, weather.dc
        ))
        .size(13),
        text(format!(
            "ISI {:.1}  BUI {:.1}  FWI {:.1}",
            weather.isi, weather.bui, weather.fwi
        ))
        .size(13),
    ]
    .spacing(6)
}

/// Map canvas that reports left clicks as picked coordinates and draws
/// the current selection marker.
#[derive(Debug, Clone, Copy)]
struct SelectionMap {
    selected: Option<Coordinate>,
}

impl canvas::Program<Event> for SelectionMap {
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
            let projection = map_canvas::projection(bounds.size());
            let coord = projection.to_coordinate(position.x, position.y);
            return Some(canvas::Action::publish(Event::LocationPicked(coord)));
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

        if let Some(coord) = self.selected {
            let projection = map_canvas::projection(bounds.size());
            let (x, y) = projection.to_xy(coord.lat, coord.lon);
            let center = Point::new(x, y);

            let crosshair = Path::new(|builder| {
                builder.move_to(Point::new(x - 10.0, y));
                builder.line_to(Point::new(x + 10.0, y));
                builder.move_to(Point::new(x, y - 10.0));
                builder.line_to(Point::new(x, y + 10.0));
            });
            frame.stroke(
                &crosshair,
                Stroke::default()
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89))
                    .with_width(1.5),
            );
            let ring = Path::new(|builder| builder.circle(center, 6.0));
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_color(Color::from_rgb(0.18, 0.72, 0.89))
                    .with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }
}
