use firecore::geo::MapProjection;
use firecore::markers::Rgb;
use iced::widget::canvas::{Frame, Path, Stroke};
use iced::{Color, Point, Size};

pub fn projection(size: Size) -> MapProjection {
    MapProjection::new(size.width, size.height)
}

pub fn marker_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

/// Dark basemap with a 30-degree graticule; no tile imagery is fetched.
pub fn draw_basemap(frame: &mut Frame, size: Size) {
    frame.fill_rectangle(Point::ORIGIN, size, Color::from_rgb(0.04, 0.05, 0.08));

    let projection = projection(size);
    let grid_color = Color::from_rgb(0.16, 0.18, 0.24);
    let axis_color = Color::from_rgb(0.28, 0.30, 0.38);

    let graticule = Path::new(|builder| {
        let mut lon = -180.0_f64;
        while lon <= 180.0 {
            let (x, _) = projection.to_xy(0.0, lon);
            builder.move_to(Point::new(x, 0.0));
            builder.line_to(Point::new(x, size.height));
            lon += 30.0;
        }
        let mut lat = -90.0_f64;
        while lat <= 90.0 {
            let (_, y) = projection.to_xy(lat, 0.0);
            builder.move_to(Point::new(0.0, y));
            builder.line_to(Point::new(size.width, y));
            lat += 30.0;
        }
    });
    frame.stroke(
        &graticule,
        Stroke::default().with_color(grid_color).with_width(1.0),
    );

    // equator and prime meridian stand out
    let axes = Path::new(|builder| {
        let (x0, y0) = projection.to_xy(0.0, 0.0);
        builder.move_to(Point::new(x0, 0.0));
        builder.line_to(Point::new(x0, size.height));
        builder.move_to(Point::new(0.0, y0));
        builder.line_to(Point::new(size.width, y0));
    });
    frame.stroke(
        &axes,
        Stroke::default().with_color(axis_color).with_width(1.0),
    );
}
