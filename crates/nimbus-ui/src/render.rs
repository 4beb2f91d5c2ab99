//! Render sinks: where finished display models go.

use nimbus_core::{BackgroundSpec, DisplayModel, ParticleConfig};

const RANGE_BAR_CELLS: usize = 20;

/// Anything that can present a dashboard frame and user notifications.
/// The session resolves the background and particle specs from the
/// classification before handing a frame over, so sinks never reach
/// back into the theme tables. The terminal renderer is the default;
/// tests record frames instead.
pub trait RenderSink {
    fn render(
        &mut self,
        model: &DisplayModel,
        background: &BackgroundSpec,
        particles: &ParticleConfig,
    );
    fn notify(&mut self, message: &str);
}

/// Prints the dashboard to stdout and notifications to stderr.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl RenderSink for ConsoleRenderer {
    fn render(
        &mut self,
        model: &DisplayModel,
        background: &BackgroundSpec,
        particles: &ParticleConfig,
    ) {
        let classification = &model.classification;
        let suffix = model.unit.suffix();

        println!();
        if model.country.is_empty() {
            println!("{}  {}", classification.symbol, model.city);
        } else {
            println!("{}  {}, {}", classification.symbol, model.city, model.country);
        }
        println!("{}{}  {}", model.temperature, suffix, classification.label);
        println!("Feels like {}{}", model.feels_like, suffix);

        println!(
            "Low {}  {}  High {}",
            dash_or(model.today_low, suffix),
            range_bar(model.range_position),
            dash_or(model.today_high, suffix),
        );

        println!("Humidity    {}", dash_or(model.humidity, "%"));
        match (model.wind_speed, model.wind_compass) {
            (Some(speed), Some(compass)) => println!("Wind        {} km/h {}", speed, compass),
            (Some(speed), None) => println!("Wind        {} km/h", speed),
            _ => println!("Wind        —"),
        }
        println!("Pressure    {}", dash_or(model.pressure, " hPa"));
        println!("Visibility  {}", model.visibility.as_deref().unwrap_or("—"));
        println!("Cloud       {}", dash_or(model.cloud_cover, "%"));
        println!("Dew point   {}", dash_or(model.dew_point, suffix));
        println!("Sunrise {}   Sunset {}", model.sunrise, model.sunset);

        if !model.forecast.is_empty() {
            println!();
            for entry in &model.forecast {
                println!(
                    "{}  {}  {}{} / {}{}",
                    entry.weekday, entry.symbol, entry.high, suffix, entry.low, suffix
                );
            }
        }

        println!();
        println!("backdrop:  {}", background.css());
        println!(
            "particles: {} x{}",
            classification.particle.name(),
            particles.count
        );
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

fn dash_or<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "—".to_string(),
    }
}

/// Marker bar for the position of the current temperature inside
/// today's range. The position arrives pre-clamped to 10..=100.
fn range_bar(position: f64) -> String {
    let marker = (position / 100.0 * (RANGE_BAR_CELLS - 1) as f64).round() as usize;
    (0..RANGE_BAR_CELLS)
        .map(|cell| if cell == marker { '|' } else { '·' })
        .collect()
}
