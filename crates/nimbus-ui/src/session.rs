//! Dashboard orchestration: position, geocoding, forecast and rendering
//! tied together behind a handful of user-level operations.

use chrono::Timelike;
use tracing::{debug, info, instrument, warn};

use nimbus_core::{
    build_display_model, Config, Coordinates, Location, Place, UnitPreference, WeatherSnapshot,
};
use nimbus_weather::{current_position, ForecastBundle, GeocodeClient, WeatherProvider};

use crate::error::SessionError;
use crate::render::RenderSink;

/// One dashboard instance. Holds the last snapshot so unit toggles can
/// re-render without going back to the network.
pub struct DashboardSession<S: RenderSink> {
    provider: WeatherProvider,
    geocoder: GeocodeClient,
    config: Config,
    units: UnitPreference,
    snapshot: Option<WeatherSnapshot>,
    sink: S,
}

impl<S: RenderSink> DashboardSession<S> {
    pub fn new(config: Config, sink: S) -> Result<Self, SessionError> {
        let provider = WeatherProvider::new()?;
        let geocoder = GeocodeClient::new(&config.language)?;
        Ok(Self::with_clients(provider, geocoder, config, sink))
    }

    /// Assemble a session from prebuilt clients. Tests use this to aim
    /// both clients at mock servers.
    pub fn with_clients(
        provider: WeatherProvider,
        geocoder: GeocodeClient,
        config: Config,
        sink: S,
    ) -> Self {
        let units = config.units;
        Self {
            provider,
            geocoder,
            config,
            units,
            snapshot: None,
            sink,
        }
    }

    pub fn units(&self) -> UnitPreference {
        self.units
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// First load. Tries the current position and falls back quietly to
    /// the configured default city; the user never sees a notification
    /// for a position they did not ask for.
    pub async fn start(&mut self) {
        match current_position() {
            Ok(position) => self.load_coordinates(position).await,
            Err(error) => {
                debug!("No position available ({}), loading default city", error);
                let city = self.config.default_city.clone();
                self.load_city(&city).await;
            }
        }
    }

    /// Explicit locate request. Here a failed lookup is reported.
    pub async fn locate(&mut self) {
        match current_position() {
            Ok(position) => self.load_coordinates(position).await,
            Err(error) => {
                warn!("Position lookup failed: {}", error);
                let error = SessionError::from(error);
                self.sink.notify(&error.user_message());
            }
        }
    }

    /// Load weather for a searched city name.
    pub async fn load_city(&mut self, query: &str) {
        if let Err(error) = self.try_load_city(query).await {
            warn!("City load failed: {}", error);
            self.sink.notify(&error.user_message());
        }
    }

    /// Load weather for a known position.
    pub async fn load_coordinates(&mut self, coordinates: Coordinates) {
        if let Err(error) = self.try_load_coordinates(coordinates).await {
            warn!("Coordinate load failed: {}", error);
            self.sink.notify(&error.user_message());
        }
    }

    /// Flip the unit and re-render the last snapshot. No refetch: the
    /// snapshot is unit-agnostic and conversion happens at display time.
    pub fn toggle_units(&mut self) {
        self.units = self.units.toggled();
        info!("Units switched to {:?}", self.units);
        self.render();
    }

    #[instrument(skip(self), level = "info")]
    async fn try_load_city(&mut self, query: &str) -> Result<(), SessionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        let resolved = self.geocoder.search(query).await?;
        let bundle = self.provider.fetch_forecast(resolved.coordinates).await?;
        self.install(resolved.place, resolved.coordinates, bundle);
        Ok(())
    }

    #[instrument(skip(self), level = "info")]
    async fn try_load_coordinates(&mut self, coordinates: Coordinates) -> Result<(), SessionError> {
        // A nameless dashboard is still a dashboard: reverse geocoding
        // failures degrade to a placeholder name instead of aborting.
        let place = match self.geocoder.reverse(coordinates).await {
            Ok(place) => place,
            Err(error) => {
                warn!("Reverse geocode failed ({}), using fallback name", error);
                Place::fallback()
            }
        };

        let bundle = self.provider.fetch_forecast(coordinates).await?;
        self.install(place, coordinates, bundle);
        Ok(())
    }

    fn install(&mut self, place: Place, coordinates: Coordinates, bundle: ForecastBundle) {
        let location = Location {
            city: place.city,
            country: place.country,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            timezone: bundle.timezone,
        };
        self.snapshot = Some(WeatherSnapshot {
            current: bundle.current,
            daily: bundle.daily,
            location,
        });
        self.render();
    }

    fn render(&mut self) {
        if let Some(snapshot) = &self.snapshot {
            let model = build_display_model(snapshot, self.units, current_hour());
            let background = model.classification.theme.background();
            let particles = model.classification.particle.config();
            self.sink.render(&model, &background, &particles);
        }
    }
}

fn current_hour() -> u32 {
    chrono::Local::now().hour()
}
