//! Weather operations

use tracing::{info, instrument};

use core_kernel::{encode, DocumentQuery, SortDirection, WeatherId};

use super::collections::WEATHER;
use super::RegattaService;
use crate::error::RegattaResult;
use crate::events::RegattaEvent;
use crate::weather::{NewWeatherObservation, WeatherObservation};

impl RegattaService {
    /// Persists an observation and returns its generated identifier
    #[instrument(skip_all, fields(location = %observation.location), err)]
    pub async fn record_weather_data(
        &self,
        observation: NewWeatherObservation,
    ) -> RegattaResult<WeatherId> {
        let data = encode(&observation)?;
        let id: WeatherId = self.store.create(WEATHER, data).await?.into();

        info!(weather_id = %id, "Weather data recorded");
        self.emit(RegattaEvent::WeatherDataRecorded {
            location: observation.location,
            conditions: observation.conditions,
        })
        .await;

        Ok(id)
    }

    /// Returns the most recent observation at a location
    #[instrument(skip_all, fields(location = %location), err)]
    pub async fn get_latest_weather(
        &self,
        location: &str,
    ) -> RegattaResult<Option<WeatherObservation>> {
        let query = DocumentQuery::where_eq("location", location)
            .order_by("timestamp", SortDirection::Descending)
            .limit(1);
        let documents = self.store.query(WEATHER, &query).await?;
        Ok(documents
            .first()
            .map(|doc| doc.decode::<WeatherObservation>())
            .transpose()?)
    }
}
