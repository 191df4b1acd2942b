//! Race operations

use serde::Serialize;
use tracing::{info, instrument};

use core_kernel::{encode, DocumentId, DocumentQuery, RaceId, SortDirection};

use super::collections::RACES;
use super::RegattaService;
use crate::error::RegattaResult;
use crate::events::RegattaEvent;
use crate::race::{NewRace, Race, RaceResult, RaceStatus};

#[derive(Serialize)]
struct StatusUpdate {
    status: RaceStatus,
}

#[derive(Serialize)]
struct ResultsUpdate<'a> {
    results: &'a [RaceResult],
}

impl RegattaService {
    /// Persists a new race and returns its generated identifier
    #[instrument(skip_all, fields(name = %race.name), err)]
    pub async fn create_race(&self, race: NewRace) -> RegattaResult<RaceId> {
        let data = encode(&race)?;
        let id: RaceId = self.store.create(RACES, data).await?.into();

        info!(race_id = %id, "Race created");
        self.emit(RegattaEvent::RaceCreated {
            name: race.name,
            date: race.date,
            location: race.location,
        })
        .await;

        Ok(id)
    }

    /// Fetches a race, returning `None` when it does not exist
    #[instrument(skip_all, fields(race_id = %id), err)]
    pub async fn get_race(&self, id: &RaceId) -> RegattaResult<Option<Race>> {
        let document = self.store.read(RACES, &DocumentId::from(id)).await?;
        Ok(document.map(|doc| doc.decode::<Race>()).transpose()?)
    }

    /// Returns every race, in no particular order
    #[instrument(skip_all, err)]
    pub async fn get_all_races(&self) -> RegattaResult<Vec<Race>> {
        let documents = self.store.list(RACES).await?;
        Ok(documents
            .iter()
            .map(|doc| doc.decode::<Race>())
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Returns upcoming races, earliest first
    #[instrument(skip_all, err)]
    pub async fn get_upcoming_races(&self) -> RegattaResult<Vec<Race>> {
        let query = DocumentQuery::where_eq("status", RaceStatus::Upcoming.as_str())
            .order_by("date", SortDirection::Ascending);
        let documents = self.store.query(RACES, &query).await?;
        Ok(documents
            .iter()
            .map(|doc| doc.decode::<Race>())
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Sets a race's status, leaving every other field untouched
    #[instrument(skip_all, fields(race_id = %id, status = %status), err)]
    pub async fn update_race_status(&self, id: &RaceId, status: RaceStatus) -> RegattaResult<()> {
        let fields = encode(&StatusUpdate { status })?;
        self.store.update(RACES, &DocumentId::from(id), fields).await?;

        info!("Race status updated");
        self.emit(RegattaEvent::RaceStatusUpdated {
            race_id: id.clone(),
            status,
        })
        .await;

        Ok(())
    }

    /// Returns a race's results, or `None` if the race is absent or has none
    #[instrument(skip_all, fields(race_id = %id), err)]
    pub async fn get_race_results(&self, id: &RaceId) -> RegattaResult<Option<Vec<RaceResult>>> {
        Ok(self.get_race(id).await?.and_then(|race| race.results))
    }

    /// Replaces a race's results
    #[instrument(skip_all, fields(race_id = %id, result_count = results.len()), err)]
    pub async fn update_race_results(
        &self,
        id: &RaceId,
        results: Vec<RaceResult>,
    ) -> RegattaResult<()> {
        let fields = encode(&ResultsUpdate { results: &results })?;
        self.store.update(RACES, &DocumentId::from(id), fields).await?;

        info!("Race results updated");
        self.emit(RegattaEvent::RaceResultsUpdated {
            race_id: id.clone(),
            result_count: results.len(),
        })
        .await;

        Ok(())
    }
}
