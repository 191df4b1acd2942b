//! Participant operations

use tracing::{info, instrument};

use core_kernel::{encode, DocumentId, DocumentQuery, ParticipantId};

use super::collections::PARTICIPANTS;
use super::RegattaService;
use crate::error::RegattaResult;
use crate::events::RegattaEvent;
use crate::participant::{NewParticipant, Participant};

impl RegattaService {
    /// Persists a new participant and returns its generated identifier
    #[instrument(skip_all, fields(name = %participant.name, country = %participant.country), err)]
    pub async fn register_participant(
        &self,
        participant: NewParticipant,
    ) -> RegattaResult<ParticipantId> {
        let data = encode(&participant)?;
        let id: ParticipantId = self.store.create(PARTICIPANTS, data).await?.into();

        info!(participant_id = %id, "Participant registered");
        self.emit(RegattaEvent::ParticipantRegistered {
            name: participant.name,
            country: participant.country,
            boat_class: participant.boat_class,
        })
        .await;

        Ok(id)
    }

    /// Fetches a participant, returning `None` when it does not exist
    #[instrument(skip_all, fields(participant_id = %id), err)]
    pub async fn get_participant(&self, id: &ParticipantId) -> RegattaResult<Option<Participant>> {
        let document = self.store.read(PARTICIPANTS, &DocumentId::from(id)).await?;
        Ok(document.map(|doc| doc.decode::<Participant>()).transpose()?)
    }

    /// Returns the participants sailing for a country, in no particular order
    #[instrument(skip_all, fields(country = %country), err)]
    pub async fn get_participants_by_country(
        &self,
        country: &str,
    ) -> RegattaResult<Vec<Participant>> {
        let query = DocumentQuery::where_eq("country", country);
        let documents = self.store.query(PARTICIPANTS, &query).await?;
        Ok(documents
            .iter()
            .map(|doc| doc.decode::<Participant>())
            .collect::<Result<Vec<_>, _>>()?)
    }
}
