//! Participant to race linking
//!
//! Linking touches two documents: the participant's `races` list and the
//! race's `participants` list. Both writes are issued together and both
//! run to completion, but they are not atomic. If exactly one fails, the
//! documents disagree until someone repairs them; the failure is logged
//! with the side that was written and then returned to the caller.

use serde::Serialize;
use tracing::{info, instrument, warn};

use core_kernel::{encode, DocumentId, ParticipantId, RaceId};

use super::collections::{PARTICIPANTS, RACES};
use super::RegattaService;
use crate::error::{RegattaError, RegattaResult};
use crate::events::RegattaEvent;

#[derive(Serialize)]
struct RacesUpdate<'a> {
    races: &'a [RaceId],
}

#[derive(Serialize)]
struct ParticipantsUpdate<'a> {
    participants: &'a [ParticipantId],
}

impl RegattaService {
    /// Enters a participant in a race
    ///
    /// Fails with `NotFound` before writing anything if either side is
    /// missing. Repeated calls append the pair again.
    #[instrument(skip_all, fields(participant_id = %participant_id, race_id = %race_id), err)]
    pub async fn add_participant_to_race(
        &self,
        participant_id: &ParticipantId,
        race_id: &RaceId,
    ) -> RegattaResult<()> {
        let (participant, race) =
            tokio::try_join!(self.get_participant(participant_id), self.get_race(race_id))?;

        let mut participant =
            participant.ok_or_else(|| RegattaError::not_found("Participant", participant_id))?;
        let mut race = race.ok_or_else(|| RegattaError::not_found("Race", race_id))?;

        participant.races.push(race_id.clone());
        race.participants.push(participant_id.clone());

        let participant_fields = encode(&RacesUpdate {
            races: &participant.races,
        })?;
        let race_fields = encode(&ParticipantsUpdate {
            participants: &race.participants,
        })?;

        let participant_doc = DocumentId::from(participant_id);
        let race_doc = DocumentId::from(race_id);
        let (participant_write, race_write) = tokio::join!(
            self.store.update(PARTICIPANTS, &participant_doc, participant_fields),
            self.store.update(RACES, &race_doc, race_fields)
        );

        match (participant_write, race_write) {
            (Ok(()), Ok(())) => {}
            (Err(error), Ok(())) => {
                warn!(
                    error = %error,
                    "Race lists participant but participant update failed; link is one-sided"
                );
                return Err(error.into());
            }
            (Ok(()), Err(error)) => {
                warn!(
                    error = %error,
                    "Participant lists race but race update failed; link is one-sided"
                );
                return Err(error.into());
            }
            (Err(error), Err(_)) => return Err(error.into()),
        }

        info!("Participant added to race");
        self.emit(RegattaEvent::ParticipantAddedToRace {
            participant_id: participant_id.clone(),
            race_id: race_id.clone(),
            race_name: race.name,
        })
        .await;

        Ok(())
    }
}
