//! Patient demographics.

use super::month_date;
use crate::store::{Record, Sex};
use mtbfile::{Gender, Patient};

/// Map the demographics carried on any record of the patient.
///
/// The patient identifier is the host-assigned external id, passed through
/// unchanged. Birth and death dates are reduced to month precision. A
/// missing birth date makes the whole patient unmappable.
pub fn map(record: &Record) -> Option<Patient> {
    let Some(birth_date) = record.patient.birth_date else {
        tracing::warn!(record = %record.id, "patient has no birth date");
        return None;
    };

    Some(Patient {
        id: record.patient.external_id.clone(),
        gender: gender(record.patient.sex),
        birth_date: month_date(birth_date),
        date_of_death: record.patient.death_date.map(month_date),
    })
}

fn gender(sex: Sex) -> Gender {
    match sex {
        Sex::Male => Gender::Male,
        Sex::Female => Gender::Female,
        Sex::Other => Gender::Other,
        Sex::Unknown => Gender::Unknown,
    }
}
