//! Family-member diagnoses.

use super::{expect_kind, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{FamilyMemberDiagnosis, Relationship, RelationshipCode};

/// Map one family-member child record. Only the direct-line spelling keeps
/// its code; every other documented relationship degree counts as extended
/// family.
pub fn map<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    record: &Record,
) -> Option<FamilyMemberDiagnosis> {
    if !expect_kind(record, &RecordKind::FamilyMember) {
        return None;
    }
    let code = match record.text(fields::family_member::RELATIONSHIP)? {
        "FAMMEMB" => RelationshipCode::FamilyMember,
        _ => RelationshipCode::Extended,
    };

    Some(FamilyMemberDiagnosis {
        id: ctx.anonymizer.record(record.id),
        patient: record.patient.external_id.clone(),
        relationship: Relationship { code },
    })
}
