//! Diagnosis coding.

use super::{full_date, MapperContext};
use crate::fields;
use crate::store::{Disease, Record, RecordStore};
use mtbfile::{Diagnosis, Icd10, IcdO3T, WhoGrade, WhoGradeCode};

/// Map one documented disease into a diagnosis fragment.
///
/// The fragment id is the anonymized disease id, which makes the care plan's
/// diagnosis cross-reference resolvable without a shared lookup. ICD codings
/// are only emitted when both code and catalogue version are present.
pub fn map<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    anamnesis: &Record,
    disease: &Disease,
) -> Diagnosis {
    Diagnosis {
        id: ctx.anonymizer.disease(disease.id),
        patient: anamnesis.patient.external_id.clone(),
        recorded_on: anamnesis
            .date(fields::anamnesis::FIRST_DIAGNOSIS_DATE)
            .map(full_date),
        icd10: coded(disease.icd10_code.as_deref(), disease.icd10_version.as_deref())
            .map(|(code, version)| Icd10 { code, version }),
        icd_o3_t: coded(
            disease.localization_code.as_deref(),
            disease.localization_version.as_deref(),
        )
        .map(|(code, version)| IcdO3T { code, version }),
        who_grade: who_grade(anamnesis),
    }
}

fn coded(code: Option<&str>, version: Option<&str>) -> Option<(String, String)> {
    let code = code.map(str::trim).filter(|code| !code.is_empty())?;
    let version = version.map(str::trim).filter(|version| !version.is_empty())?;
    Some((code.to_string(), version.to_string()))
}

fn who_grade(anamnesis: &Record) -> Option<WhoGrade> {
    let code = match anamnesis.text(fields::anamnesis::WHO_GRADE)? {
        "I" | "1" => WhoGradeCode::One,
        "II" | "2" => WhoGradeCode::Two,
        "III" | "3" => WhoGradeCode::Three,
        "IV" | "4" => WhoGradeCode::Four,
        other => {
            tracing::warn!(record = %anamnesis.id, value = other, "unmappable WHO grade");
            return None;
        }
    };
    Some(WhoGrade {
        code,
        version: anamnesis
            .catalogue_version(fields::anamnesis::WHO_GRADE)
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymize::Anonymizer;
    use crate::store::{FieldValue, RecordId};
    use crate::testsupport::{self, MemoryStore};

    #[test]
    fn maps_codings_and_anonymized_disease_id() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(Some("TEST".into()));
        let ctx = MapperContext::new(&store, &anonymizer);

        let mut anamnesis = testsupport::anamnesis_record(RecordId(1));
        anamnesis.fields.insert(
            fields::anamnesis::FIRST_DIAGNOSIS_DATE.into(),
            FieldValue::text("2023-12-01"),
        );
        let disease = testsupport::test_disease();

        let diagnosis = map(&ctx, &anamnesis, &disease);
        assert_eq!(diagnosis.id, anonymizer.disease(disease.id));
        assert_eq!(diagnosis.recorded_on.as_deref(), Some("2023-12-01"));
        let icd10 = diagnosis.icd10.expect("coded");
        assert_eq!(icd10.code, "C25.1");
        assert_eq!(icd10.version, "2024");
    }

    #[test]
    fn coding_without_version_is_omitted() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(None);
        let ctx = MapperContext::new(&store, &anonymizer);

        let anamnesis = testsupport::anamnesis_record(RecordId(1));
        let mut disease = testsupport::test_disease();
        disease.icd10_version = None;

        assert!(map(&ctx, &anamnesis, &disease).icd10.is_none());
    }

    #[test]
    fn who_grade_accepts_arabic_and_roman_numerals() {
        let store = MemoryStore::default();
        let anonymizer = Anonymizer::new(None);
        let ctx = MapperContext::new(&store, &anonymizer);
        let disease = testsupport::test_disease();

        for (raw, expected) in [("3", WhoGradeCode::Three), ("IV", WhoGradeCode::Four)] {
            let mut anamnesis = testsupport::anamnesis_record(RecordId(1));
            anamnesis.fields.insert(
                fields::anamnesis::WHO_GRADE.into(),
                FieldValue::text_versioned(raw, "2021"),
            );
            let grade = map(&ctx, &anamnesis, &disease).who_grade.expect("mapped");
            assert_eq!(grade.code, expected);
            assert_eq!(grade.version.as_deref(), Some("2021"));
        }

        let mut anamnesis = testsupport::anamnesis_record(RecordId(1));
        anamnesis.fields.insert(
            fields::anamnesis::WHO_GRADE.into(),
            FieldValue::text("V"),
        );
        assert!(map(&ctx, &anamnesis, &disease).who_grade.is_none());
    }
}
