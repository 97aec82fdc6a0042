//! NGS reports and their simple variants.

use super::specimen::has_extended_documentation;
use super::{expect_kind, full_date, MapperContext};
use crate::fields;
use crate::store::{Record, RecordKind, RecordStore};
use mtbfile::{AminoAcidChange, DnaChange, Interpretation, NgsReport, SimpleVariant, StartEnd};

/// Map a genetic-testing record and its child variant records into one
/// report. Report and specimen both carry the record's own anonymized id;
/// a recommendation's report reference anonymizes the same record id, so
/// the reference resolves without a shared lookup.
pub fn map<S: RecordStore>(
    ctx: &MapperContext<'_, S>,
    record: &Record,
    variants: &[Record],
) -> Option<NgsReport> {
    if !expect_kind(record, &RecordKind::GeneticTesting) {
        return None;
    }
    if !has_extended_documentation(record) {
        tracing::warn!(record = %record.id, "genetic testing without extended documentation");
        return None;
    }
    let Some(issued_on) = record
        .started_on
        .or_else(|| record.date(fields::genetic_testing::SAMPLE_TAKEN_ON))
    else {
        tracing::warn!(record = %record.id, "report without an issue date");
        return None;
    };
    let Some(sequencing) = record.text(fields::genetic_testing::SEQUENCING_TYPE) else {
        tracing::warn!(record = %record.id, "report without a sequencing type");
        return None;
    };

    Some(NgsReport {
        id: ctx.anonymizer.record(record.id),
        patient: record.patient.external_id.clone(),
        specimen: ctx.anonymizer.record(record.id),
        issue_date: full_date(issued_on),
        sequencing_type: sequencing_type(sequencing),
        simple_variants: variants
            .iter()
            .filter_map(|variant| map_variant(ctx, variant))
            .collect(),
    })
}

/// The registry knows the panel kit under its generic name.
fn sequencing_type(raw: &str) -> String {
    match raw {
        "PanelKit" => "Panel".to_string(),
        other => other.to_string(),
    }
}

/// Only variants confirmed pathologic (`result == "P"`) are reported.
fn map_variant<S: RecordStore>(ctx: &MapperContext<'_, S>, record: &Record) -> Option<SimpleVariant> {
    if !expect_kind(record, &RecordKind::GeneticTestingVariant) {
        return None;
    }
    if record.text(fields::variant::RESULT) != Some("P") {
        return None;
    }

    let start_end = record.float(fields::variant::START).map(|start| StartEnd {
        start,
        end: record.float(fields::variant::END),
    });

    Some(SimpleVariant {
        id: ctx.anonymizer.record(record.id),
        chromosome: record.text(fields::variant::CHROMOSOME).map(str::to_string),
        start_end,
        ref_allele: record.text(fields::variant::REF_ALLELE).map(str::to_string),
        alt_allele: record.text(fields::variant::ALT_ALLELE).map(str::to_string),
        dna_change: record
            .text(fields::variant::DNA_CHANGE)
            .map(|code| DnaChange { code: code.to_string() }),
        amino_acid_change: record
            .text(fields::variant::PROTEIN_CHANGE)
            .map(|code| AminoAcidChange { code: code.to_string() }),
        read_depth: record.int(fields::variant::READ_DEPTH),
        allelic_frequency: record.float(fields::variant::ALLELIC_FREQUENCY),
        cosmic_id: record.text(fields::variant::COSMIC_ID).map(str::to_string),
        dbsnp_id: record.text(fields::variant::DBSNP_ID).map(str::to_string),
        interpretation: record
            .text(fields::variant::PATHOGENICITY_CLASS)
            .map(|code| Interpretation { code: code.to_string() }),
    })
}
