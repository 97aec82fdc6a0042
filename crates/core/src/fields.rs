//! Field names of the host forms consumed by the pipeline.
//!
//! One module per form kind. These are the named field values the host
//! record store exposes on records of that kind; the pipeline reads them and
//! nothing else.

pub mod anamnesis {
    pub const CONSENT_STATUS: &str = "consent_status";
    pub const MTB_REGISTRATION_DATE: &str = "mtb_registration_date";
    pub const FIRST_DIAGNOSIS_DATE: &str = "first_diagnosis_date";
    pub const WHO_GRADE: &str = "who_grade";
}

pub mod care_plan {
    /// Embedded back-reference to the owning clinical anamnesis record.
    pub const ANAMNESIS_REF: &str = "anamnesis_ref";
    pub const PROTOCOL_EXCERPT: &str = "protocol_excerpt";
    pub const TARGET_FINDING: &str = "target_finding";
    pub const GENETIC_COUNSELLING: &str = "genetic_counselling";
    pub const GENETIC_COUNSELLING_REASON: &str = "genetic_counselling_reason";
    pub const WITH_REBIOPSY: &str = "with_rebiopsy";
    pub const REBIOPSY_SPECIMEN_REF: &str = "rebiopsy_specimen_ref";
    pub const REEVAL_SPECIMEN_REF: &str = "reeval_specimen_ref";
}

pub mod recommendation {
    pub const ISSUED_ON: &str = "issued_on";
    pub const CONFERENCE_REF: &str = "conference_ref";
    pub const PRIORITY: &str = "priority";
    pub const EVIDENCE_LEVEL: &str = "evidence_level";
    pub const EVIDENCE_ADDENDUM: &str = "evidence_addendum";
    pub const GENETIC_TESTING_REF: &str = "genetic_testing_ref";
    pub const MEDICATIONS_JSON: &str = "medications_json";
    pub const STUDIES_JSON: &str = "studies_json";
}

pub mod follow_up {
    pub const DATE: &str = "followup_date";
    /// Embedded link to the recommendation the follow-up reports on.
    pub const RECOMMENDATION_LINK: &str = "recommendation_link";
    pub const BEST_RESPONSE: &str = "best_response";
    pub const THERAPY_STATUS: &str = "therapy_status";
    pub const DOSAGE: &str = "dosage";
    pub const REASON_STOPPED: &str = "reason_stopped";
    pub const PERIOD_START: &str = "period_start";
    pub const PERIOD_END: &str = "period_end";
    pub const CLAIM_ISSUED_ON: &str = "claim_issued_on";
    pub const CLAIM_RESPONSE_DATE: &str = "claim_response_date";
    pub const CLAIM_STATUS: &str = "claim_status";
    pub const CLAIM_REASON: &str = "claim_reason";
}

pub mod genetic_testing {
    /// Extended-documentation marker; only `"ERW"` records are exportable.
    pub const DOCUMENTATION: &str = "documentation";
    pub const SEQUENCING_TYPE: &str = "sequencing_type";
    pub const SAMPLE_TAKEN_ON: &str = "sample_taken_on";
    pub const COLLECTION_METHOD: &str = "collection_method";
    pub const FIXATION: &str = "fixation";
    pub const SAMPLE_MATERIAL: &str = "sample_material";
}

pub mod variant {
    pub const RESULT: &str = "result";
    pub const CHROMOSOME: &str = "chromosome";
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const REF_ALLELE: &str = "ref_allele";
    pub const ALT_ALLELE: &str = "alt_allele";
    pub const DNA_CHANGE: &str = "dna_change";
    pub const PROTEIN_CHANGE: &str = "protein_change";
    pub const READ_DEPTH: &str = "read_depth";
    pub const ALLELIC_FREQUENCY: &str = "allelic_frequency";
    pub const COSMIC_ID: &str = "cosmic_id";
    pub const DBSNP_ID: &str = "dbsnp_id";
    pub const PATHOGENICITY_CLASS: &str = "pathogenicity_class";
}

pub mod ecog {
    pub const DATE: &str = "date";
    pub const VALUE: &str = "ecog";
}

pub mod family_member {
    pub const RELATIONSHIP: &str = "relationship";
}

pub mod conference {
    pub const DATE: &str = "date";
}
