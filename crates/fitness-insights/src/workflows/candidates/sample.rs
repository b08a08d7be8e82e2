use super::domain::CandidateRecord;

/// Development dataset served when the live sheet cannot be read.
const SAMPLE_ROWS: &[(&str, &str, &str)] = &[
    ("ATC", "Female", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "TR"),
    ("GS (Electrical)", "Male", "TR"),
    ("GS (Electrical)", "Female", "FIT"),
    ("GS (Electrical)", "Male", "TR"),
    ("GS (Electrical)", "Female", "FIT"),
    ("GS (Electrical)", "Female", "FIT"),
    ("GS (Electrical)", "Female", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Electrical)", "Female", "TR"),
    ("GS (Electrical)", "Female", "FIT"),
    ("GS (Electrical)", "Male", "TR"),
    ("GS (Electrical)", "Female", "TR"),
    ("GS (Electrical)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "TR"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "TR"),
    ("GS (Engineer)", "Male", "TR"),
    ("GS (Engineer)", "Male", "FIT"),
    ("GS (Engineer)", "Male", "TR"),
    ("GS (Hydro)", "Male", "FIT"),
    ("GS (Hydro)", "Male", "FIT"),
    ("GS (Hydro)", "Female", "FIT"),
    ("GS (Hydro)", "Female", "FIT"),
    ("GS (Hydro)", "Female", "FIT"),
    ("GS (Hydro)", "Female", "FIT"),
    ("GS (X)", "Female", "TR"),
    ("GS (X)", "Female", "FIT"),
    ("GS (X)", "Female", "FIT"),
    ("GS (X)", "Female", "FIT"),
    ("GS (X)", "Male", "TR"),
    ("GS (X)", "Male", "TR"),
    ("GS (X)", "Male", "FIT"),
    ("GS (X)", "Female", "TR"),
    ("Logistics", "Male", "PENDING"),
    ("Logistics", "Male", "PENDING"),
    ("Logistics", "Male", "PENDING"),
    ("NAOO", "Male", "TR"),
    ("NAOO", "Male", "FIT"),
    ("NAOO", "Female", "FIT"),
    ("NAOO", "Female", "TR"),
    ("NAOO", "Male", "TR"),
    ("Naval Constructor", "Male", "FIT"),
    ("Naval Constructor", "Male", "FIT"),
    ("Naval Constructor", "Male", "FIT"),
    ("Naval Constructor", "Male", "TR"),
    ("Naval Constructor", "Male", "FIT"),
    ("Naval Constructor", "Female", "FIT"),
    ("Naval Constructor", "Female", "FIT"),
    ("Naval Constructor", "Female", "TR"),
    ("Pilot", "Male", "TR"),
    ("Pilot", "Male", "TR"),
    ("Pilot", "Female", "FIT"),
    ("Pilot", "Male", "TR"),
    ("Pilot", "Male", "TR"),
    ("Pilot", "Male", "FIT"),
    ("Pilot", "Male", "FIT"),
];

pub fn sample_records() -> Vec<CandidateRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|(branch, gender, status)| CandidateRecord::new(*branch, *gender, *status))
        .collect()
}
