use log::{info, warn};

use crate::{
    crew::{CrewKind, CrewLogEntry, CrewMember, CrewStatus, Gender},
    remote::{error::RecordError, record::RawRecord},
    roster::Roster,
};

const CAREER_LOG_SECTION: &str = "careerLog";
const FLIGHT_LOG_SECTION: &str = "flightLog";

/// Applies one raw record to the Roster: create on first-seen identity,
/// field-level merge thereafter.
///
/// Runs only on the single apply thread, never concurrently with itself. The
/// record is consumed whether or not it applies; there is no retry path. The
/// only failure is a record without an identity, which the draining caller
/// logs and discards.
pub fn apply_record(roster: &mut Roster, record: RawRecord) -> Result<(), RecordError> {
    let candidate = build_candidate(&record)?;
    let name = candidate.name().to_owned();

    if roster.contains(&name) {
        if let Some(existing) = roster.get_mut(&name) {
            merge_into(existing, &record, candidate);
        }
    } else {
        roster.insert(candidate);
    }

    Ok(())
}

/// Builds a transient candidate member carrying every field the record
/// supplies (defaults elsewhere). Log sections absent from the record leave
/// the candidate's logs empty; the merge consults the record directly to
/// distinguish "absent" from "empty".
fn build_candidate(record: &RawRecord) -> Result<CrewMember, RecordError> {
    let Some(name) = record.identity() else {
        return Err(RecordError::MissingIdentity);
    };

    let kind = parse_kind(record.str_field("type", ""));
    let status = parse_status(record.str_field("status", ""));
    let mut member = CrewMember::new(name, kind, status);

    member.gender = parse_gender(record.str_field("gender", ""));
    member.profession = record.str_field("trait", "").to_owned();
    member.experience = record.f32_field("experience", 0.0);
    member.experience_level = record.i32_field("experienceLevel", 0);
    member.experience_trait = record.str_field("experienceTrait", "").to_owned();
    member.courage = record.f32_field("courage", 0.0);
    member.stupidity = record.f32_field("stupidity", 0.0);
    member.veteran = record.bool_field("veteran", false);
    member.is_badass = record.bool_field("isBadass", false);
    member.has_toured = record.bool_field("hasToured", false);
    member.g_experienced = record.f64_field("gExperienced", 0.0);
    member.g_increment = record.f64_field("gIncrement", 0.0);
    member.gee_force = record.f64_field("geeForce", 0.0);
    member.out_due_to_g = record.bool_field("outDueToG", false);
    member.inactive_time_end = record.f64_field("inactiveTimeEnd", 0.0);
    member.last_recovery_time = record.f64_field("lastRecoveryTime", 0.0);
    member.seat = match record.str_field("seat", "") {
        "" => None,
        seat => Some(seat.to_owned()),
    };
    member.seat_idx = record.i32_field("seatIdx", -1);

    if let Some(section) = record.log_section(CAREER_LOG_SECTION) {
        member
            .career_log
            .replace_with(parse_log_entries(CAREER_LOG_SECTION, section));
    }
    if let Some(section) = record.log_section(FLIGHT_LOG_SECTION) {
        member
            .flight_log
            .replace_with(parse_log_entries(FLIGHT_LOG_SECTION, section));
    }

    Ok(member)
}

/// Field-level merge into an existing member. The member instance itself is
/// preserved (other collaborators hold on to it, and its mutator wiring must
/// survive); only its fields change.
fn merge_into(existing: &mut CrewMember, record: &RawRecord, candidate: CrewMember) {
    let kind = candidate.kind();
    let status = candidate.status();

    // History logs: the incoming snapshot is authoritative when present;
    // absence keeps the existing entries.
    if record.log_section(CAREER_LOG_SECTION).is_some() {
        existing
            .career_log
            .replace_with(candidate.career_log.take_entries());
    } else {
        info!(
            "record for '{}' has no {} section; keeping existing entries",
            existing.name(),
            CAREER_LOG_SECTION
        );
    }
    if record.log_section(FLIGHT_LOG_SECTION).is_some() {
        existing
            .flight_log
            .replace_with(candidate.flight_log.take_entries());
    } else {
        info!(
            "record for '{}' has no {} section; keeping existing entries",
            existing.name(),
            FLIGHT_LOG_SECTION
        );
    }

    // Scalar attributes: the candidate's value wins unconditionally.
    existing.gender = candidate.gender;
    existing.profession = candidate.profession;
    existing.experience = candidate.experience;
    existing.experience_level = candidate.experience_level;
    existing.experience_trait = candidate.experience_trait;
    existing.courage = candidate.courage;
    existing.stupidity = candidate.stupidity;
    existing.veteran = candidate.veteran;
    existing.is_badass = candidate.is_badass;
    existing.has_toured = candidate.has_toured;
    existing.g_experienced = candidate.g_experienced;
    existing.g_increment = candidate.g_increment;
    existing.gee_force = candidate.gee_force;
    existing.out_due_to_g = candidate.out_due_to_g;
    existing.inactive_time_end = candidate.inactive_time_end;
    existing.last_recovery_time = candidate.last_recovery_time;
    existing.seat = candidate.seat;
    existing.seat_idx = candidate.seat_idx;

    // Classification fields came from the remote peer; writing them through
    // the normal path would rebroadcast the very change we just received.
    existing.set_kind_silently(kind);
    existing.set_status_silently(status);
}

fn parse_log_entries(section: &'static str, values: &[serde_json::Value]) -> Vec<CrewLogEntry> {
    let mut entries = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match serde_json::from_value::<CrewLogEntry>(value.clone()) {
            Ok(entry) => entries.push(entry),
            Err(_) => {
                let err = RecordError::MalformedLogEntry { section, index };
                warn!("skipping log entry: {}", err);
            }
        }
    }
    entries
}

fn parse_kind(name: &str) -> CrewKind {
    CrewKind::from_name(name).unwrap_or_else(|| {
        if !name.is_empty() {
            warn!("unknown crew type '{}', defaulting to Crew", name);
        }
        CrewKind::default()
    })
}

fn parse_status(name: &str) -> CrewStatus {
    CrewStatus::from_name(name).unwrap_or_else(|| {
        if !name.is_empty() {
            warn!("unknown crew status '{}', defaulting to Available", name);
        }
        CrewStatus::default()
    })
}

fn parse_gender(name: &str) -> Gender {
    Gender::from_name(name).unwrap_or_default()
}
