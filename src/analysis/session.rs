use std::collections::HashSet;

use crate::models::{LoggedExercise, PlannedExercise, WorkoutLog};

/// Reconcile the configured plan for a weekday against any existing log
/// for the exact date being opened.
///
/// The logged exercises come first, keeping every previously entered
/// set untouched; plan entries whose id is not in the log yet are
/// appended with blank placeholder sets sized to their planned set
/// count. With no log at all, the session is just the plan with
/// placeholders. Previously entered data is never dropped when the plan
/// changes, and newly planned exercises show up without re-logging.
pub fn reconcile_session(
    plan: &[PlannedExercise],
    log: Option<&WorkoutLog>,
) -> Vec<LoggedExercise> {
    let Some(log) = log else {
        return plan.iter().map(LoggedExercise::from_plan).collect();
    };

    let mut session = log.exercises.clone();
    let logged_ids: HashSet<&str> = session.iter().map(|ex| ex.id.as_str()).collect();

    let additions: Vec<LoggedExercise> = plan
        .iter()
        .filter(|planned| !logged_ids.contains(planned.id.as_str()))
        .map(LoggedExercise::from_plan)
        .collect();
    session.extend(additions);

    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Scalar, SetEntry, Weekday};

    fn planned(id: &str, name: &str, sets: i64, reps: i64) -> PlannedExercise {
        PlannedExercise {
            id: id.to_string(),
            name: name.to_string(),
            sets,
            reps,
        }
    }

    fn filled_set(weight: &str, reps: &str) -> SetEntry {
        SetEntry {
            weight: Scalar::from(weight),
            reps: Scalar::from(reps),
        }
    }

    #[test]
    fn test_no_log_initializes_from_plan() {
        let plan = vec![planned("1", "Squat", 5, 5), planned("2", "Bench", 3, 8)];
        let session = reconcile_session(&plan, None);

        assert_eq!(session.len(), 2);
        assert_eq!(session[0].name, "Squat");
        assert_eq!(session[0].sets.len(), 5);
        assert!(session[0].sets.iter().all(|s| s.is_blank()));
        assert_eq!(session[1].sets.len(), 3);
    }

    #[test]
    fn test_logged_sets_survive_plan_extension() {
        let mut log = WorkoutLog::new(Weekday::Monday);
        log.exercises.push(LoggedExercise {
            id: "a".to_string(),
            name: "Bench".to_string(),
            reps: 8,
            sets: vec![filled_set("135", "8"), filled_set("155", "6")],
        });

        // Plan has grown a new exercise since the log was created.
        let plan = vec![planned("a", "Bench", 2, 8), planned("b", "Row", 3, 10)];
        let session = reconcile_session(&plan, Some(&log));

        assert_eq!(session.len(), 2);
        assert_eq!(session[0].name, "Bench");
        assert_eq!(session[0].sets, vec![filled_set("135", "8"), filled_set("155", "6")]);
        assert_eq!(session[1].name, "Row");
        assert_eq!(session[1].sets.len(), 3);
        assert!(session[1].sets.iter().all(|s| s.is_blank()));
    }

    #[test]
    fn test_exercise_removed_from_plan_stays_in_session() {
        let mut log = WorkoutLog::new(Weekday::Monday);
        log.exercises.push(LoggedExercise {
            id: "a".to_string(),
            name: "Curl".to_string(),
            reps: 12,
            sets: vec![filled_set("30", "12")],
        });

        let session = reconcile_session(&[], Some(&log));
        assert_eq!(session.len(), 1);
        assert_eq!(session[0].name, "Curl");
    }

    #[test]
    fn test_matching_is_by_id_not_name() {
        let mut log = WorkoutLog::new(Weekday::Monday);
        log.exercises.push(LoggedExercise {
            id: "old".to_string(),
            name: "Bench".to_string(),
            reps: 8,
            sets: vec![filled_set("135", "8")],
        });

        // Same name, different id: the plan entry was recreated, so it
        // appears as its own session entry.
        let plan = vec![planned("new", "Bench", 3, 8)];
        let session = reconcile_session(&plan, Some(&log));

        assert_eq!(session.len(), 2);
        assert_eq!(session[0].id, "old");
        assert_eq!(session[1].id, "new");
    }

    #[test]
    fn test_empty_plan_and_no_log() {
        assert!(reconcile_session(&[], None).is_empty());
    }
}
