//! Neighborhood move operators.
//!
//! Five independent generators, each cloning the input solution, trying
//! randomized candidates for one category of change, and accepting the
//! first candidate that keeps the relevant hard constraints clean. When
//! no candidate survives, the unmodified clone is returned — a move is
//! allowed to be a no-op, never allowed to introduce a hard violation the
//! input didn't have.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::eval::hard;
use crate::instance::Hospital;
use crate::solution::{PatientAssignment, Solution};

/// Number of neighborhood structures (k_max).
pub const NEIGHBORHOOD_COUNT: usize = 5;

/// Applies the k-th neighborhood operator (k in `0..NEIGHBORHOOD_COUNT`).
pub fn apply<R: Rng>(k: usize, solution: &Solution, hospital: &Hospital, rng: &mut R) -> Solution {
    match k {
        0 => change_patient_room(solution, hospital, rng),
        1 => change_patient_day(solution, hospital, rng),
        2 => reschedule_unscheduled(solution, hospital, rng),
        3 => swap_nurse_rooms(solution, hospital, rng),
        4 => change_patient_theater(solution, hospital, rng),
        _ => unreachable!("neighborhood index {k} out of range"),
    }
}

/// All hard constraints a tentative admission must keep clean.
pub(crate) fn admission_hard_ok(solution: &Solution, hospital: &Hospital) -> bool {
    hard::h1_no_gender_mix(solution, hospital) == 0
        && hard::h2_compatible_rooms(solution, hospital) == 0
        && hard::h7_room_capacity(solution, hospital) == 0
        && hard::h3_surgeon_overtime(solution, hospital) == 0
        && hard::h4_ot_overtime(solution, hospital) == 0
        && hard::h6_admission_day(solution, hospital) == 0
}

/// Moves one random scheduled patient to another compatible room.
pub fn change_patient_room<R: Rng>(
    solution: &Solution,
    hospital: &Hospital,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();
    if candidate.patients.is_empty() {
        return candidate;
    }

    let chosen = rng.random_range(0..candidate.patients.len());
    let Some(patient) = hospital.patient(&candidate.patients[chosen].id) else {
        return candidate;
    };
    let original = candidate.patients[chosen].room.clone();

    let mut rooms: Vec<&str> = hospital
        .rooms
        .iter()
        .map(|room| room.id.as_str())
        .filter(|id| *id != original && !patient.incompatible_room_ids.iter().any(|r| r == id))
        .collect();
    rooms.shuffle(rng);

    for room in rooms {
        candidate.patients[chosen].room = room.to_string();
        if hard::h1_no_gender_mix(&candidate, hospital) == 0
            && hard::h2_compatible_rooms(&candidate, hospital) == 0
            && hard::h7_room_capacity(&candidate, hospital) == 0
        {
            return candidate;
        }
    }

    candidate.patients[chosen].room = original;
    candidate
}

/// Moves one random scheduled patient to another admission day inside
/// its valid window.
pub fn change_patient_day<R: Rng>(
    solution: &Solution,
    hospital: &Hospital,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();
    if candidate.patients.is_empty() {
        return candidate;
    }

    let chosen = rng.random_range(0..candidate.patients.len());
    let Some(patient) = hospital.patient(&candidate.patients[chosen].id) else {
        return candidate;
    };
    let original = candidate.patients[chosen].admission_day;

    let mut days: Vec<usize> = (patient.surgery_release_day
        ..=patient.effective_due_day(hospital.days))
        .filter(|&day| day != original)
        .collect();
    days.shuffle(rng);

    for day in days {
        candidate.patients[chosen].admission_day = day;
        if hard::h6_admission_day(&candidate, hospital) == 0
            && hard::h3_surgeon_overtime(&candidate, hospital) == 0
            && hard::h4_ot_overtime(&candidate, hospital) == 0
        {
            return candidate;
        }
    }

    candidate.patients[chosen].admission_day = original;
    candidate
}

/// Tries to admit one random unscheduled optional patient.
pub fn reschedule_unscheduled<R: Rng>(
    solution: &Solution,
    hospital: &Hospital,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();

    let scheduled = solution.scheduled_ids();
    let unscheduled: Vec<_> = hospital
        .patients
        .iter()
        .filter(|p| !p.mandatory && !scheduled.contains(p.id.as_str()))
        .collect();
    let Some(patient) = unscheduled.choose(rng) else {
        return candidate;
    };

    let mut days: Vec<usize> = (patient.surgery_release_day
        ..=patient.effective_due_day(hospital.days))
        .collect();
    let mut rooms: Vec<&str> = hospital.rooms.iter().map(|r| r.id.as_str()).collect();
    let mut theaters: Vec<&str> = hospital
        .operating_theaters
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    days.shuffle(rng);
    rooms.shuffle(rng);
    theaters.shuffle(rng);

    for &day in &days {
        for &room in &rooms {
            for &theater in &theaters {
                candidate.patients.push(PatientAssignment {
                    id: patient.id.clone(),
                    admission_day: day,
                    room: room.to_string(),
                    operating_theater: theater.to_string(),
                });
                if admission_hard_ok(&candidate, hospital) {
                    return candidate;
                }
                candidate.patients.pop();
            }
        }
    }

    candidate
}

/// Swaps the room sets of two duty records held by different nurses on
/// the same (day, shift); reverts unless the result stays hard-clean.
pub fn swap_nurse_rooms<R: Rng>(
    solution: &Solution,
    hospital: &Hospital,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();
    if candidate.nurses.len() < 2 {
        return candidate;
    }

    let holders: Vec<usize> = candidate
        .nurses
        .iter()
        .enumerate()
        .filter(|(_, roster)| !roster.assignments.is_empty())
        .map(|(i, _)| i)
        .collect();
    let Some(&first) = holders.choose(rng) else {
        return candidate;
    };
    let first_duty = rng.random_range(0..candidate.nurses[first].assignments.len());
    let day = candidate.nurses[first].assignments[first_duty].day;
    let shift = candidate.nurses[first].assignments[first_duty].shift.clone();
    let first_rooms = candidate.nurses[first].assignments[first_duty].rooms.clone();

    let mut partners: Vec<(usize, usize)> = Vec::new();
    for (ni, roster) in candidate.nurses.iter().enumerate() {
        if ni == first {
            continue;
        }
        for (di, duty) in roster.assignments.iter().enumerate() {
            if duty.day == day
                && duty.shift == shift
                && duty.rooms.iter().all(|room| !first_rooms.contains(room))
            {
                partners.push((ni, di));
            }
        }
    }
    let Some(&(second, second_duty)) = partners.choose(rng) else {
        return candidate;
    };

    let taken = std::mem::take(&mut candidate.nurses[first].assignments[first_duty].rooms);
    let swapped =
        std::mem::replace(&mut candidate.nurses[second].assignments[second_duty].rooms, taken);
    candidate.nurses[first].assignments[first_duty].rooms = swapped;

    if hard::h1_no_gender_mix(&candidate, hospital) == 0
        && hard::h7_room_capacity(&candidate, hospital) == 0
    {
        candidate
    } else {
        solution.clone()
    }
}

/// Moves one random scheduled patient's surgery to another theater.
pub fn change_patient_theater<R: Rng>(
    solution: &Solution,
    hospital: &Hospital,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();
    if candidate.patients.is_empty() {
        return candidate;
    }

    let chosen = rng.random_range(0..candidate.patients.len());
    let original = candidate.patients[chosen].operating_theater.clone();

    let mut theaters: Vec<&str> = hospital
        .operating_theaters
        .iter()
        .map(|t| t.id.as_str())
        .filter(|id| *id != original)
        .collect();
    theaters.shuffle(rng);

    for theater in theaters {
        candidate.patients[chosen].operating_theater = theater.to_string();
        if hard::h3_surgeon_overtime(&candidate, hospital) == 0
            && hard::h4_ot_overtime(&candidate, hospital) == 0
        {
            return candidate;
        }
    }

    candidate.patients[chosen].operating_theater = original;
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::fixtures::small_hospital;
    use crate::solution::{NurseRoster, PatientAssignment, ShiftAssignment, Solution};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn placed(id: &str, day: usize, room: &str, theater: &str) -> PatientAssignment {
        PatientAssignment {
            id: id.into(),
            admission_day: day,
            room: room.into(),
            operating_theater: theater.into(),
        }
    }

    fn duty(nurse: &str, day: usize, shift: &str, rooms: &[&str]) -> NurseRoster {
        NurseRoster {
            id: nurse.into(),
            assignments: vec![ShiftAssignment {
                day,
                shift: shift.into(),
                rooms: rooms.iter().map(|r| r.to_string()).collect(),
            }],
        }
    }

    #[test]
    fn test_change_room_moves_to_the_only_alternative() {
        let hospital = small_hospital();
        // p1 alone on day 2; its only rooms are r0 and r1.
        let solution = Solution {
            patients: vec![placed("p1", 2, "r0", "t0")],
            nurses: vec![],
        };
        let mut rng = StdRng::seed_from_u64(3);

        let moved = change_patient_room(&solution, &hospital, &mut rng);
        assert_eq!(moved.patients[0].room, "r1");
    }

    #[test]
    fn test_change_room_falls_back_when_no_room_fits() {
        let hospital = small_hospital();
        // p0 is incompatible with r1, so r0 is its only room.
        let solution = Solution {
            patients: vec![placed("p0", 2, "r0", "t0")],
            nurses: vec![],
        };
        let mut rng = StdRng::seed_from_u64(3);

        let unchanged = change_patient_room(&solution, &hospital, &mut rng);
        assert_eq!(unchanged, solution);
    }

    #[test]
    fn test_change_day_stays_inside_window() {
        let hospital = small_hospital();
        let solution = Solution {
            patients: vec![placed("p0", 2, "r0", "t0")],
            nurses: vec![],
        };
        let mut rng = StdRng::seed_from_u64(5);

        let moved = change_patient_day(&solution, &hospital, &mut rng);
        let day = moved.patients[0].admission_day;
        assert_ne!(day, 2);
        assert!(day <= 3, "day {day} past p0's due day");
    }

    #[test]
    fn test_change_day_on_empty_solution_is_noop() {
        let hospital = small_hospital();
        let empty = Solution::default();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(change_patient_day(&empty, &hospital, &mut rng), empty);
    }

    #[test]
    fn test_reschedule_admits_an_optional_patient() {
        let hospital = small_hospital();
        let empty = Solution::default();
        let mut rng = StdRng::seed_from_u64(11);

        let extended = reschedule_unscheduled(&empty, &hospital, &mut rng);
        assert_eq!(extended.patients.len(), 1);
        assert!(admission_hard_ok(&extended, &hospital));

        let added = &extended.patients[0];
        let patient = hospital.patient(&added.id).unwrap();
        assert!(!patient.mandatory);
        assert!(added.admission_day >= patient.surgery_release_day);
    }

    #[test]
    fn test_reschedule_noop_when_all_optionals_placed() {
        let hospital = small_hospital();
        let solution = Solution {
            patients: vec![placed("p1", 2, "r1", "t0"), placed("p2", 0, "r0", "t0")],
            nurses: vec![],
        };
        let mut rng = StdRng::seed_from_u64(11);

        let unchanged = reschedule_unscheduled(&solution, &hospital, &mut rng);
        assert_eq!(unchanged, solution);
    }

    #[test]
    fn test_swap_nurse_rooms_exchanges_disjoint_records() {
        let hospital = small_hospital();
        let solution = Solution {
            patients: vec![],
            nurses: vec![
                duty("n0", 0, "early", &["r0"]),
                duty("n1", 0, "early", &["r1"]),
            ],
        };
        let mut rng = StdRng::seed_from_u64(17);

        let swapped = swap_nurse_rooms(&solution, &hospital, &mut rng);
        assert_eq!(swapped.nurses[0].assignments[0].rooms, vec!["r1".to_string()]);
        assert_eq!(swapped.nurses[1].assignments[0].rooms, vec!["r0".to_string()]);
    }

    #[test]
    fn test_swap_nurse_rooms_needs_matching_slot() {
        let hospital = small_hospital();
        // Different shifts: no swap partner exists.
        let solution = Solution {
            patients: vec![],
            nurses: vec![
                duty("n0", 0, "early", &["r0"]),
                duty("n1", 0, "late", &["r1"]),
            ],
        };
        let mut rng = StdRng::seed_from_u64(17);

        let unchanged = swap_nurse_rooms(&solution, &hospital, &mut rng);
        assert_eq!(unchanged, solution);
    }

    #[test]
    fn test_change_theater_switches_to_the_alternative() {
        let hospital = small_hospital();
        let solution = Solution {
            patients: vec![placed("p1", 2, "r1", "t0")],
            nurses: vec![],
        };
        let mut rng = StdRng::seed_from_u64(23);

        let moved = change_patient_theater(&solution, &hospital, &mut rng);
        assert_eq!(moved.patients[0].operating_theater, "t1");
    }

    #[test]
    fn test_operators_keep_fixture_solution_hard_clean() {
        let hospital = small_hospital();
        let clean = Solution {
            patients: vec![placed("p0", 0, "r0", "t0"), placed("p1", 2, "r1", "t1")],
            nurses: vec![duty("n0", 0, "early", &["r0"])],
        };
        assert!(admission_hard_ok(&clean, &hospital));

        let mut rng = StdRng::seed_from_u64(29);
        for k in 0..NEIGHBORHOOD_COUNT {
            let moved = apply(k, &clean, &hospital, &mut rng);
            assert!(
                admission_hard_ok(&moved, &hospital),
                "operator {k} introduced a hard violation"
            );
        }
    }
}
