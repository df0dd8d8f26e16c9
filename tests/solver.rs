//! End-to-end: load an instance from disk, run the solver, check the
//! persisted solution shape.

use std::io::Write;

use hospital_rvns::eval::{evaluate, HARD_VIOLATION_PENALTY};
use hospital_rvns::instance::Hospital;
use hospital_rvns::rvns::{RvnsConfig, RvnsSolver};

const INSTANCE: &str = r#"{
    "days": 4,
    "skill_levels": [0, 1, 2],
    "shift_types": ["early", "late", "night"],
    "age_groups": ["infant", "adult", "elderly"],
    "weights": {
        "room_mixed_age": 5,
        "room_nurse_skill": 1,
        "continuity_of_care": 1,
        "nurse_eccessive_workload": 1,
        "open_operating_theater": 10,
        "surgeon_transfer": 1,
        "patient_delay": 2,
        "unscheduled_optional": 100
    },
    "occupants": [],
    "patients": [
        {
            "id": "p0", "mandatory": true, "gender": "A", "age_group": "adult",
            "length_of_stay": 2, "surgery_release_day": 0, "surgery_due_day": 2,
            "surgery_duration": 120, "surgeon_id": "s0",
            "incompatible_room_ids": [],
            "workload_produced": [2, 1, 1, 2, 1, 1],
            "skill_level_required": [1, 0, 0, 1, 0, 0]
        },
        {
            "id": "p1", "mandatory": false, "gender": "B", "age_group": "elderly",
            "length_of_stay": 1, "surgery_release_day": 0,
            "surgery_duration": 90, "surgeon_id": "s0",
            "incompatible_room_ids": [],
            "workload_produced": [1, 1, 1],
            "skill_level_required": [0, 0, 0]
        }
    ],
    "surgeons": [{"id": "s0", "max_surgery_time": [240, 240, 240, 240]}],
    "operating_theaters": [{"id": "t0", "availability": [480, 480, 480, 480]}],
    "rooms": [
        {"id": "r0", "capacity": 2},
        {"id": "r1", "capacity": 2}
    ],
    "nurses": [
        {
            "id": "n0", "skill_level": 2,
            "working_shifts": [
                {"day": 0, "shift": "early", "max_load": 10},
                {"day": 1, "shift": "early", "max_load": 10},
                {"day": 2, "shift": "early", "max_load": 10},
                {"day": 3, "shift": "early", "max_load": 10}
            ]
        }
    ]
}"#;

fn load_instance() -> Hospital {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(INSTANCE.as_bytes()).expect("write instance");
    Hospital::load(file.path()).expect("instance loads")
}

#[test]
fn test_solver_end_to_end() {
    let hospital = load_instance();
    let config = RvnsConfig::new().with_time_limit_ms(200).with_seed(42);

    let result = RvnsSolver::run(&hospital, &config);

    // Both patients fit comfortably, so the result must be hard-clean.
    assert!(
        result.best_cost < HARD_VIOLATION_PENALTY,
        "residual hard violations: {:?}",
        result.breakdown
    );
    assert!(result.best.placement("p0").is_some(), "mandatory patient placed");
    assert!(result.best_cost <= result.initial_cost);

    // The reported cost matches a fresh evaluation of the best solution.
    let (recomputed, _) = evaluate(&result.best, &hospital);
    assert_eq!(recomputed, result.best_cost);
}

#[test]
fn test_solution_serializes_in_persisted_shape() {
    let hospital = load_instance();
    let config = RvnsConfig::new().with_time_limit_ms(100).with_seed(7);

    let result = RvnsSolver::run(&hospital, &config);
    let json = serde_json::to_value(&result.best).expect("serializes");

    let patients = json["patients"].as_array().expect("patients array");
    for entry in patients {
        assert!(entry["id"].is_string());
        assert!(entry["admission_day"].is_u64());
        assert!(entry["room"].is_string());
        assert!(entry["operating_theater"].is_string());
    }
    let nurses = json["nurses"].as_array().expect("nurses array");
    for entry in nurses {
        assert!(entry["id"].is_string());
        for duty in entry["assignments"].as_array().expect("assignments array") {
            assert!(duty["day"].is_u64());
            assert!(duty["shift"].is_string());
            assert!(duty["rooms"].is_array());
        }
    }
}
