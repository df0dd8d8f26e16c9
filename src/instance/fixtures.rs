//! Shared test instance used across the crate's test modules.

use serde_json::json;

use super::hospital::Hospital;
use super::types::InstanceData;

/// A 5-day instance: two rooms, two theaters, one surgeon, one occupant,
/// one mandatory and two optional patients, two nurses.
pub(crate) fn small_instance_json() -> String {
    let early_shifts: Vec<_> = (0..5)
        .map(|day| json!({"day": day, "shift": "early", "max_load": 8}))
        .collect();
    let late_and_night: Vec<_> = (0..5)
        .flat_map(|day| {
            [
                json!({"day": day, "shift": "late", "max_load": 5}),
                json!({"day": day, "shift": "night", "max_load": 5}),
            ]
        })
        .collect();

    json!({
        "days": 5,
        "skill_levels": [0, 1, 2],
        "shift_types": ["early", "late", "night"],
        "age_groups": ["infant", "adult", "elderly"],
        "weights": {
            "room_mixed_age": 1,
            "room_nurse_skill": 1,
            "continuity_of_care": 1,
            "nurse_eccessive_workload": 1,
            "open_operating_theater": 1,
            "surgeon_transfer": 1,
            "patient_delay": 1,
            "unscheduled_optional": 1
        },
        "occupants": [
            {
                "id": "a0", "gender": "A", "age_group": "elderly",
                "length_of_stay": 2, "room_id": "r0",
                "workload_produced": [3, 1, 1, 2, 1, 1],
                "skill_level_required": [1, 0, 0, 1, 0, 0]
            }
        ],
        "patients": [
            {
                "id": "p0", "mandatory": true, "gender": "A", "age_group": "adult",
                "length_of_stay": 2, "surgery_release_day": 0, "surgery_due_day": 3,
                "surgery_duration": 120, "surgeon_id": "s0",
                "incompatible_room_ids": ["r1"],
                "workload_produced": [2, 1, 1, 2, 1, 1],
                "skill_level_required": [2, 0, 0, 1, 0, 0]
            },
            {
                "id": "p1", "mandatory": false, "gender": "B", "age_group": "adult",
                "length_of_stay": 1, "surgery_release_day": 1,
                "surgery_duration": 90, "surgeon_id": "s0",
                "incompatible_room_ids": [],
                "workload_produced": [2, 1, 1],
                "skill_level_required": [0, 0, 0]
            },
            {
                "id": "p2", "mandatory": false, "gender": "A", "age_group": "infant",
                "length_of_stay": 1, "surgery_release_day": 0,
                "surgery_duration": 60, "surgeon_id": "s0",
                "incompatible_room_ids": [],
                "workload_produced": [1, 1, 1],
                "skill_level_required": [0, 0, 0]
            }
        ],
        "surgeons": [
            {"id": "s0", "max_surgery_time": [480, 480, 480, 480, 480]}
        ],
        "operating_theaters": [
            {"id": "t0", "availability": [480, 480, 480, 480, 480]},
            {"id": "t1", "availability": [480, 480, 480, 480, 480]}
        ],
        "rooms": [
            {"id": "r0", "capacity": 2},
            {"id": "r1", "capacity": 1}
        ],
        "nurses": [
            {"id": "n0", "skill_level": 2, "working_shifts": early_shifts},
            {"id": "n1", "skill_level": 1, "working_shifts": late_and_night}
        ]
    })
    .to_string()
}

pub(crate) fn small_hospital() -> Hospital {
    let data: InstanceData =
        serde_json::from_str(&small_instance_json()).expect("fixture instance must parse");
    Hospital::new(data)
}
