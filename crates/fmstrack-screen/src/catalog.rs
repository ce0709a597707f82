//! The fixed seven-exercise catalog.
//!
//! Exercise identity, order, and rubric text are domain constants: the
//! 0-21 total and the navigation sequence both depend on exactly these
//! seven definitions.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of exercises in the screen.
pub const EXERCISE_COUNT: usize = 7;

/// Highest score a single exercise can receive.
pub const MAX_EXERCISE_SCORE: u8 = 3;

/// Highest possible total (7 exercises x 3 points).
pub const MAX_TOTAL_SCORE: u8 = 21;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructions: String,
    /// Rubric text keyed by score value; exactly the keys 0..=3.
    pub scoring_criteria: BTreeMap<u8, String>,
}

fn definition(
    id: &str,
    name: &str,
    description: &str,
    instructions: &str,
    // Rubric text ordered score 3 down to 0, as printed on the score sheet.
    criteria: [&str; 4],
) -> ExerciseDefinition {
    let [three, two, one, zero] = criteria;
    ExerciseDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        instructions: instructions.to_string(),
        scoring_criteria: BTreeMap::from([
            (3, three.to_string()),
            (2, two.to_string()),
            (1, one.to_string()),
            (0, zero.to_string()),
        ]),
    }
}

static EXERCISES: LazyLock<Vec<ExerciseDefinition>> = LazyLock::new(|| {
    vec![
        definition(
            "deepSquat",
            "Deep Squat",
            "Assesses bilateral, symmetrical, and functional mobility of the hips, knees, and ankles, as well as bilateral, symmetrical functional mobility of the shoulders.",
            "Stand with feet shoulder-width apart, toes pointing forward. Hold dowel overhead with arms extended. Squat down as far as possible while keeping torso upright and heels on ground.",
            [
                "Upper torso is parallel with tibia or toward vertical. Femur below horizontal. Knees are aligned over feet. Dowel aligned over feet.",
                "Upper torso is parallel with tibia or toward vertical. Femur below horizontal. Knees are aligned over feet. Dowel aligned over feet with heels elevated.",
                "Tibia and upper torso are not parallel. Femur is not below horizontal. Knees are not aligned over feet. Dowel is not aligned over feet.",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "hurdleStep",
            "Hurdle Step",
            "Challenges the body's step and stride mechanisms while maintaining stability and control of the pelvis and torso.",
            "Stand behind hurdle with feet together and toes touching base. Place dowel across shoulders. Step over hurdle with one leg while maintaining balance.",
            [
                "Hips, knees, and ankles remain aligned in sagittal plane. Minimal to no movement of lumbar spine. Dowel remains parallel to hurdle.",
                "Alignment is lost between hips, knees, and ankles. Movement is noted in lumbar spine. Dowel remains parallel to hurdle.",
                "Alignment is lost between hips, knees, and ankles. Movement is noted in lumbar spine. Dowel does not remain parallel to hurdle.",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "inLineLunge",
            "In-Line Lunge",
            "Attempts to place the body in a position that will challenge hip and ankle mobility and stability, quadriceps flexibility, and knee stability.",
            "Place dowel along spine touching back of head, upper back, and sacrum. Step back into lunge position with feet in line. Lower back knee to touch board behind heel.",
            [
                "Dowel maintains contact with head, thoracic spine, and sacrum. No torso movement. Dowel remains vertical. Knee touches behind heel.",
                "Dowel maintains contact with head, thoracic spine, and sacrum. No torso movement. Dowel remains vertical. Knee does not touch behind heel.",
                "Dowel does not maintain contact with head, thoracic spine, and sacrum. Movement is noted in torso. Dowel does not remain vertical.",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "shoulderMobility",
            "Shoulder Mobility",
            "Assesses bilateral shoulder range of motion, combining internal rotation with adduction and external rotation with abduction.",
            "Stand with feet together. Make fists with thumbs inside. Place one fist overhead and reach down spine. Place other fist behind back and reach up spine.",
            [
                "Fists are within one hand length of each other.",
                "Fists are within one and a half hand lengths of each other.",
                "Fists are not within one and a half hand lengths of each other.",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "activeStraightLeg",
            "Active Straight-Leg Raise",
            "Assesses the ability to disassociate the lower extremities while maintaining stability in the torso and pelvis.",
            "Lie supine with arms at sides. Raise one leg with knee straight and ankle dorsiflexed. Opposite leg remains straight and in contact with floor.",
            [
                "Vertical line from malleolus bisects or passes in front of mid-patella of raised leg. Opposite leg remains in neutral position.",
                "Vertical line from malleolus falls behind mid-patella but in front of mid-thigh of raised leg. Opposite leg remains in neutral position.",
                "Vertical line from malleolus falls behind mid-thigh of raised leg. Opposite leg does not remain in neutral position.",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "trunkStabilityPushup",
            "Trunk Stability Push-up",
            "Assesses the ability to stabilize the spine in an anterior/posterior plane during closed-chain upper body movement.",
            "Lie prone with hands placed at appropriate position. Perform push-up maintaining rigid body position. Men start with thumbs at forehead level, women at chin level.",
            [
                "Performs one repetition with thumbs at forehead level (men) or chin level (women). Body lifts as a unit with no 'lag' in lumbar spine.",
                "Performs one repetition with thumbs at chin level (men) or clavicle level (women). Body lifts as a unit with no 'lag' in lumbar spine.",
                "Unable to perform one repetition with thumbs at chin level (men) or clavicle level (women).",
                "Pain associated with any portion of this movement",
            ],
        ),
        definition(
            "rotaryStability",
            "Rotary Stability",
            "Assesses multi-planar pelvis, core, and shoulder girdle stability during combined upper and lower extremity motion.",
            "Begin in quadruped position. Extend opposite arm and leg. Perform 'bird dog' movement touching elbow to knee and returning to extended position.",
            [
                "Performs one correct unilateral repetition. Knee and elbow touch in unison. Returns to start position maintaining stability.",
                "Performs one correct bilateral repetition. Knee and elbow touch in unison. Returns to start position maintaining stability.",
                "Unable to perform one repetition of bilateral pattern while maintaining stability.",
                "Pain associated with any portion of this movement",
            ],
        ),
    ]
});

/// All seven exercises in screen order. The order defines both the
/// navigation sequence and the display order.
pub fn exercises() -> &'static [ExerciseDefinition] {
    &EXERCISES
}

/// Look up an exercise by id.
pub fn get_exercise(id: &str) -> Option<&'static ExerciseDefinition> {
    EXERCISES.iter().find(|ex| ex.id == id)
}
