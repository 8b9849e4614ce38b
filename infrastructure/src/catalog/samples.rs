//! Sample tools
//!
//! A small echo service and a gym tracker, handy for trying the relay
//! without any remote tool servers.

use super::ToolHandler;
use relay_domain::{ToolCall, ToolDescriptor, ToolError};
use serde_json::{Value, json};

pub const ECHO: &str = "demo.echo";
pub const GET_WORKOUT: &str = "gym.get_workout_for_today";
pub const LOG_EXERCISE: &str = "gym.log_exercise";

/// All sample tools with their handlers
pub fn all() -> Vec<(ToolDescriptor, ToolHandler)> {
    vec![
        (echo_descriptor(), echo as ToolHandler),
        (get_workout_descriptor(), get_workout_for_today as ToolHandler),
        (log_exercise_descriptor(), log_exercise as ToolHandler),
    ]
}

fn echo_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        ECHO,
        "Echo the given value back to the caller.",
        json!({
            "type": "object",
            "properties": {
                "value": {"type": "string", "description": "Value to echo"}
            },
            "required": ["value"]
        }),
    )
}

fn get_workout_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        GET_WORKOUT,
        "Get the planned workout for today: the focus area and its exercises.",
        json!({"type": "object", "properties": {}}),
    )
}

fn log_exercise_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        LOG_EXERCISE,
        "Log a completed exercise with its sets, reps and weight in kilograms.",
        json!({
            "type": "object",
            "properties": {
                "exercise_name": {"type": "string", "description": "Name of the exercise"},
                "sets": {"type": "integer", "description": "Number of sets"},
                "reps": {"type": "integer", "description": "Repetitions per set"},
                "weight_kg": {"type": "number", "description": "Weight lifted in kg"}
            },
            "required": ["exercise_name", "sets", "reps", "weight_kg"]
        }),
    )
}

fn echo(call: &ToolCall) -> Result<Value, ToolError> {
    let value = call
        .arguments
        .get("value")
        .cloned()
        .ok_or_else(|| ToolError::invalid_argument("Missing required argument: value"))?;
    Ok(json!({ "received": value }))
}

fn get_workout_for_today(_call: &ToolCall) -> Result<Value, ToolError> {
    Ok(json!({
        "exercises": ["Bench Press", "Incline Dumbbell Press", "Cable Flyes"],
        "focus": "Chest Day"
    }))
}

fn log_exercise(call: &ToolCall) -> Result<Value, ToolError> {
    let name = call
        .require_string("exercise_name")
        .map_err(ToolError::invalid_argument)?;
    let sets = call
        .get_i64("sets")
        .ok_or_else(|| ToolError::invalid_argument("sets must be an integer"))?;
    let reps = call
        .get_i64("reps")
        .ok_or_else(|| ToolError::invalid_argument("reps must be an integer"))?;
    let weight = call
        .get_f64("weight_kg")
        .ok_or_else(|| ToolError::invalid_argument("weight_kg must be a number"))?;

    if sets <= 0 || reps <= 0 {
        return Err(ToolError::invalid_argument(
            "sets and reps must be positive",
        ));
    }

    Ok(json!({
        "status": "success",
        "message": format!("Successfully logged {sets}x{reps} of {name} at {weight}kg.")
    }))
}
