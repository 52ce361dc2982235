//! Command dispatcher: maps typed operation arguments onto the wire slots.
//!
//! One constructor per supported editor operation. The mapping conventions
//! are fixed by the editor's decoder and must be preserved for wire
//! compatibility:
//!
//! - a plain target name goes in `param_name`
//! - free-form strings go in `param_string`, `param_second`, `param_value`
//!   in that order
//! - spatial triples go in `param_pos`/`param_rot`/`param_scale`
//! - booleans travel as the lowercase text `"true"`/`"false"` in
//!   `param_string` (the schema has no boolean slot)
//! - RGB colour rides in `param_pos` with `(r, g, b)` as `(x, y, z)`
//!
//! Spatial triples are all-or-nothing: a triple with some but not all
//! components supplied is rejected rather than padded with defaults, so the
//! editor never receives coordinates the caller did not give.

use crate::error::DispatchError;

use super::wire::{Command, Vector3};

/// Assembles an optional spatial triple from per-axis optional inputs.
///
/// Returns `Ok(None)` when all three are absent and `Ok(Some)` when all
/// three are present.
///
/// # Errors
///
/// Returns [`DispatchError::PartialTriple`] when only some components are
/// supplied.
pub fn triple(
    slot: &'static str,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
) -> Result<Option<Vector3>, DispatchError> {
    match (x, y, z) {
        (Some(x), Some(y), Some(z)) => Ok(Some(Vector3::new(x, y, z))),
        (None, None, None) => Ok(None),
        _ => Err(DispatchError::PartialTriple { slot }),
    }
}

/// Connectivity check; the editor answers with a short status string.
#[must_use]
pub fn ping() -> Command {
    Command::new("Ping")
}

/// Creates a new object in the scene, optionally at a position.
#[must_use]
pub fn create_object(name: &str, position: Option<Vector3>) -> Command {
    Command::new("CreateObject").name(name).position(position)
}

/// Deletes an object from the scene.
#[must_use]
pub fn delete_object(name: &str) -> Command {
    Command::new("DeleteObject").name(name)
}

/// Sets any combination of an object's position, rotation and scale.
///
/// Absent triples mean "leave unchanged" and are omitted from the wire
/// frame entirely.
#[must_use]
pub fn set_transform(
    name: &str,
    position: Option<Vector3>,
    rotation: Option<Vector3>,
    scale: Option<Vector3>,
) -> Command {
    Command::new("SetTransform")
        .name(name)
        .position(position)
        .rotation(rotation)
        .scale(scale)
}

/// Creates a material with the given RGB colour.
///
/// The colour deliberately reuses the position slot: `(r, g, b)` is sent as
/// `(x, y, z)`. The editor decodes it by the same convention.
#[must_use]
pub fn create_material(name: &str, r: f64, g: f64, b: f64) -> Command {
    Command::new("CreateMaterial")
        .name(name)
        .position(Some(Vector3::new(r, g, b)))
}

/// Sets a property on a component of an object.
///
/// Three free-form strings: component in `param_string`, property in
/// `param_second`, the assigned value in `param_value`.
#[must_use]
pub fn set_component_property(object: &str, component: &str, property: &str, value: &str) -> Command {
    Command::new("SetComponentProperty")
        .name(object)
        .string_param(component)
        .second_param(property)
        .value_param(value)
}

/// Activates or deactivates an object.
#[must_use]
pub fn set_active(name: &str, active: bool) -> Command {
    let text = if active { "true" } else { "false" };
    Command::new("SetActive").name(name).string_param(text)
}

/// Executes an editor menu item by its menu path.
#[must_use]
pub fn execute_menu_item(path: &str) -> Command {
    Command::new("ExecuteMenuItem").string_param(path)
}

/// Runs a script inside the editor; the script body travels in
/// `param_string`.
#[must_use]
pub fn run_script(source: &str) -> Command {
    Command::new("RunScript").string_param(source)
}

/// Reads the current scene hierarchy as a text tree.
#[must_use]
pub fn get_hierarchy() -> Command {
    Command::new("GetHierarchy")
}

/// Reads the editor console log.
#[must_use]
pub fn read_console() -> Command {
    Command::new("ReadConsole")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::wire::encode_command;

    #[test]
    fn triple_all_present() {
        let v = triple("position", Some(1.0), Some(2.0), Some(3.0)).unwrap();
        assert_eq!(v, Some(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn triple_all_absent() {
        assert_eq!(triple("position", None, None, None).unwrap(), None);
    }

    #[test]
    fn triple_partial_is_rejected() {
        let err = triple("position", Some(1.0), None, None).unwrap_err();
        assert_eq!(err, DispatchError::PartialTriple { slot: "position" });

        let err = triple("scale", None, Some(2.0), Some(3.0)).unwrap_err();
        assert_eq!(err, DispatchError::PartialTriple { slot: "scale" });
    }

    #[test]
    fn create_object_fills_name_and_position() {
        let command = create_object("Cube", Some(Vector3::new(0.0, 1.0, 0.0)));
        assert_eq!(command.method, "CreateObject");
        assert_eq!(command.params.name.as_deref(), Some("Cube"));
        assert_eq!(command.params.position, Some(Vector3::new(0.0, 1.0, 0.0)));
        assert!(command.params.string_param.is_none());
    }

    #[test]
    fn set_component_property_uses_three_string_slots() {
        let command = set_component_property("Player", "Rigidbody", "mass", "2.5");
        assert_eq!(command.params.name.as_deref(), Some("Player"));
        assert_eq!(command.params.string_param.as_deref(), Some("Rigidbody"));
        assert_eq!(command.params.second_param.as_deref(), Some("mass"));
        assert_eq!(command.params.value_param.as_deref(), Some("2.5"));
    }

    #[test]
    fn booleans_travel_as_lowercase_text() {
        let on = set_active("Lamp", true);
        assert_eq!(on.params.string_param.as_deref(), Some("true"));

        let off = set_active("Lamp", false);
        assert_eq!(off.params.string_param.as_deref(), Some("false"));
    }

    #[test]
    fn colour_encodes_identically_to_position() {
        // The schema-reuse convention: (r, g, b) rides in (x, y, z).
        let material = create_material("Red", 1.0, 0.0, 0.0);
        let positional = Command::new("CreateMaterial")
            .name("Red")
            .position(Some(Vector3::new(1.0, 0.0, 0.0)));

        assert_eq!(
            encode_command(&material).unwrap(),
            encode_command(&positional).unwrap()
        );
    }

    #[test]
    fn menu_path_goes_in_string_param() {
        let command = execute_menu_item("GameObject/3D Object/Cube");
        assert_eq!(
            command.params.string_param.as_deref(),
            Some("GameObject/3D Object/Cube")
        );
        assert!(command.params.name.is_none());
    }
}
