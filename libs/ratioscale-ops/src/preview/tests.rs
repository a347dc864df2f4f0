use super::*;
use approx::assert_relative_eq;
use ratioscale_scene::SceneObject;

#[test]
fn test_preview_counts_selection() {
    let selection = vec![SceneObject::unit_cube("a"), SceneObject::unit_cube("b")];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 700.0));
    assert_eq!(preview.selected, 2);
}

#[test]
fn test_unit_cube_identity_current_size() {
    let selection = vec![SceneObject::unit_cube("cube")];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 700.0));
    assert_eq!(preview.current, Some(Vec3::ONE));
}

#[test]
fn test_expected_is_current_times_factor() {
    let selection = vec![SceneObject::unit_cube("cube")];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 700.0));
    let expected = preview.expected.unwrap();
    assert_relative_eq!(expected.x, 1.0 / 700.0);
    assert_relative_eq!(expected.y, 1.0 / 700.0);
    assert_relative_eq!(expected.z, 1.0 / 700.0);
}

#[test]
fn test_object_scale_is_part_of_current_size() {
    let selection = vec![SceneObject::unit_cube("cube").with_scale(Vec3::splat(2.0))];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 2.0));
    assert_eq!(preview.current, Some(Vec3::splat(2.0)));
    assert_eq!(preview.expected, Some(Vec3::ONE));
}

#[test]
fn test_empty_selection_has_no_bounds() {
    let selection: Vec<SceneObject> = Vec::new();
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 700.0));
    assert_eq!(preview.selected, 0);
    assert_eq!(preview.current, None);
    assert_eq!(preview.expected, None);
}

#[test]
fn test_zero_denominator_uses_display_sentinel() {
    // The panel keeps rendering with a zero factor; only the applicator
    // treats this as a hard error.
    let selection = vec![SceneObject::unit_cube("cube")];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 0.0));
    assert_eq!(preview.factor, 0.0);
    assert_eq!(preview.expected, Some(Vec3::ZERO));
}

#[test]
fn test_axis_report_in_display_units() {
    let selection = vec![SceneObject::unit_cube("cube")];
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 2.0));
    let units = UnitSettings::new(1000.0, "mm");
    assert_eq!(
        preview.current_report(&units),
        vec!["X: 1000.0000 mm", "Y: 1000.0000 mm", "Z: 1000.0000 mm"]
    );
    assert_eq!(
        preview.expected_report(&units),
        vec!["X: 500.0000 mm", "Y: 500.0000 mm", "Z: 500.0000 mm"]
    );
}

#[test]
fn test_axis_report_not_applicable_when_empty() {
    let selection: Vec<SceneObject> = Vec::new();
    let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 700.0));
    let units = UnitSettings::default();
    assert_eq!(preview.current_report(&units), vec!["N/A"]);
    assert_eq!(preview.expected_report(&units), vec!["N/A"]);
}
