use super::{Arrangement, LinearArrangement};

fn positions(arrangement: LinearArrangement, total: f32, sizes: &[f32]) -> Vec<f32> {
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(total, sizes, &mut positions);
    positions
}

#[test]
fn space_evenly_distributes_gaps() {
    assert_eq!(
        positions(LinearArrangement::SpaceEvenly, 100.0, &[10.0, 10.0, 10.0]),
        vec![17.5, 45.0, 72.5]
    );
}

#[test]
fn spaced_by_uses_fixed_spacing() {
    assert_eq!(
        positions(LinearArrangement::spaced_by(5.0), 40.0, &[10.0, 10.0]),
        vec![0.0, 15.0]
    );
}

#[test]
fn center_packs_children_in_the_middle() {
    assert_eq!(
        positions(LinearArrangement::Center, 100.0, &[20.0, 20.0]),
        vec![30.0, 50.0]
    );
}

#[test]
fn space_between_with_single_child_starts_at_zero() {
    assert_eq!(positions(LinearArrangement::SpaceBetween, 100.0, &[20.0]), vec![0.0]);
    assert_eq!(
        positions(LinearArrangement::SpaceBetween, 100.0, &[20.0, 20.0]),
        vec![0.0, 80.0]
    );
}

#[test]
fn content_size_counts_spacing_between_children() {
    let sizes = [30.0, 40.0, 50.0];
    assert_eq!(LinearArrangement::spaced_by(8.0).content_size(&sizes), 136.0);
    assert_eq!(LinearArrangement::SpaceEvenly.content_size(&sizes), 120.0);
    assert_eq!(LinearArrangement::spaced_by(8.0).content_size(&[]), 0.0);
}

#[test]
fn scaling_only_touches_fixed_gaps() {
    assert_eq!(
        LinearArrangement::spaced_by(8.0).scaled(2.0),
        LinearArrangement::SpacedBy(16.0)
    );
    assert_eq!(LinearArrangement::Center.scaled(2.0), LinearArrangement::Center);
}
