// Host-side tests for the procedural geometry builders.

use tree_core::*;

#[test]
fn star_outline_alternates_radii_starting_up() {
    let star = StarParams::default();
    let outline = star_outline(&star);
    assert_eq!(outline.len(), 10);
    assert!(outline[0].x.abs() < 1e-6);
    assert!((outline[0].y - 0.7).abs() < 1e-6, "first vertex points up");
    for (i, p) in outline.iter().enumerate() {
        let expected = if i % 2 == 0 { 0.7 } else { 0.3 };
        assert!(
            (p.length() - expected).abs() < 1e-6,
            "vertex {i} at radius {}",
            p.length()
        );
    }
    // equal angular steps of pi / 5
    for w in outline.windows(2) {
        let step = w[0].angle_between(w[1]);
        assert!((step.abs() - std::f32::consts::PI / 5.0).abs() < 1e-5);
    }
}

#[test]
fn star_shape_is_flat_and_closed() {
    let mesh = star_shape(&StarParams::default());
    assert!(mesh.positions.iter().all(|p| p[2] == 0.0));
    let mut used = vec![false; mesh.vertex_count()];
    for &i in &mesh.indices {
        used[i as usize] = true;
    }
    assert!(used.iter().all(|&u| u), "every outline vertex is part of the fill");
}

#[test]
fn helix_runs_from_apex_to_base() {
    let lights = LightParams::default();
    let slots = helix_slots(&lights, 8.0);
    assert_eq!(slots.len(), 156);

    let first = slots[0];
    assert_eq!(first.index, 0);
    assert_eq!(first.position, glam::Vec3::new(4.0, -4.0, 0.0));

    for pair in slots.windows(2) {
        assert!(pair[1].position.y > pair[0].position.y, "y rises with t");
        assert!(pair[1].t > pair[0].t);
    }
    let last = slots[slots.len() - 1];
    assert_eq!(last.index, 257);
    assert!(last.position.y < 4.0);
}

#[test]
fn helix_filter_keeps_three_of_five() {
    let lights = LightParams::default();
    let indices: Vec<usize> = helix_slots(&lights, 8.0)
        .iter()
        .map(|s| s.index)
        .take(9)
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 5, 6, 7, 10, 11, 12]);
}

#[test]
fn helix_colors_cycle_over_unfiltered_index() {
    let lights = LightParams::default();
    let slots = helix_slots(&lights, 8.0);
    for slot in &slots {
        assert_eq!(slot.color, LIGHT_PALETTE[slot.index % 3]);
    }
    // index 5 is the first kept marker after a skipped run and lands on amber
    assert_eq!(slots[3].index, 5);
    assert_eq!(slots[3].color, 0xffcc33);
}

#[test]
fn custom_filter_and_count() {
    let lights = LightParams {
        count: 10,
        skip_cycle: 2,
        skip_keep: 1,
        ..Default::default()
    };
    let slots = helix_slots(&lights, 8.0);
    assert_eq!(slots.len(), 5);
    assert!(slots.iter().all(|s| s.index % 2 == 0));
}

#[test]
fn cone_alpha_band_covers_the_cone() {
    let tree = TreeParams::default();
    let mesh = cone_shell(&tree);
    let (lo, hi) = mesh
        .positions
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p[1]), hi.max(p[1])));
    assert_eq!((lo, hi), (-4.0, 4.0));
    assert_eq!(tree.fade_edges[0], lo, "fully transparent at the base");
    assert!(tree.fade_edges[1] < hi);
}

#[test]
fn hex_colors_unpack() {
    assert_eq!(hex_rgb(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex_rgb(0xffffff), [1.0, 1.0, 1.0]);
    let [r, g, b] = hex_rgb(0x3399ff);
    assert!((r - 0.2).abs() < 1e-6 && (g - 0.6).abs() < 1e-6 && b == 1.0);
}
