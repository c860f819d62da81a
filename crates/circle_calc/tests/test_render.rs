use approx::{assert_abs_diff_eq, assert_relative_eq};
use circle_calc::{RADII, render};
use circle_gems::{calculate, disk_area, disk_circumference, disk_diameter};

#[test]
fn test_render_fixed_radii() {
    let mut out = Vec::new();
    render(&mut out, &RADII).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[28.27, 50.27, 78.54, 113.1]\n[18.85, 25.13, 31.42, 37.7]\n[6, 8, 10, 12]\n"
    );
}

#[test]
fn test_render_empty() {
    let mut out = Vec::new();
    render(&mut out, &[]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[]\n[]\n[]\n");
}

#[test]
fn test_area() {
    let actual = calculate(RADII, disk_area);
    for (a, b) in actual.iter().zip([28.27, 50.27, 78.54, 113.10]) {
        assert_abs_diff_eq!(*a, b, epsilon = 0.005);
    }
    assert_relative_eq!(actual[3], 36. * std::f64::consts::PI);
}

#[test]
fn test_circumference() {
    let actual = calculate(RADII, disk_circumference);
    for (a, b) in actual.iter().zip([18.85, 25.13, 31.42, 37.70]) {
        assert_abs_diff_eq!(*a, b, epsilon = 0.005);
    }
}

#[test]
fn test_diameter() {
    assert_eq!(calculate(RADII, disk_diameter), vec![6., 8., 10., 12.]);
}

#[test]
fn test_render_large_radii_stay_finite() {
    let mut out = Vec::new();
    render(&mut out, &[1e306]).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[inf]");
    assert_eq!(lines[2], format!("[{}]", 2e306));
}
