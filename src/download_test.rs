use super::*;

#[test]
fn nothing_generated_is_an_error() {
    assert_eq!(dat_contents(&[]), Err(NothingToDownload));
}

#[test]
fn three_points_make_three_lines() {
    let text = dat_contents(&[[0.0, 0.0], [0.5, 0.02], [1.0, 0.0]]).unwrap();
    assert_eq!(text, "0.000000 0.000000\n0.500000 0.020000\n1.000000 0.000000");
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn values_round_to_six_decimals() {
    let text = dat_contents(&[[0.123_456_789, -0.000_000_4]]).unwrap();
    assert_eq!(text, "0.123457 -0.000000");
}

#[test]
fn negative_zero_prints_without_sign() {
    assert_eq!(dat_contents(&[[-0.0, -0.0]]).unwrap(), "0.000000 0.000000");
}

#[test]
fn filename_is_fixed() {
    assert_eq!(FILENAME, "airfoil.dat");
}

#[test]
fn exact_halves_round_up() {
    let text = dat_contents(&[[0.0078125, -0.0078125]]).unwrap();
    assert_eq!(text, "0.007813 -0.007813");
}
