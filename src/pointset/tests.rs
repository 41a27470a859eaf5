use super::*;

#[test]
fn test_parse_whitespace_delimited() {
    let set = PointSet::from_text("0 0\n1.5 -2\n3 4\n", None).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set.dim(), 2);
    assert_eq!(set.point(1), &[1.5, -2.0]);
}

#[test]
fn test_parse_custom_delimiter() {
    let set = PointSet::from_text("1,2\n3, 4\n", Some(",")).unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.point(1), &[3.0, 4.0]);
}

#[test]
fn test_blank_lines_skipped() {
    let set = PointSet::from_text("1 2\n\n  \n3 4\n", None).unwrap();

    assert_eq!(set.len(), 2);
}

#[test]
fn test_wrong_arity_rejects_whole_input() {
    let err = PointSet::from_text("1 2\n3 4 5\n", None).unwrap_err();

    assert!(matches!(
        err,
        LoadError::ArityMismatch {
            line: 2,
            expected: 2,
            found: 3
        }
    ));
}

#[test]
fn test_bad_field_rejects_whole_input() {
    let err = PointSet::from_text("1 2\n3 abc\n", None).unwrap_err();

    assert!(matches!(err, LoadError::BadField { line: 2, .. }));
}

#[test]
fn test_non_finite_rejected() {
    let err = PointSet::from_text("1 nan\n", None).unwrap_err();
    assert!(matches!(err, LoadError::NonFinite { line: 1 }));

    let err = PointSet::from_text("1 2\ninf 0\n", None).unwrap_err();
    assert!(matches!(err, LoadError::NonFinite { line: 2 }));
}

#[test]
fn test_empty_input() {
    assert!(matches!(
        PointSet::from_text("", None),
        Err(LoadError::Empty)
    ));
    assert!(matches!(
        PointSet::from_text("\n  \n", None),
        Err(LoadError::Empty)
    ));
}

#[test]
fn test_new_validates_programmatic_points() {
    let err = PointSet::new(vec![vec![0.0, 0.0], vec![1.0]]).unwrap_err();
    assert!(matches!(err, LoadError::ArityMismatch { .. }));

    let err = PointSet::new(vec![vec![0.0, f64::NAN]]).unwrap_err();
    assert!(matches!(err, LoadError::NonFinite { .. }));
}

#[test]
fn test_bounds() {
    let set = PointSet::from_text("0 5\n-2 1\n4 3\n", None).unwrap();
    let (min, max) = set.bounds();

    assert_eq!(min, vec![-2.0, 1.0]);
    assert_eq!(max, vec![4.0, 5.0]);
}
