//! Construction and slicing checks for `TimeSeries`.

use augur_series::{SeriesError, TimeSeries};

#[test]
fn empty_series_rejected() {
    assert_eq!(
        TimeSeries::new(vec![], vec![]),
        Err(SeriesError::Empty)
    );
    assert_eq!(TimeSeries::from_values(vec![]), Err(SeriesError::Empty));
}

#[test]
fn length_mismatch_rejected() {
    assert_eq!(
        TimeSeries::new(vec![0, 1], vec![1.0]),
        Err(SeriesError::LengthMismatch {
            timestamps: 2,
            values: 1
        })
    );
}

#[test]
fn non_finite_value_rejected() {
    assert_eq!(
        TimeSeries::from_values(vec![1.0, f64::NAN, 3.0]),
        Err(SeriesError::NonFinite { index: 1 })
    );
    assert_eq!(
        TimeSeries::from_values(vec![1.0, 2.0, f64::INFINITY]),
        Err(SeriesError::NonFinite { index: 2 })
    );
}

#[test]
fn decreasing_timestamps_rejected() {
    assert_eq!(
        TimeSeries::new(vec![0, 1, 1], vec![1.0, 2.0, 3.0]),
        Err(SeriesError::NotIncreasing { index: 2 })
    );
    assert_eq!(
        TimeSeries::new(vec![5, 3], vec![1.0, 2.0]),
        Err(SeriesError::NotIncreasing { index: 1 })
    );
}

#[test]
fn gap_rejected() {
    assert_eq!(
        TimeSeries::new(vec![0, 1, 2, 4], vec![1.0, 2.0, 3.0, 4.0]),
        Err(SeriesError::IrregularSpacing {
            index: 3,
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn split_at_partitions_in_order() {
    let ts = TimeSeries::new(vec![0, 2, 4, 6, 8], vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let (train, test) = ts.split_at(3).unwrap();
    assert_eq!(train.values(), &[1.0, 2.0, 3.0]);
    assert_eq!(train.timestamps(), &[0, 2, 4]);
    assert_eq!(test.values(), &[4.0, 5.0]);
    assert_eq!(test.timestamps(), &[6, 8]);
    assert_eq!(train.next_timestamps(2), test.timestamps());
}

#[test]
fn split_at_bounds() {
    let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(
        ts.split_at(0).unwrap_err(),
        SeriesError::SplitOutOfRange { at: 0, len: 3 }
    );
    assert_eq!(
        ts.split_at(3).unwrap_err(),
        SeriesError::SplitOutOfRange { at: 3, len: 3 }
    );
}
