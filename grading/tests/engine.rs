use grading::{
    Classification, CourseResult, CourseStatus, GradingError, Letter, Mark, Standing, cgpa_for,
    classify, gpa_for, grade_for, standing, summarize_semester,
};

fn result(mark: f64, hours: u32) -> CourseResult {
    CourseResult::from_raw(mark, hours).unwrap()
}

#[test]
fn boundary_inclusivity() {
    let just_below = grade_for(Mark::new(79.9).unwrap());
    assert_eq!(just_below.letter, Letter::BPlus);
    assert_eq!(just_below.points, 3.5);
    assert_eq!(just_below.status, CourseStatus::Pass);

    let on_boundary = grade_for(Mark::new(80.0).unwrap());
    assert_eq!(on_boundary.letter, Letter::A);
    assert_eq!(on_boundary.points, 4.0);

    let e2 = grade_for(Mark::new(29.9).unwrap());
    assert_eq!(e2.letter, Letter::E2);
    assert_eq!(e2.status, CourseStatus::UnsupplementableFail);

    let e1 = grade_for(Mark::new(30.0).unwrap());
    assert_eq!(e1.letter, Letter::E1);
    assert_eq!(e1.status, CourseStatus::Repeat);
}

#[test]
fn gpa_examples() {
    assert_eq!(gpa_for(&[]), 0.0);
    assert_eq!(gpa_for(&[result(80.0, 3), result(40.0, 3)]), 2.5);
}

#[test]
fn classification_examples() {
    assert_eq!(classify(2.5), Classification::LowerCredit);
    assert_eq!(classify(0.99), Classification::Fail);
}

#[test]
fn unsupplementable_fail_overrides_gpa() {
    assert_eq!(standing(2.0, &[result(25.0, 3)]), Standing::Withdrawn);
}

#[test]
fn cgpa_examples() {
    assert_eq!(cgpa_for(&[3.0, 4.0]), Ok(3.5));
    assert_eq!(cgpa_for(&[]), Ok(0.0));
}

#[test]
fn cgpa_rejects_gpas_no_semester_can_produce() {
    assert!(matches!(
        cgpa_for(&[f64::NAN, 4.0]),
        Err(GradingError::InvalidGpa(_))
    ));
    assert_eq!(
        cgpa_for(&[f64::INFINITY]),
        Err(GradingError::InvalidGpa(f64::INFINITY))
    );
}

#[test]
fn maximal_credit_hours_are_summed_without_overflow() {
    let big = result(85.0, u32::MAX);
    let summary = summarize_semester(&[big, big]);
    assert_eq!(summary.total_credits, 2 * u32::MAX as u64);
    assert_eq!(summary.gpa, 4.0);
}

#[test]
fn invalid_inputs_never_reach_the_engine() {
    assert_eq!(
        CourseResult::from_raw(101.0, 3),
        Err(GradingError::InvalidMark(101.0))
    );
    assert_eq!(
        CourseResult::from_raw(50.0, 0),
        Err(GradingError::InvalidCreditHours(0))
    );
}

#[test]
fn summary_is_recomputed_when_results_change() {
    let mut results = vec![result(75.0, 3), result(68.0, 3)];
    let before = summarize_semester(&results);
    assert_eq!(before.standing, Standing::Active);

    results.push(result(12.0, 2));
    let after = summarize_semester(&results);
    assert_eq!(after.standing, Standing::Withdrawn);
    assert!(after.gpa < before.gpa);
}

#[test]
fn engine_is_usable_across_threads() {
    let results = vec![result(81.0, 3), result(52.0, 4), result(44.0, 2)];
    let expected = gpa_for(&results);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let results = results.clone();
            std::thread::spawn(move || gpa_for(&results))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
