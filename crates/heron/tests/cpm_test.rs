use heron::{CriticalPathMethod, Error};

fn jobs() -> (Vec<f64>, Vec<Vec<usize>>) {
    let durations = vec![41.0, 51.0, 50.0, 36.0, 38.0, 45.0, 21.0, 32.0, 32.0, 29.0];
    let successors = vec![
        vec![1, 7, 9],
        vec![2],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![3, 8],
        vec![3, 8],
        vec![2],
        vec![4, 6],
    ];
    (durations, successors)
}

#[test]
fn schedules_jobs_with_precedence_constraints() {
    let (durations, successors) = jobs();
    let cpm = CriticalPathMethod::new(&durations, &successors).unwrap();

    assert_eq!(cpm.job_count(), 10);
    assert_eq!(
        cpm.start_times(),
        vec![0.0, 41.0, 123.0, 91.0, 70.0, 0.0, 70.0, 41.0, 91.0, 41.0]
    );
    assert_eq!(cpm.finish_time(), 173.0);
    assert_eq!(cpm.start_time(2), Some(123.0));
    assert_eq!(cpm.job_finish_time(2), Some(173.0));
    assert_eq!(cpm.job_finish_time(5), Some(45.0));
    assert_eq!(cpm.start_time(10), None);
    assert_eq!(cpm.critical_path(), vec![0, 9, 6, 8, 2]);
}

#[test]
fn every_successor_starts_after_its_predecessor_ends() {
    let (durations, successors) = jobs();
    let cpm = CriticalPathMethod::new(&durations, &successors).unwrap();
    for (i, next) in successors.iter().enumerate() {
        let done = cpm.job_finish_time(i).unwrap();
        for &p in next {
            assert!(cpm.start_time(p).unwrap() >= done, "job {p} starts before {i} ends");
        }
    }
}

#[test]
fn independent_jobs_all_start_at_zero() {
    let cpm = CriticalPathMethod::new(&[3.0, 7.0, 5.0], &[]).unwrap();
    assert_eq!(cpm.start_times(), vec![0.0, 0.0, 0.0]);
    assert_eq!(cpm.finish_time(), 7.0);
    assert_eq!(cpm.critical_path(), vec![1]);
}

#[test]
fn an_empty_schedule_finishes_immediately() {
    let cpm = CriticalPathMethod::new(&[], &[]).unwrap();
    assert_eq!(cpm.job_count(), 0);
    assert_eq!(cpm.finish_time(), 0.0);
    assert!(cpm.critical_path().is_empty());
}

#[test]
fn unknown_jobs_are_rejected() {
    assert_eq!(
        CriticalPathMethod::new(&[1.0, 2.0], &[vec![], vec![2]]).unwrap_err(),
        Error::JobOutOfRange {
            job: 2,
            job_count: 2
        }
    );
    assert_eq!(
        CriticalPathMethod::new(&[1.0], &[vec![], vec![]]).unwrap_err(),
        Error::JobOutOfRange {
            job: 1,
            job_count: 1
        }
    );
}

#[test]
fn finish_time_follows_the_schedule_even_when_negative() {
    let cpm = CriticalPathMethod::new(&[-3.0], &[]).unwrap();
    assert_eq!(cpm.job_finish_time(0), Some(-3.0));
    assert_eq!(cpm.finish_time(), -3.0);
}
