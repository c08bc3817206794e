// crates/shared-kernel/tests/counts_sum.rs
use code_counter_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn linecount_sum_ref() {
    let values = [LineCount::from(5), LineCount::from(7)];
    let total: LineCount = values.iter().sum();
    assert_eq!(usize::from(total), 12);
}

#[test]
fn linecount_mixed_arithmetic() {
    let mut lines = LineCount::from(2);
    let next = lines + 3usize;
    assert_eq!(next, 5usize);
    lines += 4usize;
    assert_eq!(lines, LineCount::from(6));
}

#[test]
fn increment_saturates() {
    let mut lines = LineCount::from(usize::MAX);
    lines.increment();
    assert_eq!(lines, usize::MAX);

    let mut zero = LineCount::zero();
    zero.increment();
    assert_eq!(zero, 1usize);
}

#[test]
fn collect_from_usize_iterator() {
    let collected: LineCount = [1usize, 2, 3].into_iter().collect();
    assert_eq!(usize::from(collected), 6);
    assert!(LineCount::default().is_zero());
}
