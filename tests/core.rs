use anyhow::Result;
use ironstream::testing::*;
use ironstream::*;

fn cube(v: &i32) -> i32 {
    v * v * v
}

fn double(v: &i32) -> i32 {
    v * 2
}

fn half(v: &i32) -> i32 {
    v / 2
}

#[test]
fn map_simple_chains() -> Result<()> {
    let p = from_vec(vec![1, 2, 3]).map(double).map(half).map(double);
    assert_collections_equal(p.as_slice(), &[2, 4, 6]);

    let cubed = from_vec(vec![1, 2, 3]).map(cube);
    assert_collections_equal(cubed.as_slice(), &[1, 8, 27]);

    // Integer division truncates, so half-then-double is lossy on odd values.
    let lossy = cubed.map(half).map(double);
    assert_collections_equal(lossy.as_slice(), &[0, 8, 26]);
    Ok(())
}

#[test]
fn map_preserves_length_and_position() -> Result<()> {
    let input = pseudo_random_data(200, -50, 50);
    let out = from_vec(input.clone()).map(|v: &i32| v * 3 + 1);

    assert_eq!(out.len(), input.len());
    for (i, v) in input.iter().enumerate() {
        assert_eq!(out.as_slice()[i], v * 3 + 1);
    }
    Ok(())
}

#[test]
fn map_identity_is_a_copy() -> Result<()> {
    let p = from_vec(vec!["a".to_string(), "b".to_string()]);
    let same = p.map(String::clone);
    assert_eq!(same, p);
    Ok(())
}

#[test]
fn map_to_changes_element_type() -> Result<()> {
    let nums = from_vec(vec![1, 2, 3]);

    let labels = map_to(&nums, |v: &i32| format!("num-{v}"));
    assert_collections_equal(
        labels.as_slice(),
        &["num-1".to_string(), "num-2".to_string(), "num-3".to_string()],
    );

    #[derive(Debug, PartialEq)]
    struct NumInfo {
        original: i32,
        squared: i32,
    }

    let infos = nums.map_to(|v: &i32| NumInfo {
        original: *v,
        squared: v * v,
    });
    assert_collections_equal(
        infos.as_slice(),
        &[
            NumInfo { original: 1, squared: 1 },
            NumInfo { original: 2, squared: 4 },
            NumInfo { original: 3, squared: 9 },
        ],
    );

    // The source is untouched.
    assert_collections_equal(nums.as_slice(), &[1, 2, 3]);
    Ok(())
}

#[test]
fn filter_keeps_matching_elements_in_order() -> Result<()> {
    let evens = from_vec(vec![1, 2, 3, 4, 5, 6]).filter(|v: &i32| v % 2 == 0);
    assert_collections_equal(evens.as_slice(), &[2, 4, 6]);

    let words = from_vec(vec!["apple", "banana", "cherry", "date"]);
    let long = words.filter(|s: &&str| s.len() > 5);
    assert_collections_equal(long.as_slice(), &["banana", "cherry"]);
    Ok(())
}

#[test]
fn filter_output_is_an_ordered_subsequence() -> Result<()> {
    let input = pseudo_random_data(300, 0, 100);
    let out = from_vec(input.clone()).filter(|v: &i32| v % 3 == 0);

    assert!(out.len() <= input.len());
    assert_all(out.as_slice(), |v| v % 3 == 0);
    assert_is_subsequence(out.as_slice(), &input);
    assert_eq!(out.len(), input.iter().filter(|v| *v % 3 == 0).count());
    Ok(())
}

#[test]
fn filter_keep_all_is_identity() -> Result<()> {
    let nums = from_vec(vec![1, 2, 3, 4, 5, 6]);
    let out = nums.filter(Predicate::keep_all());
    assert_collections_equal(out.as_slice(), &[1, 2, 3, 4, 5, 6]);

    let words = from_vec(vec!["apple", "banana", "cherry", "date"]);
    let out = words.filter(Predicate::default());
    assert_collections_equal(out.as_slice(), &["apple", "banana", "cherry", "date"]);
    Ok(())
}

#[test]
fn filter_can_reject_everything() -> Result<()> {
    let out = from_vec(vec![1, 2, 3]).filter(|_: &i32| false);
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn filter_closure_may_borrow_locals() -> Result<()> {
    let blocked = vec!["spam".to_string(), "junk".to_string()];
    let mail = from_vec(vec![
        "hello".to_string(),
        "spam".to_string(),
        "news".to_string(),
        "junk".to_string(),
    ]);
    let inbox = mail.filter(|m: &String| !blocked.contains(m));
    assert_collections_equal(inbox.as_slice(), &["hello".to_string(), "news".to_string()]);
    Ok(())
}

#[test]
fn stages_never_alias_their_source() -> Result<()> {
    let base = from_vec(vec![1, 2, 3, 4]);
    let doubled = base.map(double);
    let odds = base.filter(|v: &i32| v % 2 == 1);
    let deduped = base.distinct_values();

    assert_collections_equal(base.as_slice(), &[1, 2, 3, 4]);
    assert_collections_equal(doubled.as_slice(), &[2, 4, 6, 8]);
    assert_collections_equal(odds.as_slice(), &[1, 3]);
    assert_collections_equal(deduped.as_slice(), &[1, 2, 3, 4]);

    // Two branches from a common ancestor stay independent.
    let branch_a = doubled.map(|v: &i32| v + 100);
    let branch_b = doubled.filter(|v: &i32| *v > 4);
    assert_collections_equal(doubled.as_slice(), &[2, 4, 6, 8]);
    assert_collections_equal(branch_a.as_slice(), &[102, 104, 106, 108]);
    assert_collections_equal(branch_b.as_slice(), &[6, 8]);
    Ok(())
}

#[test]
fn empty_pipeline_flows_through_every_stage() -> Result<()> {
    let empty: Pipeline<i32> = Pipeline::default();
    let out = empty
        .map(double)
        .filter(|v: &i32| *v > 0)
        .distinct_values();
    assert!(out.is_empty());
    assert!(out.group_by(|v: &i32| *v).is_empty());
    assert!(out.to_map(|v: &i32| *v).is_empty());
    Ok(())
}

#[test]
fn construction_paths_agree() -> Result<()> {
    let a = from_vec(vec![1, 2, 3]);
    let b = Pipeline::new(vec![1, 2, 3]);
    let c: Pipeline<i32> = vec![1, 2, 3].into();
    let d: Pipeline<i32> = (1..=3).collect();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
    Ok(())
}

#[test]
fn chain_over_fixture_records() -> Result<()> {
    let logs = from_vec(sample_log_entries());
    let failing_paths = logs
        .filter(|e: &SampleLogEntry| e.status >= 400)
        .map_to(|e: &SampleLogEntry| e.path.clone())
        .distinct_values();

    assert_collections_equal(
        failing_paths.as_slice(),
        &["/api/users".to_string(), "/api/posts".to_string()],
    );
    Ok(())
}
