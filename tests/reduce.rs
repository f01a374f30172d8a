use anyhow::{Context, Result};
use ironstream::testing::*;
use ironstream::*;
use std::collections::HashMap;

#[test]
fn reduce_with_seed() -> Result<()> {
    let p = from_vec(vec![1, 2, 3, 4, 5]);
    assert_eq!(p.reduce(|a: i32, b: &i32| a + b, Some(0)), Some(15));
    assert_eq!(p.reduce(|a: i32, b: &i32| a * b, Some(1)), Some(120));

    let letters = from_vec(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    let joined = letters
        .reduce(|a: String, b: &String| a + b, Some(String::new()))
        .context("seeded reduce always yields a value")?;
    assert_eq!(joined, "abc");
    Ok(())
}

#[test]
fn seed_is_folded_with_every_element() -> Result<()> {
    let p = from_vec(vec![1, 2, 3]);
    assert_eq!(p.reduce(|a: i32, b: &i32| a + b, Some(100)), Some(106));
    Ok(())
}

#[test]
fn reduce_without_seed_uses_first_element() -> Result<()> {
    let p = from_vec(vec![1, 2, 3]);
    assert_eq!(p.reduce(|a: i32, b: &i32| a + b, None), Some(6));

    // The first element is the seed, not folded a second time.
    let trace = from_vec(vec!["x".to_string(), "y".to_string(), "z".to_string()]);
    let out = trace.reduce(|a: String, b: &String| format!("({a}+{b})"), None);
    assert_eq!(out.as_deref(), Some("((x+y)+z)"));
    Ok(())
}

#[test]
fn reduce_single_element_without_seed() -> Result<()> {
    let p = from_vec(vec![42]);
    assert_eq!(p.reduce(|_: i32, _: &i32| -> i32 { panic!("nothing to fold") }, None), Some(42));
    Ok(())
}

#[test]
fn reduce_empty_without_seed_is_none() -> Result<()> {
    let p: Pipeline<i32> = from_vec(vec![]);
    assert_eq!(p.reduce(|a: i32, b: &i32| a + b, None), None);
    assert_eq!(p.reduce(FoldFn::replace(), None), None);
    Ok(())
}

#[test]
fn reduce_empty_with_seed_returns_seed() -> Result<()> {
    let nums: Pipeline<i32> = from_vec(vec![]);
    assert_eq!(nums.reduce(|a: i32, b: &i32| a + b, Some(0)), Some(0));

    let strs: Pipeline<String> = from_vec(vec![]);
    assert_eq!(
        strs.reduce(|a: String, b: &String| a + b, Some(String::new())),
        Some(String::new())
    );
    Ok(())
}

#[test]
fn default_fold_replaces_accumulator() -> Result<()> {
    let p = from_vec(vec![3, 1, 4, 1, 5]);
    assert_eq!(p.reduce(FoldFn::replace(), None), Some(5));
    assert_eq!(p.reduce(FoldFn::default(), Some(99)), Some(5));

    let empty: Pipeline<i32> = Pipeline::default();
    assert_eq!(empty.reduce(FoldFn::replace(), Some(99)), Some(99));
    Ok(())
}

#[test]
fn pipeline_is_reusable_after_reduce() -> Result<()> {
    let p = from_vec(vec![1, 2, 3, 4]);
    let first = p.reduce(|a: i32, b: &i32| a + b, None);
    let second = p.reduce(|a: i32, b: &i32| a + b, None);
    assert_eq!(first, Some(10));
    assert_eq!(first, second);
    assert_collections_equal(p.as_slice(), &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn fold_into_map_accumulator() -> Result<()> {
    let people = from_vec(people_with_duplicates()).distinct(|p: &Person| p.name.clone());

    let stats = people.fold(
        HashMap::from([("total", 0u32), ("count", 0u32)]),
        |mut acc: HashMap<&'static str, u32>, p: &Person| {
            *acc.entry("total").or_default() += p.age;
            *acc.entry("count").or_default() += 1;
            acc
        },
    );

    assert_maps_equal(&stats, &HashMap::from([("total", 90), ("count", 3)]));
    Ok(())
}

#[test]
fn fold_empty_returns_init() -> Result<()> {
    let p: Pipeline<u8> = Pipeline::default();
    let out = p.fold(vec![0u8], |mut acc: Vec<u8>, v: &u8| {
        acc.push(*v);
        acc
    });
    assert_eq!(out, vec![0]);
    Ok(())
}

#[test]
fn fold_can_collect_a_different_type() -> Result<()> {
    let words = from_vec(sample_words());
    let total_chars = words.fold(0usize, |acc: usize, w: &String| acc + w.len());
    assert_eq!(total_chars, sample_words().iter().map(String::len).sum::<usize>());
    Ok(())
}
