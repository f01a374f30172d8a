use anyhow::Result;
use ironstream::extensions::CompositeTransform;
use ironstream::testing::*;
use ironstream::*;

struct TrimAndFilter;

impl CompositeTransform<String, String> for TrimAndFilter {
    fn expand(&self, input: &Pipeline<String>) -> Pipeline<String> {
        input
            .map(|s: &String| s.trim().to_string())
            .filter(|s: &String| !s.is_empty())
    }
}

#[test]
fn composite_transform_basic() -> Result<()> {
    let data = from_vec(vec![
        "  hello  ".to_string(),
        String::new(),
        "world".to_string(),
        "   ".to_string(),
    ]);

    let cleaned = data.apply_composite(&TrimAndFilter);
    assert_eq!(cleaned.as_slice(), &["hello", "world"]);
    // The input is untouched.
    assert_eq!(data.len(), 4);
    Ok(())
}

struct ParseInts;

impl CompositeTransform<String, i32> for ParseInts {
    fn expand(&self, input: &Pipeline<String>) -> Pipeline<i32> {
        let numeric = input.filter(|s: &String| s.parse::<i32>().is_ok());
        map_to(&numeric, |s: &String| s.parse::<i32>().unwrap_or_default())
    }
}

#[test]
fn composite_transform_type_change() -> Result<()> {
    let data = from_vec(vec![
        "123".to_string(),
        "not_a_number".to_string(),
        "456".to_string(),
    ]);

    let parsed = data.apply_composite(&ParseInts);
    assert_collections_equal(parsed.as_slice(), &[123, 456]);
    Ok(())
}

/// Distinct adults, keyed by a configurable age threshold.
struct AdultsOver {
    min_age: u32,
}

impl CompositeTransform<Person, String> for AdultsOver {
    fn expand(&self, input: &Pipeline<Person>) -> Pipeline<String> {
        let min_age = self.min_age;
        let adults = input
            .filter(|p: &Person| p.age >= min_age)
            .distinct(|p: &Person| p.name.clone());
        adults.map_to(|p: &Person| p.name.clone())
    }
}

#[test]
fn composite_transform_with_state() -> Result<()> {
    let people = from_vec(people_with_duplicates());

    let names = people.apply_composite(&AdultsOver { min_age: 30 });
    assert_collections_equal(names.as_slice(), &["Alice".to_string(), "Charlie".to_string()]);

    let everyone = people.apply_composite(&AdultsOver { min_age: 0 });
    assert_eq!(everyone.len(), 3);
    Ok(())
}

#[test]
fn composites_chain() -> Result<()> {
    let data = from_vec(vec![" 7 ".to_string(), "x".to_string(), "  ".to_string(), "12".to_string()]);

    let doubled = data
        .apply_composite(&TrimAndFilter)
        .apply_composite(&ParseInts)
        .map(|v: &i32| v * 2);
    assert_collections_equal(doubled.as_slice(), &[14, 24]);
    Ok(())
}

#[test]
fn closures_are_composites() -> Result<()> {
    let word_lengths = |p: &Pipeline<String>| map_to(p, |w: &String| w.len()).distinct_values();

    let lengths = from_vec(sample_words()).apply_composite(&word_lengths);
    assert_collections_equal(lengths.as_slice(), &[5, 6, 4, 3]);
    Ok(())
}
