use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Count tag occurrences across articles, most used first then alphabetically.
pub fn tally_tags<I, T>(tag_sets: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for tags in tag_sets {
        for tag in tags {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut tallied: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    sort_tag_counts(&mut tallied);
    tallied
}

pub fn sort_tag_counts(counts: &mut [TagCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn counts_and_orders() {
        let tallied = tally_tags(vec![set(&["AI", "Tech"]), set(&["Tech"]), set(&["Finance", "AI", "Tech"])]);
        assert_eq!(
            tallied,
            vec![
                TagCount { tag: "Tech".into(), count: 3 },
                TagCount { tag: "AI".into(), count: 2 },
                TagCount { tag: "Finance".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_are_alphabetical_and_case_sensitive() {
        let tallied = tally_tags(vec![set(&["b", "B", "a"])]);
        let names: Vec<_> = tallied.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(names, vec!["B", "a", "b"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(tally_tags(Vec::<Vec<String>>::new()).is_empty());
    }
}
