use crate::Participant;
use std::collections::HashSet;

/// Appends each incoming participant whose name has not been seen before,
/// preserving incoming order. First write wins permanently: an existing
/// name's weight and category never change short of a full reset. Duplicates
/// within the incoming batch collapse to their first occurrence too.
pub fn merge(existing: &[Participant], incoming: &[Participant]) -> Vec<Participant> {
    let mut seen: HashSet<&str> = existing.iter().map(|entry| entry.name.as_str()).collect();
    let mut merged = existing.to_vec();
    for candidate in incoming {
        if seen.insert(candidate.name.as_str()) {
            merged.push(candidate.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn p(name: &str, weight: u32, category: Category) -> Participant {
        Participant::new(name, weight, category)
    }

    #[test]
    fn appends_new_names_in_order() {
        let existing = vec![p("Alice", 2, Category::Female)];
        let incoming = vec![p("Bob", 5, Category::Male), p("Carol", 1, Category::Female)];
        let merged = merge(&existing, &incoming);
        let names: Vec<&str> = merged.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn first_write_wins_across_batches() {
        let a = vec![p("Alice", 2, Category::Female)];
        let b = vec![p("Alice", 40, Category::Male), p("Bob", 3, Category::Male)];
        let c = vec![p("Bob", 99, Category::Female), p("Carol", 1, Category::Female)];
        let merged = merge(&merge(&a, &b), &c);
        assert_eq!(merged[0], p("Alice", 2, Category::Female));
        assert_eq!(merged[1], p("Bob", 3, Category::Male));
        assert_eq!(merged[2], p("Carol", 1, Category::Female));
    }

    #[test]
    fn collapses_duplicates_within_one_batch() {
        let incoming = vec![
            p("Alice", 7, Category::Female),
            p("Alice", 1, Category::Male),
        ];
        let merged = merge(&[], &incoming);
        assert_eq!(merged, vec![p("Alice", 7, Category::Female)]);
    }
}
