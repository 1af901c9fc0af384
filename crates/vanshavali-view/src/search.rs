use vanshavali_data::Person;

/// First person, in dataset order, whose name contains `query`.
///
/// Plain case-sensitive substring matching: `राम` finds `शिवराम`. A query
/// that is empty after trimming matches nobody.
pub fn find_by_name<'a>(people: &'a [Person], query: &str) -> Option<&'a Person> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    people.iter().find(|person| person.name.contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanshavali_data::Point;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            position: Point::default(),
        }
    }

    #[test]
    fn first_match_in_dataset_order_wins() {
        let people = vec![person("1", "शिवराम"), person("2", "राम")];
        assert_eq!(find_by_name(&people, "राम").map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn blank_query_matches_nobody() {
        let people = vec![person("1", "Asha")];
        assert!(find_by_name(&people, "   ").is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let people = vec![person("1", "Asha")];
        assert!(find_by_name(&people, "asha").is_none());
        assert!(find_by_name(&people, " sha ").is_some());
    }
}
