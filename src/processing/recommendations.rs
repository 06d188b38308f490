//! Suggestions for skills the resume is missing

use std::collections::HashSet;

/// One suggestion per missing skill, in lexicographic skill order.
pub fn build_recommendations(missing: &HashSet<String>) -> Vec<String> {
    let mut skills: Vec<&String> = missing.iter().collect();
    skills.sort();

    skills.into_iter().map(|skill| recommendation_for(skill)).collect()
}

pub fn recommendation_for(skill: &str) -> String {
    format!("Learn '{}' to improve your match score.", skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_sorted() {
        let missing: HashSet<String> = ["sql", "docker"].iter().map(|s| s.to_string()).collect();

        let recommendations = build_recommendations(&missing);

        assert_eq!(
            recommendations,
            vec![
                "Learn 'docker' to improve your match score.".to_string(),
                "Learn 'sql' to improve your match score.".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_missing_skills() {
        assert!(build_recommendations(&HashSet::new()).is_empty());
    }
}
