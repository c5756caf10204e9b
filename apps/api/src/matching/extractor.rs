//! Skill Extractor — dictionary matching of free text against the skill taxonomy.
//!
//! Two passes:
//! 1. every canonical label is searched in the lowercased text on token
//!    boundaries ("java" never hits inside "javascript");
//! 2. all-uppercase tokens of the original text ("AWS", "GCP") are looked up
//!    directly and keep their uppercase display form.
//!
//! Output holds exactly one display string per canonical skill.

use std::collections::HashMap;

use regex::Regex;

use crate::taxonomy::SkillTaxonomy;

struct SkillPattern {
    display: String,
    regex: Regex,
}

pub struct SkillExtractor {
    patterns: Vec<SkillPattern>,
    /// canonical label -> index into `patterns`
    index: HashMap<String, usize>,
    token_pattern: Regex,
}

impl SkillExtractor {
    /// Compiles one boundary-anchored pattern per taxonomy label.
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self, regex::Error> {
        let mut patterns = Vec::with_capacity(taxonomy.total_skills());
        let mut index = HashMap::with_capacity(taxonomy.total_skills());

        for label in taxonomy.labels() {
            let regex = Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(label)))?;
            index.insert(label.to_string(), patterns.len());
            patterns.push(SkillPattern {
                display: title_case(label),
                regex,
            });
        }

        Ok(Self {
            patterns,
            index,
            token_pattern: Regex::new(r"\w[\w+#/.\-]*")?,
        })
    }

    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text_lower = text.to_lowercase();

        // display form per pattern, by pattern index
        let mut found: Vec<Option<String>> = vec![None; self.patterns.len()];

        for (slot, pattern) in found.iter_mut().zip(&self.patterns) {
            if pattern.regex.is_match(&text_lower) {
                *slot = Some(pattern.display.clone());
            }
        }

        for token in self.token_pattern.find_iter(text) {
            let word = token.as_str().trim_end_matches(['.', '-', '/']);
            // "CI/CD" is a label on its own; "AWS/GCP" is two.
            if !self.record_acronym(word, &mut found) && word.contains('/') {
                for part in word.split('/') {
                    self.record_acronym(part, &mut found);
                }
            }
        }

        found.into_iter().flatten().collect()
    }

    /// Keeps an all-uppercase token as the display form of its label.
    fn record_acronym(&self, word: &str, found: &mut [Option<String>]) -> bool {
        if word.chars().count() < 2 || !is_all_uppercase(word) {
            return false;
        }
        match self.index.get(&word.to_lowercase()) {
            Some(&i) => {
                found[i] = Some(word.to_string());
                true
            }
            None => false,
        }
    }
}

/// Uppercases the first letter of every alphabetic run: "ci/cd" -> "Ci/Cd".
fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;
    for c in label.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// At least one cased letter and no lowercase ones ("AWS", "C++", "CI/CD").
fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, HashSet};

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&SkillTaxonomy::builtin().unwrap()).unwrap()
    }

    fn has(skills: &[String], skill: &str) -> bool {
        skills.iter().any(|s| s == skill)
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extractor().extract_skills("").is_empty());
        assert!(extractor().extract_skills("   \n").is_empty());
    }

    #[test]
    fn test_python_and_aws() {
        let skills = extractor().extract_skills("I use Python and AWS daily");
        assert!(has(&skills, "Python"));
        assert!(has(&skills, "AWS"));
        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("java")));
    }

    #[test]
    fn test_java_not_matched_inside_javascript() {
        let skills = extractor().extract_skills("javascript developer");
        assert_eq!(skills, vec!["Javascript".to_string()]);
    }

    #[test]
    fn test_java_and_javascript_both_present() {
        let skills = extractor().extract_skills("Java backend, JavaScript frontend");
        assert!(has(&skills, "Java"));
        assert!(has(&skills, "Javascript"));
    }

    #[test]
    fn test_multi_word_labels_need_exact_phrase() {
        let skills = extractor().extract_skills("Applied machine learning and deep   learning");
        assert!(has(&skills, "Machine Learning"));
        assert!(!has(&skills, "Deep Learning"));
    }

    #[test]
    fn test_symbol_labels() {
        let skills = extractor().extract_skills("Modern c++, some c# and a ci/cd pipeline.");
        assert!(has(&skills, "C++"));
        assert!(has(&skills, "C#"));
        assert!(has(&skills, "Ci/Cd"));
    }

    #[test]
    fn test_acronym_keeps_uppercase_single_casing() {
        let skills = extractor().extract_skills("Deployed on AWS and GCP with aws-cli");
        let aws: Vec<&String> = skills
            .iter()
            .filter(|s| s.eq_ignore_ascii_case("aws"))
            .collect();
        assert_eq!(aws, vec!["AWS"]);
        assert!(has(&skills, "GCP"));
    }

    #[test]
    fn test_lowercase_acronym_is_title_cased() {
        let skills = extractor().extract_skills("deployed on aws");
        assert_eq!(skills, vec!["Aws".to_string()]);
    }

    #[test]
    fn test_single_letter_uppercase_ignored() {
        let skills = extractor().extract_skills("I know C and R");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_output_is_unique_and_in_taxonomy_order() {
        let skills = extractor().extract_skills("Docker, Python, docker, PYTHON, React");
        assert_eq!(skills, vec!["PYTHON", "React", "Docker"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let e = extractor();
        let text = "Senior Rust engineer with Kubernetes, Terraform and GitHub Actions";
        assert_eq!(e.extract_skills(text), e.extract_skills(text));
    }

    #[test]
    fn test_custom_taxonomy() {
        let mut categories = BTreeMap::new();
        categories.insert(SkillCategory::Programming, vec!["zig".to_string()]);
        let taxonomy = SkillTaxonomy::from_categories(categories).unwrap();
        let e = SkillExtractor::new(&taxonomy).unwrap();

        assert_eq!(e.extract_skills("Zig and Python"), vec!["Zig".to_string()]);
        assert_eq!(e.extract_skills("ZIG and AWS"), vec!["ZIG".to_string()]);
    }

    #[test]
    fn test_slash_joined_acronyms_split_into_labels() {
        let skills = extractor().extract_skills("Deployed on AWS/GCP.");
        assert_eq!(skills, vec!["AWS", "GCP"]);
    }

    #[test]
    fn test_slash_label_stays_whole() {
        let skills = extractor().extract_skills("Owns the CI/CD pipeline");
        assert_eq!(skills, vec!["CI/CD"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("react native"), "React Native");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        let words = prop::sample::select(vec![
            "python", "PYTHON", "Java", "javascript", "AWS", "aws", "GCP", "AWS/GCP",
            "CI/CD", "ci/cd", "C++", "c#", "machine", "learning", "react", "and", "with",
            "Rust", "R", "C", "docker.", "kubernetes,", "node.js", "-",
        ]);
        prop_oneof![
            prop::collection::vec(words, 0..12).prop_map(|w| w.join(" ")),
            ".{0,80}",
        ]
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(text in text_strategy()) {
            let e = extractor();
            prop_assert_eq!(e.extract_skills(&text), e.extract_skills(&text));
        }

        #[test]
        fn prop_one_known_label_per_skill(text in text_strategy()) {
            let taxonomy = SkillTaxonomy::builtin().unwrap();
            let labels: HashSet<&str> = taxonomy.labels().collect();
            let skills = SkillExtractor::new(&taxonomy).unwrap().extract_skills(&text);

            let mut seen = HashSet::new();
            for skill in &skills {
                let canonical = skill.to_lowercase();
                prop_assert!(labels.contains(canonical.as_str()), "{} is not a label", skill);
                prop_assert!(seen.insert(canonical), "{} reported twice", skill);
            }
        }
    }
}
