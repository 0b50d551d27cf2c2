//! Rule-based named-entity recognizer
//!
//! Two passes over the raw text:
//! - regular expressions for money, percentages and dates
//! - runs of capitalized words, typed with gazetteers, organization and
//!   location suffixes, personal titles and first names
//!
//! Overlapping candidates are resolved leftmost-longest and emitted in text
//! order.

use super::EntityRecognizer;
use crate::error::Result;
use crate::models::Entity;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const PERSON: &str = "PERSON";
pub const ORG: &str = "ORG";
pub const GPE: &str = "GPE";
pub const LOC: &str = "LOC";
pub const NORP: &str = "NORP";
pub const DATE: &str = "DATE";
pub const MONEY: &str = "MONEY";
pub const PERCENT: &str = "PERCENT";

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let month = MONTHS.join("|");
    let weekday = WEEKDAYS.join("|");
    let patterns = [
        (
            r"\$\d+(?:,\d{3})*(?:\.\d+)?(?:\s+(?:thousand|million|billion|trillion)\b)?"
                .to_string(),
            MONEY,
        ),
        (
            r"\b\d+(?:,\d{3})*(?:\.\d+)?\s+(?:dollars|euros|pounds)\b".to_string(),
            MONEY,
        ),
        (r"\b\d+(?:\.\d+)?(?:\s?%|\s+percent\b)".to_string(), PERCENT),
        (
            format!(r"\b(?:{month})(?:\s+\d{{1,2}}(?:st|nd|rd|th)?)?(?:,?\s+\d{{4}})?\b"),
            DATE,
        ),
        (format!(r"\b\d{{1,2}}\s+(?:{month})(?:,?\s+\d{{4}})?\b"), DATE),
        (format!(r"\b(?:{weekday})s?\b"), DATE),
        (r"\b\d{1,2}/\d{1,2}/\d{2,4}\b".to_string(), DATE),
        (r"\b(?:1[89]|20)\d{2}s?\b".to_string(), DATE),
        (r"\bthe\s+\d0s\b".to_string(), DATE),
        (
            r"(?i)\b(?:today|yesterday|tomorrow|(?:this|last|next)\s+(?:week|month|year)|the\s+weekend)\b"
                .to_string(),
            DATE,
        ),
    ];

    patterns
        .into_iter()
        .map(|(pattern, label)| (Regex::new(&pattern).expect("valid entity pattern"), label))
        .collect()
});

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&|(?:[A-Z]\.){2,}|[A-Za-z][A-Za-z0-9'’\-]*").expect("valid word pattern")
});

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    label: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    /// End without a possessive suffix
    end: usize,
    possessive: bool,
}

/// Gazetteer-backed recognizer emitting spaCy-style labels
#[derive(Debug, Clone)]
pub struct RuleBasedRecognizer {
    gpe: HashSet<String>,
    loc: HashSet<String>,
    norp: HashSet<String>,
    orgs: HashSet<String>,
    org_suffixes: HashSet<String>,
    loc_suffixes: HashSet<String>,
    titles: HashSet<String>,
    first_names: HashSet<String>,
    /// Capitalized function words dropped from the front of a run
    leading_words: HashSet<String>,
    connectors: HashSet<String>,
}

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        Self {
            gpe: set(&[
                "U.S.", "US", "USA", "United States", "America", "U.K.", "UK", "United Kingdom",
                "Britain", "England", "Scotland", "Wales", "Ireland", "Canada", "Mexico", "Brazil",
                "Argentina", "France", "Germany", "Italy", "Spain", "Portugal", "Netherlands",
                "Belgium", "Switzerland", "Austria", "Sweden", "Norway", "Denmark", "Finland",
                "Poland", "Ukraine", "Russia", "Turkey", "Greece", "Israel", "Iran", "Iraq",
                "Syria", "Egypt", "Saudi Arabia", "India", "Pakistan", "China", "Japan",
                "South Korea", "North Korea", "Korea", "Taiwan", "Vietnam", "Indonesia",
                "Australia", "New Zealand", "South Africa", "Nigeria", "Kenya", "Washington",
                "Washington D.C.", "New York", "New York City", "Los Angeles", "Chicago",
                "Houston", "San Francisco", "Boston", "Seattle", "Miami", "Atlanta", "London",
                "Paris", "Berlin", "Rome", "Madrid", "Moscow", "Kyiv", "Beijing", "Shanghai",
                "Hong Kong", "Tokyo", "Seoul", "Delhi", "New Delhi", "Mumbai", "Sydney",
                "Toronto", "Brussels", "Geneva", "Dubai", "Jerusalem", "Gaza", "California",
                "Texas", "Florida", "Ohio", "Michigan", "Pennsylvania", "Georgia", "Arizona",
                "Nevada", "Virginia", "Oregon", "Colorado", "Illinois", "Massachusetts",
            ]),
            loc: set(&[
                "Earth", "Europe", "Asia", "Africa", "Antarctica", "North America",
                "South America", "Middle East", "Arctic", "Atlantic", "Pacific", "Mediterranean",
                "Amazon Rainforest", "Sahara", "Himalayas", "Alps", "Mars", "Moon",
            ]),
            norp: set(&[
                "American", "Americans", "British", "Canadian", "Mexican", "French", "German",
                "Germans", "Italian", "Spanish", "Russian", "Russians", "Ukrainian",
                "Ukrainians", "Chinese", "Japanese", "Korean", "Indian", "Israeli", "Israelis",
                "Palestinian", "Palestinians", "Iranian", "Arab", "Arabs", "European",
                "Europeans", "African", "Asian", "Australian", "Democrat", "Democrats",
                "Democratic", "Republican", "Republicans", "Conservative", "Conservatives",
                "Labour", "Liberal", "Liberals", "Christian", "Christians", "Catholic",
                "Catholics", "Muslim", "Muslims", "Jewish", "Jews", "Hindu", "Buddhist",
            ]),
            orgs: set(&[
                "Nature", "Science", "NASA", "FBI", "CIA", "NSA", "FDA", "CDC", "WHO", "UN",
                "United Nations", "EU", "European Union", "NATO", "IMF", "World Bank", "Reuters",
                "BBC", "CNN", "NPR", "PBS", "ABC", "CBS", "NBC", "Fox News", "Associated Press",
                "AP", "Google", "Apple", "Microsoft", "Amazon", "Facebook", "Meta", "Twitter",
                "Tesla", "Netflix", "Pfizer", "Moderna", "Congress", "Senate", "Pentagon",
                "White House", "Kremlin", "Supreme Court", "Harvard", "Stanford", "MIT", "Oxford",
                "Cambridge", "Federal Reserve", "Wall Street", "General Electric", "General Motors",
                "General Mills", "General Dynamics",
            ]),
            org_suffixes: set(&[
                "Inc", "Corp", "Corporation", "Company", "Co", "Ltd", "LLC", "Group", "Holdings",
                "Bank", "University", "College", "Institute", "Agency", "Council", "Department",
                "Ministry", "Association", "Foundation", "Organization", "Organisation",
                "Committee", "Commission", "Party", "Administration", "Court", "Times", "Post",
                "News", "Journal", "Tribune", "Herald", "Network", "Press", "Laboratories",
                "Labs", "Hospital", "Clinic", "Airlines", "Motors", "Technologies", "Systems",
            ]),
            loc_suffixes: set(&[
                "Ocean", "Sea", "River", "Lake", "Mountain", "Mountains", "Valley", "Island",
                "Islands", "Desert", "Bay", "Gulf", "Peninsula", "Forest",
            ]),
            titles: set(&[
                "Mr", "Mrs", "Ms", "Dr", "Prof", "Professor", "President", "Senator", "Sen",
                "Rep", "Representative", "Gov", "Governor", "Mayor", "Judge", "Justice",
                "Minister", "Chancellor", "Secretary", "General", "Gen", "Pope", "King", "Queen",
                "Prince", "Princess", "Sir", "Dame", "Lady", "Lord",
            ]),
            first_names: set(&[
                "John", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph",
                "Thomas", "Charles", "Daniel", "Matthew", "Mark", "Paul", "Steven", "Andrew",
                "Kevin", "Brian", "George", "Edward", "Peter", "Joe", "Donald", "Barack", "Bill",
                "Hillary", "Kamala", "Bernie", "Elon", "Jeff", "Tim", "Sundar", "Satya", "Mary",
                "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
                "Sarah", "Karen", "Nancy", "Lisa", "Emily", "Anna", "Maria", "Emma", "Olivia",
                "Angela", "Emmanuel", "Vladimir", "Volodymyr", "Xi", "Narendra", "Justin", "Rishi",
                "Keir", "Boris", "Anthony", "Antony", "Alexander", "Alejandro", "Ron", "Mike", "Nikki",
            ]),
            leading_words: set(&[
                "the", "a", "an", "this", "that", "these", "those", "in", "on", "at", "for",
                "from", "by", "with", "after", "before", "when", "while", "but", "and", "or",
                "if", "as", "his", "her", "their", "our", "my", "its", "it", "we", "they", "he",
                "she", "you", "i", "some", "many", "most", "all", "every", "according",
            ]),
            connectors: set(&["of", "for", "de", "the", "&"]),
        }
    }

    fn is_name_word(&self, word: &Word) -> bool {
        word.text.starts_with(|c: char| c.is_ascii_uppercase())
            && word.text != "I"
            && !MONTHS.contains(&word.text)
            && !WEEKDAYS.contains(&word.text)
    }

    fn is_title(&self, word: &Word) -> bool {
        self.titles.contains(word.text)
    }

    /// Whether `next` continues the same name as `prev` (single-line spacing only)
    fn joined(&self, text: &str, prev: &Word, next: &Word) -> bool {
        if prev.possessive {
            return false;
        }
        let mut gap = &text[prev.end..next.start];
        if self.is_title(prev) {
            gap = gap.strip_prefix('.').unwrap_or(gap);
        }
        !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t')
    }

    fn at_sentence_start(text: &str, start: usize) -> bool {
        match text[..start].trim_end().chars().next_back() {
            None => true,
            Some(c) => matches!(c, '.' | '!' | '?' | ':' | ';' | '"' | '“' | '”' | '(' | '['),
        }
    }

    fn pattern_spans(text: &str) -> Vec<Span> {
        PATTERNS
            .iter()
            .flat_map(|(re, label)| {
                let label = *label;
                re.find_iter(text).map(move |m| Span {
                    start: m.start(),
                    end: m.end(),
                    label,
                })
            })
            .collect()
    }

    fn words(text: &str) -> Vec<Word<'_>> {
        WORD_RE
            .find_iter(text)
            .map(|m| {
                let raw = m.as_str();
                let stripped = raw
                    .strip_suffix("'s")
                    .or_else(|| raw.strip_suffix("’s"))
                    .filter(|s| !s.is_empty());
                let word_text = stripped.unwrap_or(raw).trim_end_matches(['\'', '’', '-']);
                Word {
                    text: word_text,
                    start: m.start(),
                    end: m.start() + word_text.len(),
                    possessive: stripped.is_some(),
                }
            })
            .filter(|w| !w.text.is_empty())
            .collect()
    }

    fn name_spans(&self, text: &str) -> Vec<Span> {
        let words = Self::words(text);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < words.len() {
            if !self.is_name_word(&words[i]) {
                i += 1;
                continue;
            }

            let mut run = vec![words[i]];
            let mut j = i;
            while j + 1 < words.len() && self.joined(text, &words[j], &words[j + 1]) {
                let next = j + 1;
                if self.is_name_word(&words[next]) {
                    run.push(words[next]);
                    j = next;
                    continue;
                }

                // "Bank of the West": connectors only count when a name follows
                let mut k = next;
                while k < words.len()
                    && self.connectors.contains(words[k].text)
                    && self.joined(text, &words[k - 1], &words[k])
                {
                    k += 1;
                }
                if k > next
                    && k < words.len()
                    && self.joined(text, &words[k - 1], &words[k])
                    && self.is_name_word(&words[k])
                {
                    run.extend_from_slice(&words[next..=k]);
                    j = k;
                    continue;
                }
                break;
            }
            i = j + 1;

            let sentence_start = Self::at_sentence_start(text, run[0].start);
            if let Some(span) = self.classify_run(text, &run, sentence_start) {
                spans.push(span);
            }
        }

        spans
    }

    fn is_connector(&self, word: &Word) -> bool {
        self.connectors.contains(&word.text.to_lowercase())
    }

    fn in_gazetteer(&self, surface: &str) -> bool {
        self.gpe.contains(surface)
            || self.loc.contains(surface)
            || self.norp.contains(surface)
            || self.orgs.contains(surface)
    }

    fn has_place_or_org_suffix(&self, run: &[Word]) -> bool {
        run.len() > 1
            && run.last().is_some_and(|last| {
                self.org_suffixes.contains(last.text) || self.loc_suffixes.contains(last.text)
            })
    }

    /// Whether the run opens with a word or phrase the gazetteers know
    fn starts_known(&self, text: &str, run: &[Word]) -> bool {
        let Some(first) = run.first() else {
            return false;
        };
        self.first_names.contains(first.text)
            || self.is_title(first)
            || run
                .iter()
                .any(|last| self.in_gazetteer(&text[first.start..last.end]))
    }

    /// "Secretary of State Antony Blinken", "President of France"
    fn classify_office(&self, text: &str, rest: &[Word]) -> Option<Span> {
        let first = rest.first()?;
        let last = rest.last()?;

        if self.in_gazetteer(&text[first.start..last.end]) || self.has_place_or_org_suffix(rest) {
            return self.classify_run(text, rest, false);
        }
        if rest.len() < 3 {
            return None;
        }

        let name_start = rest
            .iter()
            .position(|w| self.first_names.contains(w.text))
            .filter(|&p| p > 0)
            .unwrap_or(1);
        Some(Span {
            start: rest[name_start].start,
            end: last.end,
            label: PERSON,
        })
    }

    fn classify_run(&self, text: &str, run: &[Word], sentence_start: bool) -> Option<Span> {
        let first = run.first()?;
        let last = run.last()?;

        if self.leading_words.contains(&first.text.to_lowercase()) || self.is_connector(first) {
            return self.classify_run(text, &run[1..], false);
        }

        let surface = &text[first.start..last.end];

        // A title names a person unless the whole run is a known name ("General Motors")
        if self.is_title(first)
            && !self.in_gazetteer(surface)
            && !self.has_place_or_org_suffix(run)
        {
            let rest = &run[1..];
            let qualifiers = rest.iter().take_while(|w| self.is_connector(w)).count();
            if qualifiers > 0 {
                return self.classify_office(text, &rest[qualifiers..]);
            }
            let name = rest.first()?;
            return Some(Span {
                start: name.start,
                end: last.end,
                label: PERSON,
            });
        }

        let span = |label| {
            Some(Span {
                start: first.start,
                end: last.end,
                label,
            })
        };

        if self.gpe.contains(surface) {
            return span(GPE);
        }
        if self.loc.contains(surface) {
            return span(LOC);
        }
        if self.norp.contains(surface) {
            return span(NORP);
        }
        if self.orgs.contains(surface) {
            return span(ORG);
        }

        if sentence_start && !self.starts_known(text, run) {
            // a sentence-initial capital says nothing about the first word
            return self.classify_run(text, &run[1..], false);
        }

        if run.len() > 1 && self.loc_suffixes.contains(last.text) {
            return span(LOC);
        }
        if run.len() > 1 && self.org_suffixes.contains(last.text) {
            return span(ORG);
        }
        if run.len() > 1 && self.first_names.contains(first.text) {
            return span(PERSON);
        }

        if run.len() == 1 {
            let is_acronym = (2..=5).contains(&first.text.len())
                && first.text.chars().all(|c| c.is_ascii_uppercase());
            return if is_acronym { span(ORG) } else { None };
        }

        let has_connector = run.iter().any(|w| self.is_connector(w));
        let title_case = run.iter().all(|w| {
            let mut chars = w.text.chars();
            chars.next().is_some_and(|c| c.is_ascii_uppercase())
                && chars.any(|c| c.is_ascii_lowercase())
        });

        if run.len() <= 3 && title_case && !has_connector {
            span(PERSON)
        } else {
            span(ORG)
        }
    }

    /// Keep the leftmost, then longest, of overlapping spans
    fn resolve(mut spans: Vec<Span>) -> Vec<Span> {
        spans.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
        });

        let mut kept: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            if kept.last().map_or(true, |last| span.start >= last.end) {
                kept.push(span);
            }
        }
        kept
    }
}

impl Default for RuleBasedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
        let mut spans = Self::pattern_spans(text);
        spans.extend(self.name_spans(text));

        Ok(Self::resolve(spans)
            .into_iter()
            .map(|span| Entity::new(&text[span.start..span.end], span.label))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        RuleBasedRecognizer::new()
            .recognize(text)
            .unwrap()
            .into_iter()
            .map(|e| (e.text, e.entity_type))
            .collect()
    }

    fn pair(text: &str, label: &str) -> (String, String) {
        (text.to_string(), label.to_string())
    }

    #[test]
    fn test_numeric_patterns_and_orgs() {
        let found = pairs(
            "Apple Inc. and Microsoft announced a $2 billion deal on March 5, 2024, raising shares 12%.",
        );

        assert_eq!(
            found,
            vec![
                pair("Apple Inc", ORG),
                pair("Microsoft", ORG),
                pair("$2 billion", MONEY),
                pair("March 5, 2024", DATE),
                pair("12%", PERCENT),
            ]
        );
    }

    #[test]
    fn test_people_places_groups() {
        let found = pairs("President Joe Biden met French officials in Paris on Monday.");

        assert_eq!(
            found,
            vec![
                pair("Joe Biden", PERSON),
                pair("French", NORP),
                pair("Paris", GPE),
                pair("Monday", DATE),
            ]
        );
    }

    #[test]
    fn test_location_suffix_and_journal() {
        assert_eq!(
            pairs("Research team discovers new species of marine life in Pacific Ocean."),
            vec![pair("Pacific Ocean", LOC)]
        );
        assert_eq!(
            pairs("New study published in Nature journal shows promising results."),
            vec![pair("Nature", ORG)]
        );
    }

    #[test]
    fn test_sentence_initial_words_ignored() {
        assert!(pairs("Scientists discover miracle cure that big pharma doesn't want you to know about!").is_empty());
        assert!(pairs("Local business owner opens new restaurant downtown.").is_empty());
    }

    #[test]
    fn test_title_with_period_and_possessive() {
        let found = pairs("Officials said Dr. Jane Smith's findings reached the FBI.");
        assert_eq!(found, vec![pair("Jane Smith", PERSON), pair("FBI", ORG)]);
    }

    #[test]
    fn test_connector_inside_name() {
        let found = pairs("Analysts at the Bank of America expect a 0.5 percent rise.");
        assert_eq!(
            found,
            vec![pair("Bank of America", ORG), pair("0.5 percent", PERCENT)]
        );
    }

    #[test]
    fn test_and_splits_names() {
        let found = pairs("Shares of Pfizer and Moderna rose.");
        assert_eq!(found, vec![pair("Pfizer", ORG), pair("Moderna", ORG)]);
    }

    #[test]
    fn test_office_titles() {
        assert_eq!(
            pairs("Secretary of State Antony Blinken"),
            vec![pair("Antony Blinken", PERSON)]
        );
        assert_eq!(pairs("President of France"), vec![pair("France", GPE)]);
        assert_eq!(
            pairs("He met the Minister of Foreign Affairs."),
            Vec::<(String, String)>::new()
        );
    }

    #[test]
    fn test_title_words_inside_company_names() {
        assert_eq!(pairs("General Electric"), vec![pair("General Electric", ORG)]);
        assert_eq!(
            pairs("Shares of General Motors fell."),
            vec![pair("General Motors", ORG)]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(pairs("").is_empty());
    }
}
