//! Name lists consulted when labelling proper-noun spans.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// What a gazetteer knows about a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Country, city or state.
    Place,
    /// Geographic feature that is not a political unit.
    Region,
    /// Nationality, religious or political group.
    Group,
    /// Well-known organisation.
    Organization,
}

const PLACES: &[&str] = &[
    "afghanistan", "argentina", "australia", "austria", "bangladesh", "belgium", "bhutan",
    "brazil", "canada", "chile", "china", "colombia", "cuba", "denmark", "egypt", "england",
    "ethiopia", "finland", "france", "germany", "greece", "hungary", "india", "indonesia", "iran",
    "iraq", "ireland", "israel", "italy", "japan", "kenya", "korea", "malaysia", "mexico",
    "nepal", "netherlands", "new zealand", "nigeria", "norway", "pakistan", "peru",
    "philippines", "poland", "portugal", "russia", "saudi arabia", "scotland", "singapore",
    "south africa", "spain", "sri lanka", "sweden", "switzerland", "thailand", "tibet", "turkey",
    "uganda", "ukraine", "united kingdom", "united states", "usa", "u.s.", "u.s.a.", "uk",
    "vietnam", "wales", "amsterdam", "athens", "bangkok", "beijing", "berlin", "bhaktapur",
    "boston", "brussels", "cairo", "chicago", "delhi", "dhaka", "dubai", "dublin", "geneva",
    "hong kong", "istanbul", "jakarta", "kathmandu", "kolkata", "lalitpur", "lisbon", "london",
    "los angeles", "madrid", "manila", "melbourne", "mexico city", "moscow", "mumbai", "nairobi",
    "new delhi", "new york", "oslo", "paris", "patan", "pokhara", "prague", "rome",
    "san francisco", "seattle", "seoul", "shanghai", "stockholm", "sydney", "tokyo", "toronto",
    "vienna", "warsaw", "washington", "california", "texas", "florida", "bagmati", "gandaki",
];

const REGIONS: &[&str] = &[
    "africa", "antarctica", "asia", "europe", "south asia", "middle east", "north america",
    "south america", "himalayas", "the himalayas", "everest", "mount everest", "alps", "andes",
    "amazon", "sahara", "pacific", "atlantic", "indian ocean", "arctic", "mediterranean",
    "ganges", "nile", "terai",
];

const GROUPS: &[&str] = &[
    "american", "americans", "asian", "british", "buddhist", "buddhists", "chinese", "christian",
    "christians", "democrat", "democrats", "dutch", "english", "european", "europeans", "french",
    "german", "germans", "hindu", "hindus", "indian", "indians", "italian", "japanese", "jewish",
    "korean", "muslim", "muslims", "nepali", "nepalese", "nepalis", "newar", "pakistani",
    "republican", "republicans", "russian", "russians", "sherpa", "sherpas", "spanish",
    "tibetan",
];

const ORGANIZATIONS: &[&str] = &[
    "amazon.com", "apple", "facebook", "google", "ibm", "intel", "meta", "microsoft", "nasa",
    "nato", "netflix", "nvidia", "openai", "tesla", "toyota", "un", "unesco", "unicef", "who",
    "world bank", "imf", "fbi", "cia", "bbc", "cnn", "reuters",
];

/// Words that mark a proper-noun span as an organisation name.
const ORG_KEYWORDS: &[&str] = &[
    "academy", "agency", "airlines", "association", "authority", "bank", "board", "bureau",
    "campus", "center", "centre", "club", "co", "co.", "college", "commission", "committee",
    "company", "corp", "corp.", "corporation", "council", "court", "department", "foundation",
    "group", "hospital", "inc", "inc.", "institute", "laboratory", "labs", "league", "llc",
    "ltd", "ltd.", "ministry", "museum", "organization", "organisation", "parliament", "party",
    "police", "press", "school", "senate", "society", "systems", "technologies", "times",
    "union", "university",
];

/// Tokens that introduce a person's name without being part of it.
const PERSON_TITLES: &[&str] = &[
    "dr", "dr.", "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "prof", "prof.", "sir", "dame", "lord",
    "lady", "president", "minister", "king", "queen", "prince", "princess", "sen.", "rep.",
    "gov.", "gen.", "capt.", "st.",
];

const FIRST_NAMES: &[&str] = &[
    "alice", "amit", "anita", "anna", "bikash", "bob", "charles", "david", "deepak", "elizabeth",
    "emma", "gita", "george", "hari", "james", "jane", "john", "krishna", "laxmi", "linda",
    "maria", "mary", "michael", "mohan", "nabin", "peter", "prakash", "priya", "ram", "rita",
    "robert", "sarah", "shyam", "sita", "sunita", "susan", "thomas", "william",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static PLACE_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(PLACES));
static REGION_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(REGIONS));
static GROUP_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(GROUPS));
static ORG_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(ORGANIZATIONS));
static ORG_KEYWORD_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(ORG_KEYWORDS));
static TITLE_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(PERSON_TITLES));
static FIRST_NAME_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(FIRST_NAMES));
static MONTH_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(MONTHS));
static WEEKDAY_SET: Lazy<HashSet<&str>> = Lazy::new(|| set(WEEKDAYS));

/// Look up a whole name (tokens joined by single spaces), case-insensitively.
pub fn lookup(name: &str) -> Option<NameKind> {
    let key = name.to_lowercase();
    let key = key.as_str();
    if ORG_SET.contains(key) {
        Some(NameKind::Organization)
    } else if PLACE_SET.contains(key) {
        Some(NameKind::Place)
    } else if REGION_SET.contains(key) {
        Some(NameKind::Region)
    } else if GROUP_SET.contains(key) {
        Some(NameKind::Group)
    } else {
        None
    }
}

pub fn is_org_keyword(word: &str) -> bool {
    ORG_KEYWORD_SET.contains(word.to_lowercase().as_str())
}

pub fn is_person_title(word: &str) -> bool {
    TITLE_SET.contains(word.to_lowercase().as_str())
}

pub fn is_first_name(word: &str) -> bool {
    FIRST_NAME_SET.contains(word.to_lowercase().as_str())
}

pub fn is_month(word: &str) -> bool {
    MONTH_SET.contains(word.to_lowercase().trim_end_matches('.'))
}

pub fn is_weekday(word: &str) -> bool {
    WEEKDAY_SET.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Kathmandu"), Some(NameKind::Place));
        assert_eq!(lookup("NEW YORK"), Some(NameKind::Place));
        assert_eq!(lookup("Himalayas"), Some(NameKind::Region));
        assert_eq!(lookup("Nepali"), Some(NameKind::Group));
        assert_eq!(lookup("Google"), Some(NameKind::Organization));
        assert_eq!(lookup("Ram"), None);
    }

    #[test]
    fn keyword_and_title_checks() {
        assert!(is_org_keyword("University"));
        assert!(is_person_title("Dr."));
        assert!(is_person_title("dr"));
        assert!(!is_person_title("Ram"));
        assert!(is_first_name("Ram"));
    }

    #[test]
    fn calendar_words() {
        assert!(is_month("January"));
        assert!(is_month("Sept."));
        assert!(is_weekday("Friday"));
        assert!(!is_month("Monday"));
    }
}
