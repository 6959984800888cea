//! Book catalogue: canonical groups of books in French and English.

use crate::corpus::book_key;
use serde::{Deserialize, Serialize};

const FR_PENTATEUCH: &[&str] = &["Genèse", "Exode", "Lévitique", "Nombres", "Deutéronome"];
const FR_HISTORICAL: &[&str] = &[
    "Josué", "Juges", "Ruth", "1 Samuel", "2 Samuel", "1 Rois", "2 Rois", "1 Chroniques",
    "2 Chroniques", "Esdras", "Néhémie", "Esther",
];
const FR_POETIC: &[&str] = &["Job", "Psaumes", "Proverbes", "Ecclésiaste", "Cantique des Cantiques"];
const FR_MAJOR_PROPHETS: &[&str] = &["Ésaïe", "Jérémie", "Lamentations", "Ézéchiel", "Daniel"];
const FR_MINOR_PROPHETS: &[&str] = &[
    "Osée", "Joël", "Amos", "Abdias", "Jonas", "Michée", "Nahum", "Habacuc", "Sophonie", "Aggée",
    "Zacharie", "Malachie",
];
const FR_GOSPELS: &[&str] = &["Matthieu", "Marc", "Luc", "Jean"];
const FR_ACTS: &[&str] = &["Actes"];
const FR_PAULINE: &[&str] = &[
    "Romains", "1 Corinthiens", "2 Corinthiens", "Galates", "Éphésiens", "Philippiens",
    "Colossiens", "1 Thessaloniciens", "2 Thessaloniciens", "1 Timothée", "2 Timothée", "Tite",
    "Philémon",
];
const FR_GENERAL_EPISTLES: &[&str] = &[
    "Hébreux", "Jacques", "1 Pierre", "2 Pierre", "1 Jean", "2 Jean", "3 Jean", "Jude",
];
const FR_REVELATION: &[&str] = &["Apocalypse"];

const EN_PENTATEUCH: &[&str] = &["Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy"];
const EN_HISTORICAL: &[&str] = &[
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel", "1 Kings", "2 Kings", "1 Chronicles",
    "2 Chronicles", "Ezra", "Nehemiah", "Esther",
];
const EN_POETIC: &[&str] = &["Job", "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon"];
const EN_MAJOR_PROPHETS: &[&str] = &["Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel"];
const EN_MINOR_PROPHETS: &[&str] = &[
    "Hosea", "Joel", "Amos", "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah",
    "Haggai", "Zechariah", "Malachi",
];
const EN_GOSPELS: &[&str] = &["Matthew", "Mark", "Luke", "John"];
const EN_ACTS: &[&str] = &["Acts"];
const EN_PAULINE: &[&str] = &[
    "Romans", "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians", "Philippians",
    "Colossians", "1 Thessalonians", "2 Thessalonians", "1 Timothy", "2 Timothy", "Titus",
    "Philemon",
];
const EN_GENERAL_EPISTLES: &[&str] = &[
    "Hebrews", "James", "1 Peter", "2 Peter", "1 John", "2 John", "3 John", "Jude",
];
const EN_REVELATION: &[&str] = &["Revelation"];

/// A named group of books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookGroup {
    #[serde(alias = "ancien_testament")]
    OldTestament,
    #[serde(alias = "nouveau_testament")]
    NewTestament,
    #[serde(alias = "pentateuque")]
    Pentateuch,
    #[serde(alias = "historiques")]
    Historical,
    #[serde(alias = "poetiques")]
    Poetic,
    #[serde(alias = "prophetes_majeurs")]
    MajorProphets,
    #[serde(alias = "prophetes_mineurs")]
    MinorProphets,
    #[serde(alias = "evangiles")]
    Gospels,
    #[serde(alias = "histoire_nt")]
    Acts,
    #[serde(alias = "epitres_paul")]
    PaulineEpistles,
    #[serde(alias = "epitres_generales")]
    GeneralEpistles,
    #[serde(alias = "apocalypse")]
    Revelation,
}

impl BookGroup {
    /// Groups that do not contain another group, in canonical order.
    const SECTIONS: [BookGroup; 10] = [
        Self::Pentateuch,
        Self::Historical,
        Self::Poetic,
        Self::MajorProphets,
        Self::MinorProphets,
        Self::Gospels,
        Self::Acts,
        Self::PaulineEpistles,
        Self::GeneralEpistles,
        Self::Revelation,
    ];

    /// Parse an English or French group key.
    pub fn from_key(key: &str) -> Option<Self> {
        let group = match key.trim().to_lowercase().as_str() {
            "old_testament" | "ancien_testament" => Self::OldTestament,
            "new_testament" | "nouveau_testament" => Self::NewTestament,
            "pentateuch" | "pentateuque" => Self::Pentateuch,
            "historical" | "historiques" => Self::Historical,
            "poetic" | "poetiques" => Self::Poetic,
            "major_prophets" | "prophetes_majeurs" => Self::MajorProphets,
            "minor_prophets" | "prophetes_mineurs" => Self::MinorProphets,
            "gospels" | "evangiles" => Self::Gospels,
            "acts" | "histoire_nt" => Self::Acts,
            "pauline_epistles" | "epitres_paul" => Self::PaulineEpistles,
            "general_epistles" | "epitres_generales" => Self::GeneralEpistles,
            "revelation" | "apocalypse" => Self::Revelation,
            _ => return None,
        };
        Some(group)
    }

    /// Book names of this group as spelled in the corpus of `language`.
    pub fn books(self, language: &str) -> Vec<&'static str> {
        match self {
            Self::OldTestament => Self::SECTIONS[..5]
                .iter()
                .flat_map(|g| g.section_books(language))
                .copied()
                .collect(),
            Self::NewTestament => Self::SECTIONS[5..]
                .iter()
                .flat_map(|g| g.section_books(language))
                .copied()
                .collect(),
            section => section.section_books(language).to_vec(),
        }
    }

    fn section_books(self, language: &str) -> &'static [&'static str] {
        let english = language.trim().to_lowercase().starts_with("en");
        match (self, english) {
            (Self::Pentateuch, false) => FR_PENTATEUCH,
            (Self::Pentateuch, true) => EN_PENTATEUCH,
            (Self::Historical, false) => FR_HISTORICAL,
            (Self::Historical, true) => EN_HISTORICAL,
            (Self::Poetic, false) => FR_POETIC,
            (Self::Poetic, true) => EN_POETIC,
            (Self::MajorProphets, false) => FR_MAJOR_PROPHETS,
            (Self::MajorProphets, true) => EN_MAJOR_PROPHETS,
            (Self::MinorProphets, false) => FR_MINOR_PROPHETS,
            (Self::MinorProphets, true) => EN_MINOR_PROPHETS,
            (Self::Gospels, false) => FR_GOSPELS,
            (Self::Gospels, true) => EN_GOSPELS,
            (Self::Acts, false) => FR_ACTS,
            (Self::Acts, true) => EN_ACTS,
            (Self::PaulineEpistles, false) => FR_PAULINE,
            (Self::PaulineEpistles, true) => EN_PAULINE,
            (Self::GeneralEpistles, false) => FR_GENERAL_EPISTLES,
            (Self::GeneralEpistles, true) => EN_GENERAL_EPISTLES,
            (Self::Revelation, false) => FR_REVELATION,
            (Self::Revelation, true) => EN_REVELATION,
            (Self::OldTestament | Self::NewTestament, _) => &[],
        }
    }

    /// Whether `book` belongs to this group, ignoring case.
    pub fn contains(self, book: &str, language: &str) -> bool {
        let key = book_key(book);
        self.books(language).iter().any(|b| book_key(b) == key)
    }

    /// Display label, e.g. `Pentateuque` or `Pentateuch`.
    pub fn label(self, language: &str) -> &'static str {
        let english = language.trim().to_lowercase().starts_with("en");
        match (self, english) {
            (Self::OldTestament, false) => "Ancien Testament",
            (Self::OldTestament, true) => "Old Testament",
            (Self::NewTestament, false) => "Nouveau Testament",
            (Self::NewTestament, true) => "New Testament",
            (Self::Pentateuch, false) => "Pentateuque",
            (Self::Pentateuch, true) => "Pentateuch",
            (Self::Historical, false) => "Livres historiques",
            (Self::Historical, true) => "Historical books",
            (Self::Poetic, false) => "Livres poétiques",
            (Self::Poetic, true) => "Poetic books",
            (Self::MajorProphets, false) => "Prophètes majeurs",
            (Self::MajorProphets, true) => "Major prophets",
            (Self::MinorProphets, false) => "Prophètes mineurs",
            (Self::MinorProphets, true) => "Minor prophets",
            (Self::Gospels, false) => "Évangiles",
            (Self::Gospels, true) => "Gospels",
            (Self::Acts, false) => "Actes",
            (Self::Acts, true) => "Acts",
            (Self::PaulineEpistles, false) => "Épîtres de Paul",
            (Self::PaulineEpistles, true) => "Pauline epistles",
            (Self::GeneralEpistles, false) => "Épîtres générales",
            (Self::GeneralEpistles, true) => "General epistles",
            (Self::Revelation, false) => "Apocalypse",
            (Self::Revelation, true) => "Revelation",
        }
    }
}

/// The narrowest group holding `book`, if it is a known book.
pub fn category_of(book: &str, language: &str) -> Option<BookGroup> {
    BookGroup::SECTIONS
        .into_iter()
        .find(|group| group.contains(book, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn testaments_cover_all_books() {
        assert_eq!(BookGroup::OldTestament.books("fr").len(), 39);
        assert_eq!(BookGroup::NewTestament.books("fr").len(), 27);
        assert_eq!(BookGroup::OldTestament.books("en").len(), 39);
        assert_eq!(BookGroup::NewTestament.books("en-US").len(), 27);
    }

    #[test]
    fn membership_ignores_case() {
        assert!(BookGroup::Gospels.contains("jean", "fr"));
        assert!(BookGroup::NewTestament.contains("1 JEAN", "fr"));
        assert!(!BookGroup::Gospels.contains("1 Jean", "fr"));
        assert!(BookGroup::Poetic.contains("Psalms", "en"));
    }

    #[test]
    fn category_is_narrowest_group() {
        assert_eq!(category_of("Genèse", "fr"), Some(BookGroup::Pentateuch));
        assert_eq!(category_of("Romans", "en"), Some(BookGroup::PaulineEpistles));
        assert_eq!(category_of("Hénoch", "fr"), None);
        assert_eq!(BookGroup::Pentateuch.label("fr"), "Pentateuque");
    }

    #[test]
    fn group_keys_in_both_languages() {
        assert_eq!(BookGroup::from_key("epitres_paul"), Some(BookGroup::PaulineEpistles));
        assert_eq!(BookGroup::from_key("Major_Prophets"), Some(BookGroup::MajorProphets));
        assert_eq!(BookGroup::from_key("apocrypha"), None);
        let group: BookGroup = serde_json::from_str("\"ancien_testament\"").unwrap();
        assert_eq!(group, BookGroup::OldTestament);
    }
}
