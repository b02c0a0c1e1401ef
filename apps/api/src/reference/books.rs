//! Book-name lookup: lowercase spellings and abbreviations → canonical names.

#[rustfmt::skip]
pub const BOOK_ABBREVIATIONS: &[(&str, &str)] = &[
    // Old Testament
    ("gen", "Genesis"), ("genesis", "Genesis"),
    ("ex", "Exodus"), ("exod", "Exodus"), ("exodus", "Exodus"),
    ("lev", "Leviticus"), ("leviticus", "Leviticus"),
    ("num", "Numbers"), ("numbers", "Numbers"),
    ("deut", "Deuteronomy"), ("dt", "Deuteronomy"), ("deuteronomy", "Deuteronomy"),
    ("josh", "Joshua"), ("joshua", "Joshua"),
    ("judg", "Judges"), ("judges", "Judges"),
    ("ruth", "Ruth"),
    ("1sam", "1 Samuel"), ("1 sam", "1 Samuel"), ("1 samuel", "1 Samuel"),
    ("2sam", "2 Samuel"), ("2 sam", "2 Samuel"), ("2 samuel", "2 Samuel"),
    ("1kings", "1 Kings"), ("1 kings", "1 Kings"), ("1 kgs", "1 Kings"),
    ("2kings", "2 Kings"), ("2 kings", "2 Kings"), ("2 kgs", "2 Kings"),
    ("1chr", "1 Chronicles"), ("1 chronicles", "1 Chronicles"),
    ("2chr", "2 Chronicles"), ("2 chronicles", "2 Chronicles"),
    ("ezra", "Ezra"),
    ("neh", "Nehemiah"), ("nehemiah", "Nehemiah"),
    ("esth", "Esther"), ("esther", "Esther"),
    ("job", "Job"),
    ("ps", "Psalms"), ("psa", "Psalms"), ("psalm", "Psalms"), ("psalms", "Psalms"),
    ("prov", "Proverbs"), ("proverbs", "Proverbs"),
    ("eccl", "Ecclesiastes"), ("ecc", "Ecclesiastes"), ("ecclesiastes", "Ecclesiastes"),
    ("song", "Song of Songs"), ("sos", "Song of Songs"), ("song of songs", "Song of Songs"),
    ("song of solomon", "Song of Songs"),
    ("isa", "Isaiah"), ("is", "Isaiah"), ("isaiah", "Isaiah"),
    ("jer", "Jeremiah"), ("jeremiah", "Jeremiah"),
    ("lam", "Lamentations"), ("lamentations", "Lamentations"),
    ("ezek", "Ezekiel"), ("eze", "Ezekiel"), ("ezekiel", "Ezekiel"),
    ("dan", "Daniel"), ("daniel", "Daniel"),
    ("hos", "Hosea"), ("hosea", "Hosea"),
    ("joel", "Joel"),
    ("amos", "Amos"),
    ("obad", "Obadiah"), ("obadiah", "Obadiah"),
    ("jonah", "Jonah"),
    ("mic", "Micah"), ("micah", "Micah"),
    ("nah", "Nahum"), ("nahum", "Nahum"),
    ("hab", "Habakkuk"), ("habakkuk", "Habakkuk"),
    ("zeph", "Zephaniah"), ("zephaniah", "Zephaniah"),
    ("hag", "Haggai"), ("haggai", "Haggai"),
    ("zech", "Zechariah"), ("zechariah", "Zechariah"),
    ("mal", "Malachi"), ("malachi", "Malachi"),
    // New Testament
    ("matt", "Matthew"), ("mt", "Matthew"), ("matthew", "Matthew"),
    ("mark", "Mark"), ("mk", "Mark"),
    ("luke", "Luke"), ("lk", "Luke"),
    ("john", "John"), ("jn", "John"), ("joh", "John"),
    ("acts", "Acts"),
    ("rom", "Romans"), ("romans", "Romans"),
    ("1cor", "1 Corinthians"), ("1 cor", "1 Corinthians"), ("1 corinthians", "1 Corinthians"),
    ("2cor", "2 Corinthians"), ("2 cor", "2 Corinthians"), ("2 corinthians", "2 Corinthians"),
    ("gal", "Galatians"), ("galatians", "Galatians"),
    ("eph", "Ephesians"), ("ephesians", "Ephesians"),
    ("phil", "Philippians"), ("php", "Philippians"), ("philippians", "Philippians"),
    ("col", "Colossians"), ("colossians", "Colossians"),
    ("1thess", "1 Thessalonians"), ("1 thess", "1 Thessalonians"), ("1 thessalonians", "1 Thessalonians"),
    ("2thess", "2 Thessalonians"), ("2 thess", "2 Thessalonians"), ("2 thessalonians", "2 Thessalonians"),
    ("1tim", "1 Timothy"), ("1 tim", "1 Timothy"), ("1 timothy", "1 Timothy"),
    ("2tim", "2 Timothy"), ("2 tim", "2 Timothy"), ("2 timothy", "2 Timothy"),
    ("titus", "Titus"), ("tit", "Titus"),
    ("phlm", "Philemon"), ("philemon", "Philemon"),
    ("heb", "Hebrews"), ("hebrews", "Hebrews"),
    ("jas", "James"), ("james", "James"),
    ("1pet", "1 Peter"), ("1 peter", "1 Peter"), ("1 pt", "1 Peter"),
    ("2pet", "2 Peter"), ("2 peter", "2 Peter"), ("2 pt", "2 Peter"),
    ("1john", "1 John"), ("1 jn", "1 John"), ("1 john", "1 John"),
    ("2john", "2 John"), ("2 jn", "2 John"), ("2 john", "2 John"),
    ("3john", "3 John"), ("3 jn", "3 John"), ("3 john", "3 John"),
    ("jude", "Jude"),
    ("rev", "Revelation"), ("revelation", "Revelation"),
];

pub fn lookup(key: &str) -> Option<&'static str> {
    BOOK_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == key)
        .map(|(_, book)| *book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        for (i, (key, _)) in BOOK_ABBREVIATIONS.iter().enumerate() {
            assert_eq!(*key, key.to_lowercase(), "{key} is not lowercase");
            assert!(
                !BOOK_ABBREVIATIONS[i + 1..].iter().any(|(other, _)| other == key),
                "{key} is listed twice"
            );
        }
    }

    #[test]
    fn test_all_sixty_six_books_present() {
        let mut books: Vec<&str> = BOOK_ABBREVIATIONS.iter().map(|(_, book)| *book).collect();
        books.sort_unstable();
        books.dedup();
        assert_eq!(books.len(), 66);
    }
}
