//! Standard English abbreviation table (SBL preferred forms).

use super::BookAbbreviation;

/// Abbreviations for the 66 books of the Protestant canon, in canonical order.
pub fn standard_table() -> Vec<BookAbbreviation> {
    vec![
        BookAbbreviation::new("Genesis", "Gen.", &["Gen", "Ge", "Gn"]),
        BookAbbreviation::new("Exodus", "Exod.", &["Exod", "Exo", "Ex"]),
        BookAbbreviation::new("Leviticus", "Lev.", &["Lev", "Le", "Lv"]),
        BookAbbreviation::new("Numbers", "Num.", &["Num", "Nu", "Nm", "Nb"]),
        BookAbbreviation::new("Deuteronomy", "Deut.", &["Deut", "Dt", "De"]),
        BookAbbreviation::new("Joshua", "Josh.", &["Josh", "Jos", "Jsh"]),
        BookAbbreviation::new("Judges", "Judg.", &["Judg", "Jdg", "Jg", "Jdgs"]),
        BookAbbreviation::new("Ruth", "Ruth", &["Rth", "Ru", "Rt"]),
        BookAbbreviation::new("1 Samuel", "1 Sam.", &["Samuel", "Sam", "Sa", "Sm"]).with_ordinal(1),
        BookAbbreviation::new("2 Samuel", "2 Sam.", &["Samuel", "Sam", "Sa", "Sm"]).with_ordinal(2),
        BookAbbreviation::new("1 Kings", "1 Kgs.", &["Kings", "Kgs", "Ki", "Kin"]).with_ordinal(1),
        BookAbbreviation::new("2 Kings", "2 Kgs.", &["Kings", "Kgs", "Ki", "Kin"]).with_ordinal(2),
        BookAbbreviation::new("1 Chronicles", "1 Chr.", &["Chronicles", "Chron", "Chr", "Ch"])
            .with_ordinal(1),
        BookAbbreviation::new("2 Chronicles", "2 Chr.", &["Chronicles", "Chron", "Chr", "Ch"])
            .with_ordinal(2),
        BookAbbreviation::new("Ezra", "Ezra", &["Ezr", "Ez"]),
        BookAbbreviation::new("Nehemiah", "Neh.", &["Neh", "Ne"]),
        BookAbbreviation::new("Esther", "Esth.", &["Esth", "Est", "Es"]),
        BookAbbreviation::new("Job", "Job", &["Jb"]),
        BookAbbreviation::new("Psalms", "Ps.", &["Psalm", "Ps", "Pss", "Psa", "Psm"])
            .with_singular("Psalm"),
        BookAbbreviation::new("Proverbs", "Prov.", &["Prov", "Pro", "Prv", "Pr"]),
        BookAbbreviation::new("Ecclesiastes", "Eccl.", &["Eccles", "Eccl", "Ecc", "Ec", "Qoh"]),
        BookAbbreviation::new(
            "Song of Solomon",
            "Song",
            &["Song of Songs", "Song", "SOS", "So", "Canticles", "Cant"],
        ),
        BookAbbreviation::new("Isaiah", "Isa.", &["Isa", "Is"]),
        BookAbbreviation::new("Jeremiah", "Jer.", &["Jer", "Je", "Jr"]),
        BookAbbreviation::new("Lamentations", "Lam.", &["Lam", "La"]),
        BookAbbreviation::new("Ezekiel", "Ezek.", &["Ezek", "Eze", "Ezk"]),
        BookAbbreviation::new("Daniel", "Dan.", &["Dan", "Da", "Dn"]),
        BookAbbreviation::new("Hosea", "Hos.", &["Hos", "Ho"]),
        BookAbbreviation::new("Joel", "Joel", &["Jl"]),
        BookAbbreviation::new("Amos", "Amos", &["Am"]),
        BookAbbreviation::new("Obadiah", "Obad.", &["Obad", "Ob"]),
        BookAbbreviation::new("Jonah", "Jonah", &["Jnh", "Jon"]),
        BookAbbreviation::new("Micah", "Mic.", &["Mic", "Mc"]),
        BookAbbreviation::new("Nahum", "Nah.", &["Nah", "Na"]),
        BookAbbreviation::new("Habakkuk", "Hab.", &["Hab", "Hb"]),
        BookAbbreviation::new("Zephaniah", "Zeph.", &["Zeph", "Zep", "Zp"]),
        BookAbbreviation::new("Haggai", "Hag.", &["Hag", "Hg"]),
        BookAbbreviation::new("Zechariah", "Zech.", &["Zech", "Zec", "Zc"]),
        BookAbbreviation::new("Malachi", "Mal.", &["Mal", "Ml"]),
        BookAbbreviation::new("Matthew", "Matt.", &["Matt", "Mat", "Mt"]),
        BookAbbreviation::new("Mark", "Mark", &["Mrk", "Mar", "Mk", "Mr"]),
        BookAbbreviation::new("Luke", "Luke", &["Luk", "Lk"]),
        BookAbbreviation::new("John", "John", &["Jn", "Jhn", "Joh"]),
        BookAbbreviation::new("Acts", "Acts", &["Act", "Ac"]),
        BookAbbreviation::new("Romans", "Rom.", &["Rom", "Ro", "Rm"]),
        BookAbbreviation::new("1 Corinthians", "1 Cor.", &["Corinthians", "Cor", "Co"])
            .with_ordinal(1),
        BookAbbreviation::new("2 Corinthians", "2 Cor.", &["Corinthians", "Cor", "Co"])
            .with_ordinal(2),
        BookAbbreviation::new("Galatians", "Gal.", &["Gal", "Ga"]),
        BookAbbreviation::new("Ephesians", "Eph.", &["Ephes", "Eph"]),
        BookAbbreviation::new("Philippians", "Phil.", &["Phil", "Php", "Pp"]),
        BookAbbreviation::new("Colossians", "Col.", &["Col", "Co"]),
        BookAbbreviation::new("1 Thessalonians", "1 Thess.", &["Thessalonians", "Thess", "Thes", "Th"])
            .with_ordinal(1),
        BookAbbreviation::new("2 Thessalonians", "2 Thess.", &["Thessalonians", "Thess", "Thes", "Th"])
            .with_ordinal(2),
        BookAbbreviation::new("1 Timothy", "1 Tim.", &["Timothy", "Tim", "Ti", "Tm"]).with_ordinal(1),
        BookAbbreviation::new("2 Timothy", "2 Tim.", &["Timothy", "Tim", "Ti", "Tm"]).with_ordinal(2),
        BookAbbreviation::new("Titus", "Titus", &["Tit", "Ti"]),
        BookAbbreviation::new("Philemon", "Phlm.", &["Philem", "Phlm", "Phm"]),
        BookAbbreviation::new("Hebrews", "Heb.", &["Heb"]),
        BookAbbreviation::new("James", "Jas.", &["Jas", "Jm"]),
        BookAbbreviation::new("1 Peter", "1 Pet.", &["Peter", "Pet", "Pe", "Pt"]).with_ordinal(1),
        BookAbbreviation::new("2 Peter", "2 Pet.", &["Peter", "Pet", "Pe", "Pt"]).with_ordinal(2),
        BookAbbreviation::new("1 John", "1 John", &["John", "Jn", "Jhn", "Joh", "Jo"]).with_ordinal(1),
        BookAbbreviation::new("2 John", "2 John", &["John", "Jn", "Jhn", "Joh", "Jo"]).with_ordinal(2),
        BookAbbreviation::new("3 John", "3 John", &["John", "Jn", "Jhn", "Joh", "Jo"]).with_ordinal(3),
        BookAbbreviation::new("Jude", "Jude", &["Jud", "Jd"]),
        BookAbbreviation::new("Revelation", "Rev.", &["Rev", "Re", "Rv", "Apocalypse"]),
    ]
}
