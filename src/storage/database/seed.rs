//! Demo rows for a fresh synonyms table

/// Twenty head words with comma-delimited synonyms
pub const DEFAULT_SYNONYMS: [(&str, &str); 20] = [
    ("happy", "joyful,cheerful,content,glad"),
    ("sad", "unhappy,sorrowful,dejected,downcast"),
    ("fast", "quick,rapid,swift,speedy"),
    ("slow", "sluggish,leisurely,unhurried,gradual"),
    ("big", "large,huge,enormous,massive"),
    ("small", "tiny,little,miniature,compact"),
    ("smart", "intelligent,clever,bright,brilliant"),
    ("brave", "courageous,bold,fearless,heroic"),
    ("beautiful", "attractive,lovely,gorgeous,stunning"),
    ("angry", "furious,irate,mad,enraged"),
    ("calm", "peaceful,serene,tranquil,relaxed"),
    ("difficult", "hard,challenging,tough,demanding"),
    ("easy", "simple,effortless,straightforward,painless"),
    ("old", "ancient,aged,elderly,antique"),
    ("new", "fresh,modern,novel,recent"),
    ("rich", "wealthy,affluent,prosperous,opulent"),
    ("poor", "impoverished,needy,destitute,broke"),
    ("strong", "powerful,sturdy,robust,mighty"),
    ("weak", "feeble,frail,fragile,delicate"),
    ("funny", "humorous,amusing,comical,hilarious"),
];
