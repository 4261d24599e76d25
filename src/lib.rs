//! Decode a wallet generation seed entered as hexadecimal or as a list of
//! words from the PGP wordlist.
//!
//! The PGP wordlist assigns every byte value two words: a two-syllable "even"
//! word and a three-syllable "odd" word. Phrases alternate between the two
//! columns so that swapped or dropped words are easier to spot when read
//! aloud. Decoding accepts a word from either column.
//!
//! ## Example
//!
//! ```rust
//! let seed: [u8; 4] = [0x00, 0x01, 0xfe, 0xff];
//!
//! let words = translate_seed::encode_mnemonic(&seed);
//! assert_eq!(words, "aardvark adviser woodlark yucatan");
//!
//! let decoded = translate_seed::decode_mnemonic(&words).unwrap();
//! assert_eq!(decoded, seed);
//! ```

extern crate hex;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod prompt;

pub use prompt::{provide_seed, seed_prompt};

use std::collections::HashMap;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::io;
use std::result;

/// Smallest accepted seed, in bytes (128 bits).
pub const MIN_SEED_BYTES: usize = 16;

/// Largest accepted seed, in bytes (512 bits).
pub const MAX_SEED_BYTES: usize = 64;

/// Number of words in each column of the PGP wordlist.
pub const WORDLIST_SIZE: usize = 256;

/// Errors returned while reading or decoding a seed.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    UnexpectedEof,
    EmptyInput,
    UnknownWord(String),
    InvalidHex(hex::FromHexError),
}
use Error::*;

/// Result type returned by seed decoding.
pub type Result<T> = result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self { Io(other) }
}

impl From<hex::FromHexError> for Error {
    fn from(other: hex::FromHexError) -> Self { InvalidHex(other) }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Io(ref e) => Some(e),
            InvalidHex(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Io(ref e) => write!(f, "{}", e),
            UnexpectedEof => write!(f, "unexpected end of input"),
            EmptyInput => write!(f, "no words to decode"),
            UnknownWord(ref word) => write!(f, "word {:?} is not in the PGP wordlist", word),
            InvalidHex(ref e) => write!(f, "{}", e),
        }
    }
}

/// Two-syllable words, used at even positions of a phrase.
static WORDLIST: [&str; WORDLIST_SIZE] = [
    "aardvark",    "absurd",      "accrue",      "acme",
    "adrift",      "adult",       "afflict",     "ahead",
    "aimless",     "algol",       "allow",       "alone",
    "ammo",        "ancient",     "apple",       "artist",
    "assume",      "athens",      "atlas",       "aztec",
    "baboon",      "backfield",   "backward",    "banjo",
    "beaming",     "bedlamp",     "beehive",     "beeswax",
    "befriend",    "belfast",     "berserk",     "billiard",
    "bison",       "blackjack",   "blockade",    "blowtorch",
    "bluebird",    "bombast",     "bookshelf",   "brackish",
    "breadline",   "breakup",     "brickyard",   "briefcase",
    "burbank",     "button",      "buzzard",     "cement",
    "chairlift",   "chatter",     "checkup",     "chisel",
    "choking",     "chopper",     "christmas",   "clamshell",
    "classic",     "classroom",   "cleanup",     "clockwork",
    "cobra",       "commence",    "concert",     "cowbell",
    "crackdown",   "cranky",      "crowfoot",    "crucial",
    "crumpled",    "crusade",     "cubic",       "dashboard",
    "deadbolt",    "deckhand",    "dogsled",     "dragnet",
    "drainage",    "dreadful",    "drifter",     "dropper",
    "drumbeat",    "drunken",     "dupont",      "dwelling",
    "eating",      "edict",       "egghead",     "eightball",
    "endorse",     "endow",       "enlist",      "erase",
    "escape",      "exceed",      "eyeglass",    "eyetooth",
    "facial",      "fallout",     "flagpole",    "flatfoot",
    "flytrap",     "fracture",    "framework",   "freedom",
    "frighten",    "gazelle",     "geiger",      "glitter",
    "glucose",     "goggles",     "goldfish",    "gremlin",
    "guidance",    "hamlet",      "highchair",   "hockey",
    "indoors",     "indulge",     "inverse",     "involve",
    "island",      "jawbone",     "keyboard",    "kickoff",
    "kiwi",        "klaxon",      "locale",      "lockup",
    "merit",       "minnow",      "miser",       "mohawk",
    "mural",       "music",       "necklace",    "neptune",
    "newborn",     "nightbird",   "oakland",     "obtuse",
    "offload",     "optic",       "orca",        "payday",
    "peachy",      "pheasant",    "physique",    "playhouse",
    "pluto",       "preclude",    "prefer",      "preshrunk",
    "printer",     "prowler",     "pupil",       "puppy",
    "python",      "quadrant",    "quiver",      "quota",
    "ragtime",     "ratchet",     "rebirth",     "reform",
    "regain",      "reindeer",    "rematch",     "repay",
    "retouch",     "revenge",     "reward",      "rhythm",
    "ribcage",     "ringbolt",    "robust",      "rocker",
    "ruffled",     "sailboat",    "sawdust",     "scallion",
    "scenic",      "scorecard",   "scotland",    "seabird",
    "select",      "sentence",    "shadow",      "shamrock",
    "showgirl",    "skullcap",    "skydive",     "slingshot",
    "slowdown",    "snapline",    "snapshot",    "snowcap",
    "snowslide",   "solo",        "southward",   "soybean",
    "spaniel",     "spearhead",   "spellbind",   "spheroid",
    "spigot",      "spindle",     "spyglass",    "stagehand",
    "stagnate",    "stairway",    "standard",    "stapler",
    "steamship",   "sterling",    "stockman",    "stopwatch",
    "stormy",      "sugar",       "surmount",    "suspense",
    "sweatband",   "swelter",     "tactics",     "talon",
    "tapeworm",    "tempest",     "tiger",       "tissue",
    "tonic",       "topmost",     "tracker",     "transit",
    "trauma",      "treadmill",   "trojan",      "trouble",
    "tumor",       "tunnel",      "tycoon",      "uncut",
    "unearth",     "unwind",      "uproot",      "upset",
    "upshot",      "vapor",       "village",     "virus",
    "vulcan",      "waffle",      "wallet",      "watchword",
    "wayside",     "willow",      "woodlark",    "zulu",
];

/// Three-syllable words, used at odd positions of a phrase.
static ODD_WORDLIST: [&str; WORDLIST_SIZE] = [
    "adroitness",  "adviser",     "aftermath",   "aggregate",
    "alkali",      "almighty",    "amulet",      "amusement",
    "antenna",     "applicant",   "apollo",      "armistice",
    "article",     "asteroid",    "atlantic",    "atmosphere",
    "autopsy",     "babylon",     "backwater",   "barbecue",
    "belowground", "bifocals",    "bodyguard",   "bookseller",
    "borderline",  "bottomless",  "bradbury",    "bravado",
    "brazilian",   "breakaway",   "burlington",  "businessman",
    "butterfat",   "camelot",     "candidate",   "cannonball",
    "capricorn",   "caravan",     "caretaker",   "celebrate",
    "cellulose",   "certify",     "chambermaid", "cherokee",
    "chicago",     "clergyman",   "coherence",   "combustion",
    "commando",    "company",     "component",   "concurrent",
    "confidence",  "conformist",  "congregate",  "consensus",
    "consulting",  "corporate",   "corrosion",   "councilman",
    "crossover",   "crucifix",    "cumbersome",  "customer",
    "dakota",      "decadence",   "december",    "decimal",
    "designing",   "detector",    "detergent",   "determine",
    "dictator",    "dinosaur",    "direction",   "disable",
    "disbelief",   "disruptive",  "distortion",  "document",
    "embezzle",    "enchanting",  "enrollment",  "enterprise",
    "equation",    "equipment",   "escapade",    "eskimo",
    "everyday",    "examine",     "existence",   "exodus",
    "fascinate",   "filament",    "finicky",     "forever",
    "fortitude",   "frequency",   "gadgetry",    "galveston",
    "getaway",     "glossary",    "gossamer",    "graduate",
    "gravity",     "guitarist",   "hamburger",   "hamilton",
    "handiwork",   "hazardous",   "headwaters",  "hemisphere",
    "hesitate",    "hideaway",    "holiness",    "hurricane",
    "hydraulic",   "impartial",   "impetus",     "inception",
    "indigo",      "inertia",     "infancy",     "inferno",
    "informant",   "insincere",   "insurgent",   "integrate",
    "intention",   "inventive",   "istanbul",    "jamaica",
    "jupiter",     "leprosy",     "letterhead",  "liberty",
    "maritime",    "matchmaker",  "maverick",    "medusa",
    "megaton",     "microscope",  "microwave",   "midsummer",
    "millionaire", "miracle",     "misnomer",    "molasses",
    "molecule",    "montana",     "monument",    "mosquito",
    "narrative",   "nebula",      "newsletter",  "norwegian",
    "october",     "ohio",        "onlooker",    "opulent",
    "orlando",     "outfielder",  "pacific",     "pandemic",
    "pandora",     "paperweight", "paragon",     "paragraph",
    "paramount",   "passenger",   "pedigree",    "pegasus",
    "penetrate",   "perceptive",  "performance", "pharmacy",
    "phonetic",    "photograph",  "pioneer",     "pocketful",
    "politeness",  "positive",    "potato",      "processor",
    "provincial",  "proximate",   "puberty",     "publisher",
    "pyramid",     "quantity",    "racketeer",   "rebellion",
    "recipe",      "recover",     "repellent",   "replica",
    "reproduce",   "resistor",    "responsive",  "retraction",
    "retrieval",   "retrospect",  "revenue",     "revival",
    "revolver",    "sandalwood",  "sardonic",    "saturday",
    "savagery",    "scavenger",   "sensation",   "sociable",
    "souvenir",    "specialist",  "speculate",   "stethoscope",
    "stupendous",  "supportive",  "surrender",   "suspicious",
    "sympathy",    "tambourine",  "telephone",   "therapist",
    "tobacco",     "tolerance",   "tomorrow",    "torpedo",
    "tradition",   "travesty",    "trombonist",  "truncated",
    "typewriter",  "ultimate",    "undaunted",   "underfoot",
    "unicorn",     "unify",       "universe",    "unravel",
    "upcoming",    "vacancy",     "vagabond",    "vertigo",
    "virginia",    "visitor",     "vocalist",    "voyager",
    "warranty",    "waterloo",    "whimsical",   "wichita",
    "wilmington",  "wyoming",     "yesteryear",  "yucatan",
];

lazy_static! {
    /// Map from words of both columns to the byte they encode
    static ref WORD_INDEX: HashMap<&'static str, u8> = {
        let mut map = HashMap::with_capacity(2 * WORDLIST_SIZE);
        for (i, (even, odd)) in WORDLIST.iter().zip(ODD_WORDLIST.iter()).enumerate() {
            map.insert(*even, i as u8);
            map.insert(*odd, i as u8);
        }
        map
    };
}

/// Replace every run of whitespace in `s` with a single ASCII space and trim
/// both ends.
///
/// ## Example
/// ```
/// assert_eq!(translate_seed::collapse_whitespace("\t aardvark \n\n absurd "), "aardvark absurd");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Return the even-column word for `byte`.
pub fn word_for(byte: u8) -> &'static str {
    WORDLIST[byte as usize]
}

/// Encode `src` as a PGP word phrase, alternating even and odd words.
///
/// ## Example
/// ```
/// assert_eq!(translate_seed::encode_mnemonic(&[0xe5, 0x82, 0x94]), "topmost istanbul pluto");
/// ```
pub fn encode_mnemonic<S: AsRef<[u8]>>(src: S) -> String {
    let words: Vec<&str> = src.as_ref().iter().enumerate().map(|(i, b)| {
        if i % 2 == 0 { WORDLIST[*b as usize] } else { ODD_WORDLIST[*b as usize] }
    }).collect();
    words.join(" ")
}

/// Decode a space separated, lowercase PGP word phrase into bytes.
///
/// Length is not checked here; see [`MIN_SEED_BYTES`] and [`MAX_SEED_BYTES`].
///
/// ## Example
///
/// ```
/// let decoded = translate_seed::decode_mnemonic("topmost istanbul pluto").unwrap();
/// assert_eq!(decoded, [0xe5, 0x82, 0x94]);
/// ```
pub fn decode_mnemonic(src: &str) -> Result<Vec<u8>> {
    let mut dest = Vec::new();
    for word in src.split(' ').filter(|w| !w.is_empty()) {
        let b = *WORD_INDEX.get(word).ok_or_else(|| UnknownWord(word.to_owned()))?;
        dest.push(b);
    }
    if dest.is_empty() {
        return Err(EmptyInput)
    }
    Ok(dest)
}

/// Decode a single hex token, left-padding odd-length input with a `'0'`.
pub fn decode_hex(token: &str) -> Result<Vec<u8>> {
    if token.len() % 2 != 0 {
        return Ok(hex::decode(format!("0{}", token))?);
    }
    Ok(hex::decode(token)?)
}

/// How a block of seed input was interpreted.
#[derive(Debug)]
pub enum SeedInput {
    /// Zero tokens.
    Empty,
    /// One token, decoded as hexadecimal.
    Hex(Result<Vec<u8>>),
    /// Two or more tokens, decoded as PGP words.
    Mnemonic(Result<Vec<u8>>),
}

/// Classify and decode a normalized, lowercased block by its token count.
pub fn decode_seed(normalized: &str) -> SeedInput {
    let tokens = normalized.split(' ').filter(|w| !w.is_empty()).count();
    debug!("Classifying seed input with {} tokens", tokens);
    match tokens {
        0 => SeedInput::Empty,
        1 => SeedInput::Hex(decode_hex(normalized.trim())),
        _ => SeedInput::Mnemonic(decode_mnemonic(normalized)),
    }
}

/// Whether a decoded seed of `len` bytes is within the accepted range.
pub fn valid_seed_len(len: usize) -> bool {
    len >= MIN_SEED_BYTES && len <= MAX_SEED_BYTES
}
