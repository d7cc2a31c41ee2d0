//! Known medicine and supplement names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Curated medicine/supplement names, lowercase, in lookup order.
pub const DEFAULT_MEDICINES: &[&str] = &[
    // Cardiovascular / metabolic
    "lisinopril", "metformin", "amlodipine", "atorvastatin", "metoprolol",
    "omeprazole", "losartan", "albuterol", "gabapentin", "hydrochlorothiazide",
    "simvastatin", "levothyroxine", "montelukast", "pantoprazole", "furosemide",
    // Mood / pain / antibiotics
    "citalopram", "sertraline", "fluoxetine", "tramadol", "amoxicillin",
    "azithromycin", "ibuprofen", "acetaminophen", "aspirin", "naproxen",
    "clonazepam", "alprazolam", "zolpidem", "prednisone", "hydrocortisone",
    // Brand names
    "insulin", "warfarin", "xarelto", "eliquis", "plavix",
    "crestor", "lipitor", "zocor", "nexium", "prilosec",
    "protonix", "synthroid", "ventolin", "advair", "spiriva",
    "flovent", "lantus", "humalog", "novolog", "tresiba",
    "januvia", "jardiance", "trulicity", "ozempic", "farxiga",
    "pradaxa", "savaysa", "brilinta", "effient",
    // Supplements
    "multivitamin", "vitamin d", "calcium", "iron", "zinc", "magnesium", "potassium",
    "coq10", "fish oil", "omega-3", "probiotics", "melatonin",
];

static DEFAULT_MATCHERS: Lazy<Vec<MedicineMatcher>> = Lazy::new(|| {
    DEFAULT_MEDICINES
        .iter()
        .map(|name| MedicineMatcher::new(name).expect("escaped medicine pattern must compile"))
        .collect()
});

/// A whole-word, case-insensitive matcher for one medicine name.
#[derive(Debug, Clone)]
pub struct MedicineMatcher {
    name: String,
    regex: Regex,
}

impl MedicineMatcher {
    /// Build a matcher for `name` (stored lowercase).
    pub fn new(name: &str) -> Result<Self, regex::Error> {
        let name = name.trim().to_lowercase();
        let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&name)))?;
        Ok(Self { name, regex })
    }

    /// Lowercase dictionary form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte range of the first whole-word occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.regex.find(text).map(|m| (m.start(), m.end()))
    }
}

/// A hit from [`MedicineVocabulary::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyHit<'a> {
    /// Dictionary entry that matched
    pub entry: &'a str,
    /// Byte offset of the match in the utterance
    pub start: usize,
    /// Byte offset one past the match
    pub end: usize,
}

/// Ordered medicine dictionary.
#[derive(Debug, Clone)]
pub struct MedicineVocabulary {
    matchers: Vec<MedicineMatcher>,
}

impl Default for MedicineVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicineVocabulary {
    /// Vocabulary with the default curated list.
    pub fn new() -> Self {
        Self {
            matchers: DEFAULT_MATCHERS.clone(),
        }
    }

    /// Vocabulary with no entries.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Add a name after the existing entries. Duplicates and blanks are ignored.
    pub fn add_medicine(&mut self, name: &str) -> Result<bool, regex::Error> {
        let lower = name.trim().to_lowercase();
        if lower.is_empty() || self.contains(&lower) {
            return Ok(false);
        }
        self.matchers.push(MedicineMatcher::new(&lower)?);
        Ok(true)
    }

    /// Check if a name is in the vocabulary (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        self.matchers.iter().any(|m| m.name() == lower)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Entry names in lookup order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(MedicineMatcher::name)
    }

    /// First entry (in vocabulary order, not text order) found in `text`.
    pub fn find(&self, text: &str) -> Option<VocabularyHit<'_>> {
        self.matchers.iter().find_map(|matcher| {
            matcher.find(text).map(|(start, end)| VocabularyHit {
                entry: matcher.name(),
                start,
                end,
            })
        })
    }
}

/// "vitamin d" → "Vitamin D"
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = !c.is_alphanumeric();
        }
    }
    out
}
