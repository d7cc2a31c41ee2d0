//! Golden tests for medication extraction.
//!
//! Each case is one utterance and the full record it must produce.

use medvoice_core::extractor::{extract_medication_info, resolve_medicine_name, NameStrategy};
use medvoice_core::{MedicationExtractor, MedicineVocabulary, RuleAnnotator};

/// Test case with the expected value of every field.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    medicine_name: &'static str,
    dosage: &'static str,
    frequency: &'static str,
    timing: &'static str,
    duration: &'static str,
    instructions: &'static str,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "lisinopril-morning",
            input: "I need to take Lisinopril 10mg once daily in the morning for my blood pressure.",
            medicine_name: "Lisinopril",
            dosage: "10mg",
            frequency: "once daily",
            timing: "in the morning",
            duration: "",
            instructions: "",
        },
        GoldenCase {
            id: "metformin-meals",
            input: "Take Metformin 500mg twice a day with meals for 3 months.",
            medicine_name: "Metformin",
            dosage: "500mg",
            frequency: "twice a day",
            timing: "with meals",
            duration: "for 3 months",
            instructions: "",
        },
        GoldenCase {
            id: "amoxicillin-course",
            input: "Take Amoxicillin 500 mg three times a day with food for 10 days.",
            medicine_name: "Amoxicillin",
            dosage: "500 mg",
            frequency: "three times a day",
            timing: "with food",
            duration: "for 10 days",
            instructions: "with food",
        },
        GoldenCase {
            id: "ibuprofen-hours",
            input: "Take 2 tablets of ibuprofen every 6 hours as needed.",
            medicine_name: "ibuprofen",
            dosage: "2 tablets",
            frequency: "every 6 hours",
            timing: "",
            duration: "",
            instructions: "",
        },
        GoldenCase {
            id: "hydrocortisone-avoid",
            input: "Apply hydrocortisone cream twice daily. Avoid sunlight.",
            medicine_name: "hydrocortisone",
            dosage: "",
            frequency: "twice daily",
            timing: "",
            duration: "",
            instructions: "avoid sunlight; Avoid sunlight.",
        },
        GoldenCase {
            id: "vitamin-d-multi-word",
            input: "Take one Vitamin D capsule every day with milk.",
            medicine_name: "Vitamin D",
            dosage: "",
            frequency: "every day",
            timing: "",
            duration: "",
            instructions: "with milk",
        },
        GoldenCase {
            id: "unknown-drug-verb-context",
            input: "The doctor prescribed Zoloftix for my anxiety.",
            medicine_name: "Zoloftix for my",
            dosage: "",
            frequency: "",
            timing: "",
            duration: "",
            instructions: "",
        },
        GoldenCase {
            id: "noun-phrase-fallback",
            input: "The blue pill after dinner.",
            medicine_name: "The blue pill",
            dosage: "",
            frequency: "",
            timing: "after dinner",
            duration: "",
            instructions: "",
        },
        GoldenCase {
            id: "small-talk",
            input: "Hello, how are you?",
            medicine_name: "",
            dosage: "",
            frequency: "",
            timing: "",
            duration: "",
            instructions: "",
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let record = extract_medication_info(case.input);

        assert_eq!(
            record.medicine_name, case.medicine_name,
            "Case {}: medicine_name mismatch",
            case.id
        );
        assert_eq!(record.dosage, case.dosage, "Case {}: dosage mismatch", case.id);
        assert_eq!(
            record.frequency, case.frequency,
            "Case {}: frequency mismatch",
            case.id
        );
        assert_eq!(record.timing, case.timing, "Case {}: timing mismatch", case.id);
        assert_eq!(
            record.duration, case.duration,
            "Case {}: duration mismatch",
            case.id
        );
        assert_eq!(
            record.instructions, case.instructions,
            "Case {}: instructions mismatch",
            case.id
        );
    }
}

#[test]
fn test_instruction_accumulation() {
    let record = extract_medication_info("Take with food. Avoid alcohol. Store in a cool place.");
    let fragments: Vec<&str> = record.instructions.split("; ").collect();

    for expected in ["with food", "avoid alcohol", "store in a"] {
        assert_eq!(
            fragments.iter().filter(|f| **f == expected).count(),
            1,
            "expected exactly one '{}' in {:?}",
            expected,
            fragments
        );
    }
}

#[test]
fn test_name_strategies() {
    let annotator = RuleAnnotator::new();
    let vocab = MedicineVocabulary::new();

    let strategy_tests = vec![
        ("Please take Aspirin now", NameStrategy::Dictionary),
        ("I take Lisinopril and Crestorix", NameStrategy::Dictionary),
        ("You should take Crestorix nightly", NameStrategy::VerbContext),
        ("Doctor prescribed Crestorix", NameStrategy::VerbContext),
        ("the pink tablets at night", NameStrategy::NounPhrase),
    ];

    for (input, expected) in strategy_tests {
        let annotation = annotator.annotate_text(input);
        let found = resolve_medicine_name(&annotation, &vocab)
            .unwrap_or_else(|| panic!("no name found for '{}'", input));
        assert_eq!(found.strategy, expected, "strategy mismatch for '{}'", input);
    }
}

#[test]
fn test_custom_vocabulary_extends_dictionary() {
    let mut extractor = MedicationExtractor::new();
    let before = extractor.extract("Take it with Crestorix 20 mg at bedtime");
    assert_ne!(before.medicine_name, "Crestorix");

    extractor.add_medicine("crestorix").unwrap();
    let after = extractor.extract("Take it with Crestorix 20 mg at bedtime");

    assert_eq!(after.medicine_name, "Crestorix");
    assert_eq!(after.dosage, "20 mg");
    assert_eq!(after.timing, "at bedtime");
}
