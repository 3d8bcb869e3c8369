//! Property tests for detectors and aggregation

use proptest::prelude::*;
use radj_core::{AdjectiveClass, AdjectiveClassifier, Detector, DetectorKind, DetectorSelection};

const SAMPLE_WORDS: &[&str] = &[
    "синий", "отцов", "мамин", "лисья", "красивый", "зелёная", "каменный", "морозный",
    "исторический", "стол", "дом", "бежать", "",
];

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[а-я]{0,12}",
        prop::sample::select(SAMPLE_WORDS).prop_map(String::from),
    ]
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..40)
}

fn detector_kind() -> impl Strategy<Value = DetectorKind> {
    prop::sample::select(vec![
        DetectorKind::Possessive,
        DetectorKind::QualitativeRelative,
        DetectorKind::Relative,
    ])
}

proptest! {
    #[test]
    fn detection_is_repeatable(words in word_list(), kind in detector_kind()) {
        let classifier = AdjectiveClassifier::new(&words);
        let first: Vec<_> = classifier.detections(kind).collect();
        let second: Vec<_> = classifier.detections(kind).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn detections_are_unique_and_ordered(words in word_list(), kind in detector_kind()) {
        let classifier = AdjectiveClassifier::new(&words);
        let positions: Vec<usize> = classifier.detections(kind).map(|d| d.position).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(positions.iter().all(|&p| p < words.len()));
    }

    #[test]
    fn single_detector_reports_only_its_class(words in word_list(), kind in detector_kind()) {
        let classifier = AdjectiveClassifier::new(&words);
        let report = classifier.detect(&DetectorSelection::from_kinds([kind]));
        prop_assert!(report.iter().all(|c| c.class == kind.class()));
    }

    #[test]
    fn report_counts_match_detections(words in word_list()) {
        let classifier = AdjectiveClassifier::new(&words);
        let report = classifier.detect_all();
        for class in AdjectiveClass::ALL {
            let expected = classifier.detections(class.detector_kind()).count();
            prop_assert_eq!(report.count(class), expected);
        }
        prop_assert!(report.iter().all(|c| c.count > 0));
        prop_assert!(report.entries().windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn counts_ignore_selection_order(words in word_list(), kinds in prop::collection::vec(detector_kind(), 0..6)) {
        let classifier = AdjectiveClassifier::new(&words);
        let forward = classifier.detect(&DetectorSelection::from_kinds(kinds.clone()));
        let backward = classifier.detect(&DetectorSelection::from_kinds(kinds.into_iter().rev()));
        for class in AdjectiveClass::ALL {
            prop_assert_eq!(forward.count(class), backward.count(class));
        }
    }

    #[test]
    fn predictions_agree_with_detectors(words in word_list()) {
        let classifier = AdjectiveClassifier::new(&words);
        let predictions = classifier.predictions(&DetectorSelection::all());
        for prediction in &predictions {
            let word = words[prediction.position].as_str();
            for class in AdjectiveClass::ALL {
                let detector = radj_core::detectors::detector(class.detector_kind());
                prop_assert_eq!(prediction.classes.contains(class), detector.matches(word));
            }
            prop_assert!(!prediction.classes.is_empty());
        }
    }
}
