//! Classification of free-text contract types into pension pillars

use super::data::Contract;

/// Pillars a contract counts towards; a contract may count towards several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContractClasses {
    pub legal: bool,
    pub private: bool,
    pub occupational: bool,
}

/// Decides which pension pillars a contract contributes to
///
/// Any `Fn(&Contract) -> ContractClasses` closure can be used as a classifier.
pub trait ContractClassifier: Send + Sync {
    fn classify(&self, contract: &Contract) -> ContractClasses;
}

impl<F> ContractClassifier for F
where
    F: Fn(&Contract) -> ContractClasses + Send + Sync,
{
    fn classify(&self, contract: &Contract) -> ContractClasses {
        self(contract)
    }
}

/// Case-insensitive substring matching on the contract type
///
/// - legal: contains "gesetzlich" or "rente"
/// - occupational: contains "riester", "bav" or "betrieblich"
/// - private: contains none of "gesetzlich", "riester", "bav", "betrieblich"
///
/// The pillars overlap: "Riester-Rente" is both legal and occupational, "Rentenvers." both
/// legal and private.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

const LEGAL_KEYWORDS: [&str; 2] = ["gesetzlich", "rente"];
const OCCUPATIONAL_KEYWORDS: [&str; 3] = ["riester", "bav", "betrieblich"];

impl ContractClassifier for KeywordClassifier {
    fn classify(&self, contract: &Contract) -> ContractClasses {
        let contract_type = contract.contract_type.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| contract_type.contains(k));

        let occupational = contains_any(&OCCUPATIONAL_KEYWORDS);
        ContractClasses {
            legal: contains_any(&LEGAL_KEYWORDS),
            private: !occupational && !contract_type.contains("gesetzlich"),
            occupational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ContractCategory;

    fn classify(contract_type: &str) -> ContractClasses {
        KeywordClassifier.classify(&Contract::new(ContractCategory::Pension, contract_type, 100.0))
    }

    #[test]
    fn test_statutory_pension() {
        let classes = classify("Gesetzliche Rente");
        assert!(classes.legal);
        assert!(!classes.private);
        assert!(!classes.occupational);
    }

    #[test]
    fn test_overlapping_pillars() {
        let riester = classify("Riester-Rente");
        assert!(riester.legal && riester.occupational && !riester.private);

        let rentenvers = classify("Rentenvers.");
        assert!(rentenvers.legal && rentenvers.private && !rentenvers.occupational);
    }

    #[test]
    fn test_occupational_keywords() {
        assert!(classify("Betriebliche Altersvorsorge").occupational);
        assert!(classify("bAV Direktversicherung").occupational);
    }

    #[test]
    fn test_everything_else_is_private() {
        let classes = classify("Kapital-Lebensvers.");
        assert_eq!(
            classes,
            ContractClasses { legal: false, private: true, occupational: false }
        );
        assert!(classify("").private);
    }

    #[test]
    fn test_closure_classifier() {
        let all_private = |_: &Contract| ContractClasses { private: true, ..Default::default() };
        let classes = all_private.classify(&Contract::default());
        assert!(classes.private && !classes.legal);
    }
}
