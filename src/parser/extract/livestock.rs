use crate::record::{Field, Record};

use super::super::lines::LinePool;
use super::super::patterns::SHEEP_RE;

/// Suffolk mentions pin both species and breed; any other sheep vocabulary
/// only pins the species.
pub fn assign_species(record: Record, pool: &LinePool) -> Record {
    if pool.any_line(|l| l.to_lowercase().contains("suffolk")) {
        record.fill(Field::Species, "Sheep").fill(Field::Breeds, "Suffolk")
    } else if pool.any_line(|l| SHEEP_RE.is_match(l)) {
        record.fill(Field::Species, "Sheep")
    } else {
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn species(raw: &str) -> (String, String) {
        let r = assign_species(
            Record::default(),
            &LinePool::from_raw(raw, &Vocabulary::default()),
        );
        (r.get(Field::Species).to_string(), r.get(Field::Breeds).to_string())
    }

    #[test]
    fn suffolk_sets_breed() {
        assert_eq!(species("Marsh SUFFOLKS\nEarl Marsh"), ("Sheep".into(), "Suffolk".into()));
    }

    #[test]
    fn sheep_words_set_species_only() {
        assert_eq!(species("Show lambs for sale"), ("Sheep".into(), String::new()));
    }

    #[test]
    fn no_livestock_words() {
        assert_eq!(species("Earl Marsh\nAbraham Lambert"), (String::new(), String::new()));
    }
}
