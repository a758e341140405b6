use crate::{Category, Participant};

const SAMPLE_MALE: &[(&str, u32)] = &[
    ("Jonas", 40),
    ("Lukas", 35),
    ("Finn", 12),
    ("Paul", 5),
    ("Max", 3),
];

const SAMPLE_FEMALE: &[(&str, u32)] = &[
    ("Mia", 45),
    ("Emma", 30),
    ("Lena", 29),
    ("Anna", 8),
    ("Lea", 1),
];

/// Built-in demo roster for trying the tool without real upload files. Both
/// categories are represented with weights on each side of every mode
/// threshold, so neither mode filters down to an empty pool.
pub fn sample_roster() -> Vec<Participant> {
    let male = SAMPLE_MALE
        .iter()
        .map(|&(name, weight)| Participant::new(name, weight, Category::Male));
    let female = SAMPLE_FEMALE
        .iter()
        .map(|&(name, weight)| Participant::new(name, weight, Category::Female));
    male.chain(female).collect()
}
